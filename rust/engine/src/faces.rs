// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face resolution: mapping a world direction onto a box's local faces
//!
//! The box may be arbitrarily rotated relative to the world axes, so
//! "north face" is not always the local +Y face. The resolver transforms
//! the requested world direction into box-local space and picks the
//! best-aligned local axis and side; re-orienting the box between calls
//! can legitimately change the answer, but for an unchanged box the result
//! is stable.

use crate::direction::CardinalDirection;
use crate::error::{Error, Result};
use boxnav_core::{normalize_or_err, Axis, Face, FaceSide, SectionBox, TOLERANCE};
use nalgebra::Vector3;
use tracing::trace;

/// Resolve a cardinal direction to the local axis/side the Adjuster mutates
///
/// The world direction is taken into box-local coordinates through the
/// inverse transform; the larger of the absolute local X and Y components
/// decides the axis, the component's sign decides Min vs Max side. A
/// direction whose local horizontal component vanishes (box edge-on) is
/// rejected with [`Error::AmbiguousDirection`].
pub fn resolve_face(
    section_box: &SectionBox,
    direction: CardinalDirection,
) -> Result<(Axis, FaceSide)> {
    let world = direction.world_vector();
    let local = section_box.transform().inverse().apply_to_vector(world);

    let abs_x = local.x.abs();
    let abs_y = local.y.abs();
    if Vector3::new(local.x, local.y, 0.0).norm() < TOLERANCE {
        return Err(Error::AmbiguousDirection);
    }

    let (axis, component) = if abs_x > abs_y {
        (Axis::X, local.x)
    } else {
        (Axis::Y, local.y)
    };
    let side = if component > 0.0 {
        FaceSide::Max
    } else {
        FaceSide::Min
    };
    trace!(?direction, ?axis, ?side, "resolved cardinal direction to local face");
    Ok((axis, side))
}

/// Select the face whose outward normal best matches a world direction
///
/// Maximum dot product over the six derived faces wins.
pub fn best_face_for(section_box: &SectionBox, world_direction: Vector3<f64>) -> Result<Face> {
    let dir = normalize_or_err(world_direction)?;
    let faces = section_box.faces();
    let mut best = faces[0];
    let mut best_dot = best.normal.dot(&dir);
    for face in &faces[1..] {
        let dot = face.normal.dot(&dir);
        if dot > best_dot {
            best = *face;
            best_dot = dot;
        }
    }
    Ok(best)
}
