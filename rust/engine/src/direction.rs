// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed direction and target vocabulary for navigation requests
//!
//! Closed enums, validated at the request boundary; the engine never sees
//! free-form direction strings.

use nalgebra::Vector3;

/// World-frame cardinal direction for horizontal moves
///
/// North is world +Y, east is world +X. The face resolver maps these onto
/// the box's local axes, so a rotated box still moves the face the user
/// means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    /// Unit vector of this direction in world space
    #[inline]
    pub fn world_vector(self) -> Vector3<f64> {
        match self {
            CardinalDirection::North => Vector3::y(),
            CardinalDirection::South => -Vector3::y(),
            CardinalDirection::East => Vector3::x(),
            CardinalDirection::West => -Vector3::x(),
        }
    }
}

/// Vertical sense of a level move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Up,
    Down,
}

impl Vertical {
    /// +1 for up, -1 for down
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Vertical::Up => 1.0,
            Vertical::Down => -1.0,
        }
    }
}

/// Which horizontal plane(s) of the box a vertical move addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalTarget {
    /// Top plane only
    Top,
    /// Bottom plane only
    Bottom,
    /// Both planes (move the whole box)
    Both,
}

/// Whether a face moves along its outward normal or against it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Toward the box center (against the outward normal)
    In,
    /// Away from the box center (along the outward normal)
    Out,
}
