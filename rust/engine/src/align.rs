// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alignment: deriving a box from a foreign view, and the reverse
//!
//! Two conversions live here. `box_from_view` builds a new section box
//! from a 2D view's crop region: plan-type views contribute their crop
//! rectangle plus declared vertical range, section-type views already
//! carry full 3D extent and are rebuilt in world coordinates.
//! `crop_from_box` goes the other way: it reconciles a plan view's crop
//! footprint to a 3D box via a centroid-to-centroid XY translation and a
//! rotation about the vertical axis, without touching the view's own
//! vertical range handling.

use crate::error::{Error, Result};
use boxnav_core::{Point3, SectionBox, Vector3};
use tracing::debug;

/// Kind of a foreign view offered for alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    FloorPlan,
    CeilingPlan,
    Section,
    Elevation,
    /// Any view type with no defined conversion
    Other,
}

impl ViewKind {
    /// Plan-type views pair a flat crop with independent elevation limits
    #[inline]
    pub fn is_plan(self) -> bool {
        matches!(self, ViewKind::FloorPlan | ViewKind::CeilingPlan)
    }

    /// Section-type views carry a crop region with full 3D extent
    #[inline]
    pub fn is_section(self) -> bool {
        matches!(self, ViewKind::Section | ViewKind::Elevation)
    }
}

/// Vertical range of a plan view (cut plane limits), world elevations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanRange {
    pub top: f64,
    pub bottom: f64,
}

/// Read-only snapshot of a foreign view, supplied by the host
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub kind: ViewKind,
    /// The view's crop region, when one is active
    pub crop: Option<SectionBox>,
    /// Plan views: declared vertical range
    pub range: Option<PlanRange>,
}

/// How a plan view's crop must move to match a 3D box footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropAlignment {
    /// XY translation taking the crop centroid onto the box centroid (Z = 0)
    pub translation: Vector3<f64>,
    /// Rotation about the vertical axis through `pivot`, radians
    pub rotation: f64,
    /// World point the rotation axis passes through (box footprint centroid)
    pub pivot: Point3<f64>,
    /// Vertical range the plan view should adopt from the box
    pub range: PlanRange,
}

/// Build a section box from a foreign 2D view
pub fn box_from_view(snapshot: &ViewSnapshot) -> Result<SectionBox> {
    if snapshot.kind.is_section() {
        let crop = snapshot
            .crop
            .as_ref()
            .ok_or(Error::MissingViewData { what: "crop region" })?;
        debug!(kind = ?snapshot.kind, "rebuilding section crop in world coordinates");
        return Ok(crop.to_world_identity()?);
    }
    if !snapshot.kind.is_plan() {
        return Err(Error::UnsupportedViewKind);
    }

    let crop = snapshot
        .crop
        .as_ref()
        .ok_or(Error::MissingViewData { what: "crop region" })?;
    let range = snapshot
        .range
        .ok_or(Error::MissingViewData { what: "vertical range" })?;

    // crop rectangle in the plan, elevations as the new Z bounds; the
    // crop's own rotation about Z survives as the box transform
    let transform = crop.transform().xy_only()?;
    let min = Point3::new(crop.min().x, crop.min().y, range.bottom);
    let max = Point3::new(crop.max().x, crop.max().y, range.top);
    debug!(kind = ?snapshot.kind, "building box from plan crop and range");
    SectionBox::new(min, max, transform).map_err(|err| match err {
        boxnav_core::Error::InvalidDimensions { axis } => Error::InvalidDimensions { axis },
        other => Error::Core(other),
    })
}

/// Fallback: build a plan-aligned box from a set of world points
///
/// Used when a plan view has no active crop; the host collects the world
/// XY extents of the view's visible elements instead.
pub fn box_from_footprint(points: &[Point3<f64>], range: PlanRange) -> Result<SectionBox> {
    let first = points
        .first()
        .ok_or(Error::MissingViewData { what: "footprint points" })?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    SectionBox::new(
        Point3::new(min_x, min_y, range.bottom),
        Point3::new(max_x, max_y, range.top),
        boxnav_core::Transform::identity(),
    )
    .map_err(|err| match err {
        boxnav_core::Error::InvalidDimensions { axis } => Error::InvalidDimensions { axis },
        other => Error::Core(other),
    })
}

/// Compute how a plan view's crop must move to match a 3D box footprint
///
/// Only plan-type views have a defined conversion; the crop footprint is
/// taken in world coordinates. The rotation is the angular difference
/// between the box's local X axis and the crop's, about +Z through the box
/// footprint centroid.
pub fn crop_from_box(
    section_box: &SectionBox,
    view_kind: ViewKind,
    current_crop: &SectionBox,
) -> Result<CropAlignment> {
    if !view_kind.is_plan() {
        return Err(Error::UnsupportedViewKind);
    }

    let box_centroid = section_box.footprint_center_xy();
    let crop_centroid = current_crop.footprint_center_xy();
    let translation = box_centroid - crop_centroid;

    let box_angle = section_box.transform().rotation_about_z()?;
    let crop_angle = current_crop.transform().rotation_about_z()?;

    let alignment = CropAlignment {
        translation,
        rotation: box_angle - crop_angle,
        pivot: box_centroid,
        range: PlanRange {
            top: section_box.top_z(),
            bottom: section_box.bottom_z(),
        },
    };
    debug!(
        rotation = alignment.rotation,
        "reconciling plan crop to box footprint"
    );
    Ok(alignment)
}
