// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The section box: a local-frame bounding box plus a rigid transform
//!
//! The box keeps its min/max corners in local coordinates; the transform
//! maps them into world space. The strict `min < max` invariant holds on
//! every axis for any box that exists: zero-width and inverted boxes are
//! both rejected at construction, so downstream code never has to handle a
//! degenerate flat box.

use crate::error::{Error, Result};
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};

/// Local box axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Which bound of an axis a face sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceSide {
    /// The face at the axis minimum (outward normal points along -axis)
    Min,
    /// The face at the axis maximum (outward normal points along +axis)
    Max,
}

impl FaceSide {
    /// Outward sign of this side: -1 for Min, +1 for Max
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            FaceSide::Min => -1.0,
            FaceSide::Max => 1.0,
        }
    }
}

/// One of the six bounding planes of a box, derived on demand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Local axis the face lies on
    pub axis: Axis,
    /// Min or Max side of that axis
    pub side: FaceSide,
    /// Outward normal in world space (unit length)
    pub normal: Vector3<f64>,
    /// Face center in world space
    pub center: Point3<f64>,
    /// Extents of the face along the two remaining local axes
    pub extent: (f64, f64),
}

/// Axis-aligned clipping box in a local frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionBox {
    min: Point3<f64>,
    max: Point3<f64>,
    transform: Transform,
}

impl SectionBox {
    /// Create a box, enforcing strict `min < max` on every axis
    pub fn new(min: Point3<f64>, max: Point3<f64>, transform: Transform) -> Result<Self> {
        for (axis, lo, hi) in [
            (Axis::X, min.x, max.x),
            (Axis::Y, min.y, max.y),
            (Axis::Z, min.z, max.z),
        ] {
            if hi <= lo {
                return Err(Error::InvalidDimensions { axis });
            }
        }
        Ok(Self {
            min,
            max,
            transform,
        })
    }

    /// Local minimum corner
    #[inline]
    pub fn min(&self) -> Point3<f64> {
        self.min
    }

    /// Local maximum corner
    #[inline]
    pub fn max(&self) -> Point3<f64> {
        self.max
    }

    /// Local-to-world transform
    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// World-space image of the local minimum corner
    ///
    /// Note this is the transformed corner, not a world-axis-aligned hull
    /// minimum; for boxes rotated about Z the Z component is still the true
    /// bottom elevation.
    #[inline]
    pub fn world_min(&self) -> Point3<f64> {
        self.transform.apply_to_point(self.min)
    }

    /// World-space image of the local maximum corner
    #[inline]
    pub fn world_max(&self) -> Point3<f64> {
        self.transform.apply_to_point(self.max)
    }

    /// World elevation of the box top plane
    #[inline]
    pub fn top_z(&self) -> f64 {
        self.world_max().z
    }

    /// World elevation of the box bottom plane
    #[inline]
    pub fn bottom_z(&self) -> f64 {
        self.world_min().z
    }

    /// Vertical extent (top minus bottom, world space)
    #[inline]
    pub fn height(&self) -> f64 {
        self.top_z() - self.bottom_z()
    }

    /// Box center in world space
    pub fn center(&self) -> Point3<f64> {
        self.transform
            .apply_to_point(nalgebra::center(&self.min, &self.max))
    }

    /// World XY centroid of the box footprint, at Z = 0
    pub fn footprint_center_xy(&self) -> Point3<f64> {
        let c = self.center();
        Point3::new(c.x, c.y, 0.0)
    }

    /// All eight corners in world space
    pub fn world_corners(&self) -> [Point3<f64>; 8] {
        let (min, max) = (self.min, self.max);
        let mut corners = [Point3::origin(); 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let local = Point3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            );
            *corner = self.transform.apply_to_point(local);
        }
        corners
    }

    /// Rebuild the box with an identity transform from its world corner
    /// extremes
    ///
    /// Used when a section-type crop region already carries full 3D extent
    /// and needs to become a plain world-frame box.
    pub fn to_world_identity(&self) -> Result<Self> {
        let corners = self.world_corners();
        let mut min = corners[0];
        let mut max = corners[0];
        for c in &corners[1..] {
            min = Point3::new(min.x.min(c.x), min.y.min(c.y), min.z.min(c.z));
            max = Point3::new(max.x.max(c.x), max.y.max(c.y), max.z.max(c.z));
        }
        Self::new(min, max, Transform::identity())
    }

    /// The six faces with world-space outward normals and centers
    pub fn faces(&self) -> [Face; 6] {
        let mid = nalgebra::center(&self.min, &self.max);
        let size = self.max - self.min;
        let face = |axis: Axis, side: FaceSide| {
            let sign = side.sign();
            let (local_normal, local_center, extent) = match axis {
                Axis::X => (
                    Vector3::new(sign, 0.0, 0.0),
                    Point3::new(
                        if sign > 0.0 { self.max.x } else { self.min.x },
                        mid.y,
                        mid.z,
                    ),
                    (size.y, size.z),
                ),
                Axis::Y => (
                    Vector3::new(0.0, sign, 0.0),
                    Point3::new(
                        mid.x,
                        if sign > 0.0 { self.max.y } else { self.min.y },
                        mid.z,
                    ),
                    (size.x, size.z),
                ),
                Axis::Z => (
                    Vector3::new(0.0, 0.0, sign),
                    Point3::new(
                        mid.x,
                        mid.y,
                        if sign > 0.0 { self.max.z } else { self.min.z },
                    ),
                    (size.x, size.y),
                ),
            };
            Face {
                axis,
                side,
                normal: self.transform.apply_to_vector(local_normal),
                center: self.transform.apply_to_point(local_center),
                extent,
            }
        };
        [
            face(Axis::X, FaceSide::Min),
            face(Axis::X, FaceSide::Max),
            face(Axis::Y, FaceSide::Min),
            face(Axis::Y, FaceSide::Max),
            face(Axis::Z, FaceSide::Min),
            face(Axis::Z, FaceSide::Max),
        ]
    }
}
