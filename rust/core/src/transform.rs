// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rigid transforms between box-local and world coordinates
//!
//! A [`Transform`] carries an orthonormal basis plus an origin. Only rigid
//! transforms (rotation + translation) exist in this domain, so the inverse
//! is exact: transposed basis, negated rotated translation.

use crate::error::{Error, Result};
use crate::TOLERANCE;
use nalgebra::{Point3, Vector3};

/// Orthonormality slack accepted by [`Transform::from_basis`]
const ORTHO_TOLERANCE: f64 = 1e-6;

/// Normalize a vector, rejecting near-zero input instead of producing NaN
pub fn normalize_or_err(v: Vector3<f64>) -> Result<Vector3<f64>> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(Error::DegenerateVector);
    }
    Ok(v / len)
}

/// Rigid transform: orthonormal basis (columns) plus origin
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    basis_x: Vector3<f64>,
    basis_y: Vector3<f64>,
    basis_z: Vector3<f64>,
    origin: Point3<f64>,
}

impl Transform {
    /// Identity transform (world frame)
    pub fn identity() -> Self {
        Self {
            basis_x: Vector3::x(),
            basis_y: Vector3::y(),
            basis_z: Vector3::z(),
            origin: Point3::origin(),
        }
    }

    /// Build a transform from explicit basis vectors and an origin
    ///
    /// The basis must be orthonormal within a small slack; anything else is
    /// a programming-contract violation on the caller side and is rejected
    /// with [`Error::NonRigidTransform`].
    pub fn from_basis(
        basis_x: Vector3<f64>,
        basis_y: Vector3<f64>,
        basis_z: Vector3<f64>,
        origin: Point3<f64>,
    ) -> Result<Self> {
        let unit = |v: &Vector3<f64>| (v.norm() - 1.0).abs() <= ORTHO_TOLERANCE;
        if !unit(&basis_x) || !unit(&basis_y) || !unit(&basis_z) {
            return Err(Error::NonRigidTransform);
        }
        if basis_x.dot(&basis_y).abs() > ORTHO_TOLERANCE
            || basis_y.dot(&basis_z).abs() > ORTHO_TOLERANCE
            || basis_z.dot(&basis_x).abs() > ORTHO_TOLERANCE
        {
            return Err(Error::NonRigidTransform);
        }
        Ok(Self {
            basis_x,
            basis_y,
            basis_z,
            origin,
        })
    }

    /// Rotation about the world Z axis by `angle` radians, origin unchanged
    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            basis_x: Vector3::new(cos, sin, 0.0),
            basis_y: Vector3::new(-sin, cos, 0.0),
            basis_z: Vector3::z(),
            origin: Point3::origin(),
        }
    }

    /// Pure translation by `offset`
    pub fn translation(offset: Vector3<f64>) -> Self {
        Self {
            origin: Point3::origin() + offset,
            ..Self::identity()
        }
    }

    /// World-space direction of the local X axis
    #[inline]
    pub fn basis_x(&self) -> Vector3<f64> {
        self.basis_x
    }

    /// World-space direction of the local Y axis
    #[inline]
    pub fn basis_y(&self) -> Vector3<f64> {
        self.basis_y
    }

    /// World-space direction of the local Z axis
    #[inline]
    pub fn basis_z(&self) -> Vector3<f64> {
        self.basis_z
    }

    /// Translation component
    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Map a local point into world space
    #[inline]
    pub fn apply_to_point(&self, p: Point3<f64>) -> Point3<f64> {
        self.origin + self.basis_x * p.x + self.basis_y * p.y + self.basis_z * p.z
    }

    /// Map a local direction into world space (translation ignored)
    #[inline]
    pub fn apply_to_vector(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.basis_x * v.x + self.basis_y * v.y + self.basis_z * v.z
    }

    /// Exact rigid inverse: transposed basis, negated rotated translation
    pub fn inverse(&self) -> Self {
        let basis_x = Vector3::new(self.basis_x.x, self.basis_y.x, self.basis_z.x);
        let basis_y = Vector3::new(self.basis_x.y, self.basis_y.y, self.basis_z.y);
        let basis_z = Vector3::new(self.basis_x.z, self.basis_y.z, self.basis_z.z);
        let o = self.origin.coords;
        let origin = Point3::new(
            -self.basis_x.dot(&o),
            -self.basis_y.dot(&o),
            -self.basis_z.dot(&o),
        );
        Self {
            basis_x,
            basis_y,
            basis_z,
            origin,
        }
    }

    /// Composition `self ∘ other`: apply `other` first, then `self`
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            basis_x: self.apply_to_vector(other.basis_x),
            basis_y: self.apply_to_vector(other.basis_y),
            basis_z: self.apply_to_vector(other.basis_z),
            origin: self.apply_to_point(other.origin),
        }
    }

    /// Signed rotation of the local X axis about world Z, in radians
    ///
    /// Fails with [`Error::DegenerateVector`] when the local X axis is
    /// vertical (no in-plane component to measure).
    pub fn rotation_about_z(&self) -> Result<f64> {
        let flat = Vector3::new(self.basis_x.x, self.basis_x.y, 0.0);
        if flat.norm() < TOLERANCE {
            return Err(Error::DegenerateVector);
        }
        Ok(self.basis_x.y.atan2(self.basis_x.x))
    }

    /// Strip any out-of-plane tilt, keeping only rotation about Z and the
    /// XY translation
    ///
    /// The local X axis is projected onto the world XY plane and
    /// renormalized, Z becomes world +Z, Y is rebuilt as Z × X, and the
    /// origin's Z is zeroed. Used when a plan view's crop transform becomes
    /// a box transform whose Z bounds are elevations.
    pub fn xy_only(&self) -> Result<Self> {
        let basis_x = normalize_or_err(Vector3::new(self.basis_x.x, self.basis_x.y, 0.0))?;
        let basis_z = Vector3::z();
        let basis_y = basis_z.cross(&basis_x);
        Ok(Self {
            basis_x,
            basis_y,
            basis_z,
            origin: Point3::new(self.origin.x, self.origin.y, 0.0),
        })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_3;

    fn sample() -> Transform {
        Transform::rotation_z(FRAC_PI_3).compose(&Transform::translation(Vector3::new(
            12.5, -3.0, 7.25,
        )))
    }

    #[test]
    fn inverse_round_trips_points() {
        let t = sample();
        let inv = t.inverse();
        let p = Point3::new(1.0, -2.0, 3.5);
        let back = inv.apply_to_point(t.apply_to_point(p));
        assert_relative_eq!(back, p, epsilon = 1e-12);
    }

    #[test]
    fn inverse_round_trips_vectors() {
        let t = sample();
        let inv = t.inverse();
        let v = Vector3::new(-0.3, 0.9, 0.1);
        let back = inv.apply_to_vector(t.apply_to_vector(v));
        assert_relative_eq!(back, v, epsilon = 1e-12);
    }

    #[test]
    fn compose_matches_sequential_application() {
        let a = Transform::rotation_z(0.7);
        let b = Transform::translation(Vector3::new(2.0, 0.0, -1.0));
        let p = Point3::new(4.0, 5.0, 6.0);
        let combined = a.compose(&b).apply_to_point(p);
        let sequential = a.apply_to_point(b.apply_to_point(p));
        assert_relative_eq!(combined, sequential, epsilon = 1e-12);
    }

    #[test]
    fn from_basis_rejects_scaled_axes() {
        let result = Transform::from_basis(
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::y(),
            Vector3::z(),
            Point3::origin(),
        );
        assert_eq!(result, Err(Error::NonRigidTransform));
    }

    #[test]
    fn from_basis_rejects_sheared_axes() {
        let skew = Vector3::new(1.0, 0.4, 0.0).normalize();
        let result = Transform::from_basis(Vector3::x(), skew, Vector3::z(), Point3::origin());
        assert_eq!(result, Err(Error::NonRigidTransform));
    }

    #[test]
    fn rotation_about_z_reads_back_the_angle() {
        let t = Transform::rotation_z(0.42);
        assert_relative_eq!(t.rotation_about_z().unwrap(), 0.42, epsilon = 1e-12);
    }

    #[test]
    fn xy_only_flattens_origin_and_keeps_plan_rotation() {
        let tilted = Transform::from_basis(
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Point3::new(3.0, 4.0, 9.0),
        )
        .unwrap();
        let flat = tilted.xy_only().unwrap();
        assert_relative_eq!(flat.basis_z(), Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(flat.origin().z, 0.0);
        assert_relative_eq!(flat.rotation_about_z().unwrap(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn xy_only_rejects_vertical_x_axis() {
        let vertical_x = Transform::from_basis(
            Vector3::z(),
            Vector3::x(),
            Vector3::y(),
            Point3::origin(),
        )
        .unwrap();
        assert_eq!(vertical_x.xy_only(), Err(Error::DegenerateVector));
    }
}
