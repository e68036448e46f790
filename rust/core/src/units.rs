// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length unit conversion to and from internal units
//!
//! The host model stores all lengths in decimal feet; user-facing amounts
//! (nudge distances, expand amounts) arrive in whatever display unit the
//! project uses and get converted at the boundary.

/// Display length units supported at the request boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    Millimeters,
    Centimeters,
    Meters,
    Feet,
    Inches,
}

impl LengthUnit {
    /// Internal (feet) per one of this unit
    #[inline]
    pub fn feet_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1.0 / 304.8,
            LengthUnit::Centimeters => 1.0 / 30.48,
            LengthUnit::Meters => 1.0 / 0.3048,
            LengthUnit::Feet => 1.0,
            LengthUnit::Inches => 1.0 / 12.0,
        }
    }

    /// Convert a display-unit value to internal units
    #[inline]
    pub fn to_internal(self, value: f64) -> f64 {
        value * self.feet_per_unit()
    }

    /// Convert an internal-unit value to this display unit
    #[inline]
    pub fn from_internal(self, value: f64) -> f64 {
        value / self.feet_per_unit()
    }
}

/// Default nudge distance offered to users, in millimeters
pub const DEFAULT_NUDGE_MM: f64 = 500.0;

/// The default nudge distance converted to internal units
#[inline]
pub fn default_nudge_internal() -> f64 {
    LengthUnit::Millimeters.to_internal(DEFAULT_NUDGE_MM)
}
