// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # BoxNav Core
//!
//! Value types and geometric primitives for section-box navigation:
//! rigid [`Transform`]s, the [`SectionBox`] clipping volume with its
//! derived [`Face`] list, immutable [`Level`]/[`Grid`] snapshots with the
//! [`ReferenceIndex`] search surface, and length-unit conversion.
//!
//! Everything here is a plain value passed by the host per request; the
//! crate holds no session state and never mutates its inputs. All lengths
//! are in internal units (decimal feet) unless a [`LengthUnit`] conversion
//! says otherwise.

pub mod bbox;
pub mod error;
pub mod refs;
pub mod transform;
pub mod units;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use bbox::{Axis, Face, FaceSide, SectionBox};
pub use error::{Error, Result};
pub use refs::{Grid, GridHit, Level, ReferenceIndex, VerticalSide};
pub use transform::{normalize_or_err, Transform};
pub use units::{default_nudge_internal, LengthUnit, DEFAULT_NUDGE_MM};

/// Minimum distance/length below which two values are treated as equal
///
/// Used as the default exclusion radius for level/grid searches and as the
/// degenerate-length cutoff for direction vectors.
pub const TOLERANCE: f64 = 1e-5;
