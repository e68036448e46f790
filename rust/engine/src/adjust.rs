// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The box adjuster: applying signed deltas to the six local bounds
//!
//! Adjustment is atomic. Either every delta applies and the candidate box
//! satisfies strict `min < max` on all three axes, or the original error
//! comes back and no box was produced; there is no half-mutated state.

use crate::error::{Error, Result};
use boxnav_core::{Point3, SectionBox, Transform};

/// Signed adjustments to each of the six local-space bounds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxDeltas {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl BoxDeltas {
    /// Deltas touching only the vertical bounds
    pub fn vertical(min_z: f64, max_z: f64) -> Self {
        Self {
            min_z,
            max_z,
            ..Self::default()
        }
    }

    /// Symmetric expansion by `amount` on every bound (negative shrinks)
    pub fn uniform(amount: f64) -> Self {
        Self {
            min_x: -amount,
            max_x: amount,
            min_y: -amount,
            max_y: amount,
            min_z: -amount,
            max_z: amount,
        }
    }

    /// True when every delta is zero
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Apply deltas to a box, keeping its transform
pub fn adjust(section_box: &SectionBox, deltas: &BoxDeltas) -> Result<SectionBox> {
    adjust_with_transform(section_box, deltas, *section_box.transform())
}

/// Apply deltas to a box with an overridden transform
///
/// Returns the candidate only if all three axis invariants hold strictly;
/// a zero-width or inverted result is [`Error::InvalidDimensions`].
pub fn adjust_with_transform(
    section_box: &SectionBox,
    deltas: &BoxDeltas,
    transform: Transform,
) -> Result<SectionBox> {
    let min = section_box.min();
    let max = section_box.max();
    let new_min = Point3::new(
        min.x + deltas.min_x,
        min.y + deltas.min_y,
        min.z + deltas.min_z,
    );
    let new_max = Point3::new(
        max.x + deltas.max_x,
        max.y + deltas.max_y,
        max.z + deltas.max_z,
    );
    SectionBox::new(new_min, new_max, transform).map_err(|err| match err {
        boxnav_core::Error::InvalidDimensions { axis } => Error::InvalidDimensions { axis },
        other => Error::Core(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use boxnav_core::Axis;

    fn sample() -> SectionBox {
        SectionBox::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(100.0, 100.0, 100.0),
            Transform::identity(),
        )
        .unwrap()
    }

    #[test]
    fn applies_all_deltas_when_valid() {
        let adjusted = adjust(
            &sample(),
            &BoxDeltas {
                min_x: 10.0,
                max_x: 50.0,
                min_z: -20.0,
                ..BoxDeltas::default()
            },
        )
        .unwrap();
        assert_relative_eq!(adjusted.min(), Point3::new(10.0, 0.0, -20.0));
        assert_relative_eq!(adjusted.max(), Point3::new(150.0, 100.0, 100.0));
    }

    #[test]
    fn rejects_a_max_driven_past_min() {
        // max.x = 100 - 200 = -100 < min.x = 0
        let err = adjust(
            &sample(),
            &BoxDeltas {
                max_x: -200.0,
                ..BoxDeltas::default()
            },
        );
        assert_eq!(err, Err(Error::InvalidDimensions { axis: Axis::X }));
    }

    #[test]
    fn rejects_zero_width_results() {
        let err = adjust(
            &sample(),
            &BoxDeltas {
                min_y: 100.0,
                ..BoxDeltas::default()
            },
        );
        assert_eq!(err, Err(Error::InvalidDimensions { axis: Axis::Y }));
    }

    #[test]
    fn failure_leaves_no_partial_result() {
        let original = sample();
        let _ = adjust(
            &original,
            &BoxDeltas {
                max_z: -500.0,
                ..BoxDeltas::default()
            },
        );
        // input untouched; the adjuster only ever builds a fresh candidate
        assert_relative_eq!(original.max().z, 100.0);
    }

    #[test]
    fn uniform_deltas_expand_symmetrically() {
        let grown = adjust(&sample(), &BoxDeltas::uniform(5.0)).unwrap();
        assert_relative_eq!(grown.min(), Point3::new(-5.0, -5.0, -5.0));
        assert_relative_eq!(grown.max(), Point3::new(105.0, 105.0, 105.0));
        assert!(BoxDeltas::default().is_noop());
    }
}
