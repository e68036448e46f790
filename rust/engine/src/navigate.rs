// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The navigation facade: typed requests in, typed outcomes out
//!
//! [`Navigator`] owns the reference-entity snapshot and tolerance for one
//! session; the box itself is passed into every call and a fresh box comes
//! back, so the engine holds no box state between calls. `preview` and
//! `apply` run the identical computation, so what the user previews is
//! exactly what gets applied; only the outcome wrapper differs.

use crate::adjust::{adjust, adjust_with_transform, BoxDeltas};
use crate::align::{box_from_view, crop_from_box, CropAlignment, ViewKind, ViewSnapshot};
use crate::direction::{CardinalDirection, Orientation, Vertical, VerticalTarget};
use crate::error::{Error, Result};
use crate::search::{expand_uniform, horizontal_move, vertical_move, HorizontalMode, VerticalMode};
use boxnav_core::{Level, ReferenceIndex, SectionBox, VerticalSide, TOLERANCE};
use tracing::debug;

/// A complete directional move request
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationRequest {
    /// Move the top, bottom, or whole box vertically
    Vertical {
        target: VerticalTarget,
        direction: Vertical,
        mode: VerticalMode,
    },
    /// Move one horizontal face toward a grid or by a fixed amount
    Horizontal {
        face: CardinalDirection,
        orientation: Orientation,
        mode: HorizontalMode,
    },
    /// Grow (positive) or shrink (negative) uniformly on all six bounds
    ExpandShrink { amount: f64 },
    /// Replace the box with one derived from a foreign 2D view
    AlignToView { snapshot: ViewSnapshot },
}

/// Result of a navigation request, for the host to act on
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Computed and meant to be persisted by the caller
    Applied(SectionBox),
    /// Computed for display only; nothing should be persisted
    Preview(SectionBox),
    /// The move is geometrically impossible; the model stays unchanged
    Rejected(Error),
}

/// Nearest levels around the box's top and bottom planes (status display)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelContext {
    pub above_top: Option<Level>,
    pub below_top: Option<Level>,
    pub above_bottom: Option<Level>,
    pub below_bottom: Option<Level>,
}

/// Per-session navigation engine over an immutable reference snapshot
#[derive(Debug, Clone)]
pub struct Navigator {
    index: ReferenceIndex,
    tolerance: f64,
}

impl Navigator {
    /// Navigator with the default tolerance
    pub fn new(index: ReferenceIndex) -> Self {
        Self::with_tolerance(index, TOLERANCE)
    }

    /// Navigator with an explicit exclusion-radius tolerance
    pub fn with_tolerance(index: ReferenceIndex, tolerance: f64) -> Self {
        Self { index, tolerance }
    }

    /// The reference snapshot this navigator searches
    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Compute the candidate box for a request without wrapping the result
    ///
    /// The single code path behind both [`Self::preview`] and
    /// [`Self::apply`].
    pub fn compute(
        &self,
        section_box: &SectionBox,
        request: &NavigationRequest,
    ) -> Result<SectionBox> {
        match request {
            NavigationRequest::Vertical {
                target,
                direction,
                mode,
            } => {
                let deltas = vertical_move(
                    section_box,
                    &self.index,
                    *target,
                    *direction,
                    *mode,
                    self.tolerance,
                )?;
                adjust(section_box, &deltas)
            }
            NavigationRequest::Horizontal {
                face,
                orientation,
                mode,
            } => {
                let deltas = horizontal_move(
                    section_box,
                    &self.index,
                    *face,
                    *orientation,
                    *mode,
                    self.tolerance,
                )?;
                adjust(section_box, &deltas)
            }
            NavigationRequest::ExpandShrink { amount } => {
                adjust(section_box, &expand_uniform(*amount))
            }
            NavigationRequest::AlignToView { snapshot } => box_from_view(snapshot),
        }
    }

    /// Compute a candidate for display; nothing is meant to be persisted
    pub fn preview(&self, section_box: &SectionBox, request: &NavigationRequest) -> Outcome {
        match self.compute(section_box, request) {
            Ok(candidate) => Outcome::Preview(candidate),
            Err(err) => {
                debug!(%err, "preview rejected");
                Outcome::Rejected(err)
            }
        }
    }

    /// Compute the new box for the caller to persist
    pub fn apply(&self, section_box: &SectionBox, request: &NavigationRequest) -> Outcome {
        match self.compute(section_box, request) {
            Ok(new_box) => Outcome::Applied(new_box),
            Err(err) => {
                debug!(%err, "request rejected");
                Outcome::Rejected(err)
            }
        }
    }

    /// Apply precomputed deltas, optionally overriding the transform
    ///
    /// Escape hatch for hosts that assemble their own deltas (e.g. from a
    /// direct-manipulation gizmo) but still want the validity guarantee.
    pub fn apply_deltas(
        &self,
        section_box: &SectionBox,
        deltas: &BoxDeltas,
        transform: Option<boxnav_core::Transform>,
    ) -> Result<SectionBox> {
        match transform {
            Some(t) => adjust_with_transform(section_box, deltas, t),
            None => adjust(section_box, deltas),
        }
    }

    /// Reconcile a plan view's crop to a 3D box footprint
    pub fn align_crop_to_box(
        &self,
        section_box: &SectionBox,
        view_kind: ViewKind,
        current_crop: &SectionBox,
    ) -> Result<CropAlignment> {
        crop_from_box(section_box, view_kind, current_crop)
    }

    /// Nearest levels around the current top and bottom planes
    pub fn level_context(&self, section_box: &SectionBox) -> LevelContext {
        let top_z = section_box.top_z();
        let bottom_z = section_box.bottom_z();
        let near = |z, side| {
            self.index
                .level_near(z, side, self.tolerance)
                .cloned()
        };
        LevelContext {
            above_top: near(top_z, VerticalSide::Above),
            below_top: near(top_z, VerticalSide::Below),
            above_bottom: near(bottom_z, VerticalSide::Above),
            below_bottom: near(bottom_z, VerticalSide::Below),
        }
    }

    /// Successive levels away from the top or bottom plane, for pickers
    pub fn levels_from_plane(
        &self,
        section_box: &SectionBox,
        target: VerticalTarget,
        direction: Vertical,
        limit: usize,
    ) -> Vec<Level> {
        let reference = match target {
            // a whole-box pick anchors on the top, same as a top move
            VerticalTarget::Top | VerticalTarget::Both => section_box.top_z(),
            VerticalTarget::Bottom => section_box.bottom_z(),
        };
        let side = match direction {
            Vertical::Up => VerticalSide::Above,
            Vertical::Down => VerticalSide::Below,
        };
        self.index
            .levels_toward(reference, side, self.tolerance, limit)
            .into_iter()
            .cloned()
            .collect()
    }
}
