// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::direction::{CardinalDirection, Vertical};
use boxnav_core::Axis;
use thiserror::Error;

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which kind of reference entity a search was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Level,
    Grid,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Level => write!(f, "level"),
            ReferenceKind::Grid => write!(f, "grid"),
        }
    }
}

/// Where a search was headed when it came up empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Vertical(Vertical),
    Cardinal(CardinalDirection),
}

impl std::fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDirection::Vertical(v) => write!(f, "{v:?}"),
            SearchDirection::Cardinal(c) => write!(f, "{c:?}"),
        }
    }
}

/// Errors a navigation request can be rejected with
///
/// All of these are deterministic geometric facts, locally recoverable by
/// the caller presenting a message and leaving the model unchanged. None
/// warrant a retry.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// No level/grid qualifies beyond tolerance in the requested direction
    #[error("no {kind} found toward {direction}")]
    NoCandidateInDirection {
        kind: ReferenceKind,
        direction: SearchDirection,
    },

    /// A "move both sides" request would make top <= bottom
    #[error("move would make the box top drop to or below its bottom")]
    WouldInvertBox,

    /// Flattened search direction below tolerance; the view is edge-on to
    /// the horizontal search plane
    #[error("cannot disambiguate a horizontal target: search direction is vertical")]
    AmbiguousDirection,

    /// Resulting box fails the strict min < max invariant on an axis
    #[error("adjusted box would have invalid dimensions on the {axis:?} axis")]
    InvalidDimensions { axis: Axis },

    /// A snap search found the box already sitting on the reference
    #[error("the face is already at the nearest {kind}")]
    AlreadyAtReference { kind: ReferenceKind },

    /// Alignment input lacked a crop region or vertical range it needs
    #[error("view snapshot is missing {what}")]
    MissingViewData { what: &'static str },

    /// Alignment requested against a view type with no defined conversion
    #[error("no alignment conversion defined for this view kind")]
    UnsupportedViewKind,

    /// Core geometry error (degenerate vector, non-rigid transform)
    #[error(transparent)]
    Core(#[from] boxnav_core::Error),
}
