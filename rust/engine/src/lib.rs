// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # BoxNav Engine
//!
//! Geometric navigation for a building model's section box: snap the top
//! or bottom plane to the nearest level, push a face to the next grid
//! line, nudge by a fixed distance, expand or shrink uniformly, or derive
//! a whole new box from a 2D view's crop region.
//!
//! The engine is synchronous and stateless between calls. Every operation
//! takes an immutable snapshot ([`boxnav_core::SectionBox`] plus a
//! [`boxnav_core::ReferenceIndex`]) and returns a new box or a typed
//! rejection; persistence is the caller's transaction. Preview and apply
//! run the same computation, so a hovered candidate is exactly what a
//! click commits.
//!
//! ## Quick start
//!
//! ```
//! use boxnav_core::{Level, Point3, ReferenceIndex, SectionBox, Transform};
//! use boxnav_engine::{
//!     NavigationRequest, Navigator, Outcome, Vertical, VerticalMode, VerticalTarget,
//! };
//!
//! let index = ReferenceIndex::new(
//!     vec![Level::new("L1", 0.0), Level::new("L2", 12.0)],
//!     Vec::new(),
//! );
//! let nav = Navigator::new(index);
//! let current = SectionBox::new(
//!     Point3::new(-10.0, -10.0, 0.0),
//!     Point3::new(10.0, 10.0, 9.0),
//!     Transform::identity(),
//! )
//! .unwrap();
//!
//! let outcome = nav.apply(
//!     &current,
//!     &NavigationRequest::Vertical {
//!         target: VerticalTarget::Top,
//!         direction: Vertical::Up,
//!         mode: VerticalMode::SnapToLevel,
//!     },
//! );
//! match outcome {
//!     Outcome::Applied(new_box) => assert_eq!(new_box.top_z(), 12.0),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

pub mod adjust;
pub mod align;
pub mod direction;
pub mod error;
pub mod faces;
pub mod navigate;
pub mod search;

pub use adjust::{adjust, adjust_with_transform, BoxDeltas};
pub use align::{
    box_from_footprint, box_from_view, crop_from_box, CropAlignment, PlanRange, ViewKind,
    ViewSnapshot,
};
pub use direction::{CardinalDirection, Orientation, Vertical, VerticalTarget};
pub use error::{Error, ReferenceKind, Result, SearchDirection};
pub use faces::{best_face_for, resolve_face};
pub use navigate::{LevelContext, NavigationRequest, Navigator, Outcome};
pub use search::{expand_uniform, horizontal_move, vertical_move, HorizontalMode, VerticalMode};
