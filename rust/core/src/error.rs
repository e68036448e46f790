// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::bbox::Axis;
use thiserror::Error;

/// Result type for core geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or transforming geometry
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A direction vector normalized to near-zero length
    #[error("degenerate vector: length is below tolerance")]
    DegenerateVector,

    /// A transform basis failed the orthonormality check (shear/scale)
    #[error("transform basis is not orthonormal; only rigid transforms are supported")]
    NonRigidTransform,

    /// A box bound violates the strict min < max invariant
    #[error("invalid box dimensions: min >= max on the {axis:?} axis")]
    InvalidDimensions {
        /// Axis on which the invariant failed
        axis: Axis,
    },
}
