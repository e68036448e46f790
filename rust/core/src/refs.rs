// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference entities: levels, grids, and the search index over them
//!
//! Levels and grids are immutable snapshots handed in by the host per
//! navigation session. Collections are small (tens to low hundreds of
//! entries), so every query is a plain linear scan.
//!
//! Both searches share the same two determinism rules: candidates within
//! `tolerance` of the reference position are excluded (otherwise a box
//! sitting exactly on a level would "find" it forever), and among
//! candidates whose distances are equal within `tolerance`, the first in
//! input order wins. Models routinely contain levels at identical
//! elevations, so the tie-break is load-bearing.

use nalgebra::{Point3, Vector3};

/// A named horizontal reference elevation in the building model
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    /// Display name, e.g. "Level 2"
    pub name: String,
    /// World elevation in internal units
    pub elevation: f64,
}

impl Level {
    pub fn new(name: impl Into<String>, elevation: f64) -> Self {
        Self {
            name: name.into(),
            elevation,
        }
    }
}

/// A named vertical reference line in the horizontal plane
///
/// The line is treated as infinite for intersection purposes; the stored
/// endpoints only fix its position and direction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    /// Display name, e.g. "A" or "3"
    pub name: String,
    /// One point on the line (world XY plane)
    pub start: Point3<f64>,
    /// A second, distinct point on the line
    pub end: Point3<f64>,
}

impl Grid {
    pub fn new(name: impl Into<String>, start: Point3<f64>, end: Point3<f64>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }
}

/// Which side of a reference elevation to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalSide {
    Above,
    Below,
}

/// A grid found along a probe ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridHit<'a> {
    /// The grid whose line the ray crossed
    pub grid: &'a Grid,
    /// Intersection point, at the probe origin's Z
    pub point: Point3<f64>,
    /// Travel distance from the origin along the (normalized) direction
    pub distance: f64,
}

/// Snapshot of the model's reference entities, in host order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceIndex {
    pub levels: Vec<Level>,
    pub grids: Vec<Grid>,
}

impl ReferenceIndex {
    pub fn new(levels: Vec<Level>, grids: Vec<Grid>) -> Self {
        Self { levels, grids }
    }

    /// Nearest level strictly beyond `elevation` on the requested side
    ///
    /// Levels within `tolerance` of `elevation` are excluded. Ties within
    /// `tolerance` resolve to the first level in input order.
    pub fn level_near(
        &self,
        elevation: f64,
        side: VerticalSide,
        tolerance: f64,
    ) -> Option<&Level> {
        let mut best: Option<(&Level, f64)> = None;
        for level in &self.levels {
            let qualifies = match side {
                VerticalSide::Above => level.elevation > elevation + tolerance,
                VerticalSide::Below => level.elevation < elevation - tolerance,
            };
            if !qualifies {
                continue;
            }
            let distance = (level.elevation - elevation).abs();
            match best {
                // strictly-better-by-more-than-tolerance keeps first-wins ties
                Some((_, best_distance)) if distance + tolerance < best_distance => {
                    best = Some((level, distance));
                }
                None => best = Some((level, distance)),
                _ => {}
            }
        }
        best.map(|(level, _)| level)
    }

    /// Successive levels walking away from `elevation` on one side
    ///
    /// Repeats [`Self::level_near`] from each hit, collecting up to
    /// `limit` levels. Powers "list everything above the box top" queries.
    pub fn levels_toward(
        &self,
        elevation: f64,
        side: VerticalSide,
        tolerance: f64,
        limit: usize,
    ) -> Vec<&Level> {
        let mut found = Vec::new();
        let mut cursor = elevation;
        while found.len() < limit {
            match self.level_near(cursor, side, tolerance) {
                Some(level) => {
                    cursor = level.elevation;
                    found.push(level);
                }
                None => break,
            }
        }
        found
    }

    /// Nearest grid line crossed by a horizontal ray from `origin`
    ///
    /// The direction's Z component is ignored; the intersection runs in the
    /// world XY plane against each grid extended to an infinite line. Grids
    /// parallel to the probe (denominator below `tolerance`) are skipped as
    /// unsolvable. The smallest travel distance `t > tolerance` wins; ties
    /// within `tolerance` resolve to the first grid in input order.
    ///
    /// Returns `None` when the flattened direction itself is degenerate;
    /// callers that can distinguish that case check the flattened length
    /// before probing.
    pub fn grid_along(
        &self,
        origin: Point3<f64>,
        direction: Vector3<f64>,
        tolerance: f64,
    ) -> Option<GridHit<'_>> {
        let dir = flatten(direction, tolerance)?;

        let mut best: Option<GridHit<'_>> = None;
        for grid in &self.grids {
            let t = match crossing_t(origin, dir, grid, tolerance) {
                Some(t) => t,
                None => continue,
            };
            if t <= tolerance {
                continue;
            }
            let replace = match &best {
                Some(hit) => t + tolerance < hit.distance,
                None => true,
            };
            if replace {
                best = Some(GridHit {
                    grid,
                    point: Point3::new(origin.x + dir.x * t, origin.y + dir.y * t, origin.z),
                    distance: t,
                });
            }
        }
        best
    }

    /// Grid line crossing the probe within `tolerance` of zero travel
    ///
    /// Same intersection setup as [`Self::grid_along`], but keeping exactly
    /// the crossings that method excludes: `|t| <= tolerance` means the
    /// origin already sits on the grid line.
    pub fn grid_at(
        &self,
        origin: Point3<f64>,
        direction: Vector3<f64>,
        tolerance: f64,
    ) -> Option<&Grid> {
        let dir = flatten(direction, tolerance)?;
        for grid in &self.grids {
            if let Some(t) = crossing_t(origin, dir, grid, tolerance) {
                if t.abs() <= tolerance {
                    return Some(grid);
                }
            }
        }
        None
    }
}

/// Flatten a probe direction into the XY plane and normalize it
fn flatten(direction: Vector3<f64>, tolerance: f64) -> Option<Vector3<f64>> {
    let flat = Vector3::new(direction.x, direction.y, 0.0);
    let len = flat.norm();
    if len < tolerance {
        return None;
    }
    Some(flat / len)
}

/// Signed travel along `dir` to a grid's infinite line, XY plane only
fn crossing_t(
    origin: Point3<f64>,
    dir: Vector3<f64>,
    grid: &Grid,
    tolerance: f64,
) -> Option<f64> {
    let line = grid.end - grid.start;
    let line_len = Vector3::new(line.x, line.y, 0.0).norm();
    if line_len < tolerance {
        return None; // zero-length grid line, nothing to intersect
    }
    let line = line / line_len;
    // 2D cross products; everything happens in the XY plane
    let denom = dir.x * line.y - dir.y * line.x;
    if denom.abs() < tolerance {
        return None; // parallel, no solution
    }
    let offset = grid.start - origin;
    Some((offset.x * line.y - offset.y * line.x) / denom)
}
