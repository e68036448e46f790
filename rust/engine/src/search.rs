// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Level/grid search: turning a directional request into box deltas
//!
//! Vertical moves query the level index against the box's current top or
//! bottom world elevation; horizontal moves resolve a face, derive a
//! search direction from its outward normal, and probe the grid index from
//! the face center. Both produce a [`BoxDeltas`] for the adjuster; the
//! search itself never touches the box.

use crate::adjust::BoxDeltas;
use crate::direction::{CardinalDirection, Orientation, Vertical, VerticalTarget};
use crate::error::{Error, ReferenceKind, Result, SearchDirection};
use crate::faces::{best_face_for, resolve_face};
use boxnav_core::{Axis, FaceSide, ReferenceIndex, SectionBox, VerticalSide};
use tracing::debug;

/// How a vertical move picks its destination
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalMode {
    /// Snap to the nearest qualifying level in the move direction
    SnapToLevel,
    /// Move by a fixed distance (internal units, sign from the direction)
    Nudge(f64),
    /// Move to an explicitly chosen elevation (e.g. picked from a list);
    /// a `Both` move keeps the current box height
    ToElevation(f64),
}

/// How a horizontal move picks its destination
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalMode {
    /// Snap to the nearest grid line crossing the search ray
    SnapToGrid,
    /// Move the face by a fixed distance along the search direction
    Nudge(f64),
}

impl From<Vertical> for VerticalSide {
    fn from(v: Vertical) -> Self {
        match v {
            Vertical::Up => VerticalSide::Above,
            Vertical::Down => VerticalSide::Below,
        }
    }
}

fn no_level(direction: Vertical) -> Error {
    Error::NoCandidateInDirection {
        kind: ReferenceKind::Level,
        direction: SearchDirection::Vertical(direction),
    }
}

/// Compute the vertical deltas for a level move
///
/// `Top` and `Bottom` snaps additionally reject candidates that would push
/// the moved plane past the opposite one; `Both` resolves a level for each
/// plane in the same direction and validates the resulting ordering.
pub fn vertical_move(
    section_box: &SectionBox,
    index: &ReferenceIndex,
    target: VerticalTarget,
    direction: Vertical,
    mode: VerticalMode,
    tolerance: f64,
) -> Result<BoxDeltas> {
    let top_z = section_box.top_z();
    let bottom_z = section_box.bottom_z();
    let side = VerticalSide::from(direction);

    let deltas = match mode {
        VerticalMode::SnapToLevel => match target {
            VerticalTarget::Both => {
                let next_top = index
                    .level_near(top_z, side, tolerance)
                    .ok_or_else(|| no_level(direction))?;
                let next_bottom = index
                    .level_near(bottom_z, side, tolerance)
                    .ok_or_else(|| no_level(direction))?;
                if next_top.elevation <= next_bottom.elevation {
                    return Err(Error::WouldInvertBox);
                }
                debug!(
                    top = %next_top.name,
                    bottom = %next_bottom.name,
                    "snapping both planes to levels"
                );
                BoxDeltas::vertical(next_bottom.elevation - bottom_z, next_top.elevation - top_z)
            }
            VerticalTarget::Top => {
                let level = index
                    .level_near(top_z, side, tolerance)
                    .ok_or_else(|| no_level(direction))?;
                if level.elevation <= bottom_z {
                    return Err(Error::WouldInvertBox);
                }
                debug!(level = %level.name, "snapping top plane to level");
                BoxDeltas::vertical(0.0, level.elevation - top_z)
            }
            VerticalTarget::Bottom => {
                let level = index
                    .level_near(bottom_z, side, tolerance)
                    .ok_or_else(|| no_level(direction))?;
                if level.elevation >= top_z {
                    return Err(Error::WouldInvertBox);
                }
                debug!(level = %level.name, "snapping bottom plane to level");
                BoxDeltas::vertical(level.elevation - bottom_z, 0.0)
            }
        },
        VerticalMode::ToElevation(elevation) => match target {
            VerticalTarget::Top => {
                if elevation <= bottom_z {
                    return Err(Error::WouldInvertBox);
                }
                BoxDeltas::vertical(0.0, elevation - top_z)
            }
            VerticalTarget::Bottom => {
                if elevation >= top_z {
                    return Err(Error::WouldInvertBox);
                }
                BoxDeltas::vertical(elevation - bottom_z, 0.0)
            }
            VerticalTarget::Both => {
                // top lands on the elevation, bottom follows at the same height
                let height = section_box.height();
                let new_top = elevation;
                let new_bottom = elevation - height;
                if new_top <= new_bottom {
                    return Err(Error::WouldInvertBox);
                }
                BoxDeltas::vertical(new_bottom - bottom_z, new_top - top_z)
            }
        },
        VerticalMode::Nudge(amount) => {
            let distance = amount * direction.sign();
            match target {
                VerticalTarget::Top => BoxDeltas::vertical(0.0, distance),
                VerticalTarget::Bottom => BoxDeltas::vertical(distance, 0.0),
                VerticalTarget::Both => BoxDeltas::vertical(distance, distance),
            }
        }
    };
    Ok(deltas)
}

/// Compute the deltas moving one horizontal face toward a grid or by a
/// fixed amount
///
/// The search direction is the face's outward world normal (`Out`) or its
/// negation (`In`). A box tilted edge-on to the horizontal plane cannot
/// resolve a face and is rejected with [`Error::AmbiguousDirection`]; a
/// face already sitting on a grid line reports
/// [`Error::AlreadyAtReference`] instead of snapping past it.
pub fn horizontal_move(
    section_box: &SectionBox,
    index: &ReferenceIndex,
    face_direction: CardinalDirection,
    orientation: Orientation,
    mode: HorizontalMode,
    tolerance: f64,
) -> Result<BoxDeltas> {
    let world_dir = face_direction.world_vector();
    let (axis, side) = resolve_face(section_box, face_direction)?;

    let search_dir = match orientation {
        Orientation::Out => world_dir,
        Orientation::In => -world_dir,
    };

    let inverse = section_box.transform().inverse();
    let local_move = match mode {
        HorizontalMode::SnapToGrid => {
            let face = best_face_for(section_box, world_dir)?;
            // a face resting on a grid line must not snap past it
            if index.grid_at(face.center, search_dir, tolerance).is_some() {
                return Err(Error::AlreadyAtReference {
                    kind: ReferenceKind::Grid,
                });
            }
            let hit = index
                .grid_along(face.center, search_dir, tolerance)
                .ok_or(Error::NoCandidateInDirection {
                    kind: ReferenceKind::Grid,
                    direction: SearchDirection::Cardinal(face_direction),
                })?;
            debug!(
                grid = %hit.grid.name,
                distance = hit.distance,
                "snapping face to grid line"
            );
            inverse.apply_to_vector(hit.point - face.center)
        }
        HorizontalMode::Nudge(amount) => inverse.apply_to_vector(search_dir * amount),
    };

    let mut deltas = BoxDeltas::default();
    match (axis, side) {
        (Axis::X, FaceSide::Max) => deltas.max_x = local_move.x,
        (Axis::X, FaceSide::Min) => deltas.min_x = local_move.x,
        (Axis::Y, FaceSide::Max) => deltas.max_y = local_move.y,
        (Axis::Y, FaceSide::Min) => deltas.min_y = local_move.y,
        // the resolver only ever yields X or Y for a cardinal direction
        (Axis::Z, _) => return Err(Error::AmbiguousDirection),
    }
    Ok(deltas)
}

/// Uniform expand (positive) or shrink (negative) deltas
pub fn expand_uniform(amount: f64) -> BoxDeltas {
    BoxDeltas::uniform(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::adjust;
    use approx::assert_relative_eq;
    use boxnav_core::{Grid, Level, Point3, Transform, Vector3};
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-5;

    fn index() -> ReferenceIndex {
        ReferenceIndex::new(
            vec![
                Level::new("L1", 0.0),
                Level::new("L2", 3000.0),
                Level::new("L3", 6000.0),
            ],
            vec![
                Grid::new(
                    "A",
                    Point3::new(800.0, -1000.0, 0.0),
                    Point3::new(800.0, 1000.0, 0.0),
                ),
                Grid::new(
                    "B",
                    Point3::new(-300.0, -1000.0, 0.0),
                    Point3::new(-300.0, 1000.0, 0.0),
                ),
            ],
        )
    }

    fn boxed(min_z: f64, max_z: f64) -> SectionBox {
        SectionBox::new(
            Point3::new(-100.0, -100.0, min_z),
            Point3::new(100.0, 100.0, max_z),
            Transform::identity(),
        )
        .unwrap()
    }

    #[test]
    fn top_up_snaps_to_the_next_level() {
        let deltas = vertical_move(
            &boxed(0.0, 1000.0),
            &index(),
            VerticalTarget::Top,
            Vertical::Up,
            VerticalMode::SnapToLevel,
            TOL,
        )
        .unwrap();
        assert_relative_eq!(deltas.max_z, 2000.0);
        assert_relative_eq!(deltas.min_z, 0.0);
    }

    #[test]
    fn bottom_up_past_top_is_rejected() {
        // top = 1000, bottom = 500; the next level up from the bottom is
        // L2 at 3000, which would land the bottom above the top
        let err = vertical_move(
            &boxed(500.0, 1000.0),
            &index(),
            VerticalTarget::Bottom,
            Vertical::Up,
            VerticalMode::SnapToLevel,
            TOL,
        );
        assert_eq!(err, Err(Error::WouldInvertBox));
    }

    #[test]
    fn both_requires_levels_on_both_planes() {
        // bottom is at L1 already; below it there is nothing
        let err = vertical_move(
            &boxed(0.0, 3000.0),
            &index(),
            VerticalTarget::Both,
            Vertical::Down,
            VerticalMode::SnapToLevel,
            TOL,
        );
        assert!(matches!(
            err,
            Err(Error::NoCandidateInDirection {
                kind: ReferenceKind::Level,
                ..
            })
        ));
    }

    #[test]
    fn both_moves_planes_to_their_own_levels() {
        let b = boxed(100.0, 3100.0);
        let deltas = vertical_move(
            &b,
            &index(),
            VerticalTarget::Both,
            Vertical::Up,
            VerticalMode::SnapToLevel,
            TOL,
        )
        .unwrap();
        // top 3100 -> 6000, bottom 100 -> 3000
        assert_relative_eq!(deltas.max_z, 2900.0);
        assert_relative_eq!(deltas.min_z, 2900.0);
        let moved = adjust(&b, &deltas).unwrap();
        assert_relative_eq!(moved.top_z(), 6000.0);
        assert_relative_eq!(moved.bottom_z(), 3000.0);
    }

    #[test]
    fn explicit_elevation_keeps_height_for_both() {
        let b = boxed(500.0, 1500.0);
        let deltas = vertical_move(
            &b,
            &index(),
            VerticalTarget::Both,
            Vertical::Up,
            VerticalMode::ToElevation(6000.0),
            TOL,
        )
        .unwrap();
        let moved = adjust(&b, &deltas).unwrap();
        assert_relative_eq!(moved.top_z(), 6000.0);
        assert_relative_eq!(moved.height(), 1000.0);
    }

    #[test]
    fn explicit_elevation_below_bottom_is_rejected() {
        let err = vertical_move(
            &boxed(500.0, 1500.0),
            &index(),
            VerticalTarget::Top,
            Vertical::Down,
            VerticalMode::ToElevation(400.0),
            TOL,
        );
        assert_eq!(err, Err(Error::WouldInvertBox));
    }

    #[test]
    fn nudge_signs_follow_the_direction() {
        let deltas = vertical_move(
            &boxed(0.0, 1000.0),
            &index(),
            VerticalTarget::Both,
            Vertical::Down,
            VerticalMode::Nudge(250.0),
            TOL,
        )
        .unwrap();
        assert_relative_eq!(deltas.min_z, -250.0);
        assert_relative_eq!(deltas.max_z, -250.0);
    }

    #[test]
    fn east_out_snaps_the_east_face_to_the_next_grid() {
        // east face center sits at x = 100; grid "A" at x = 800 is the
        // first crossing heading out
        let b = boxed(0.0, 1000.0);
        let deltas = horizontal_move(
            &b,
            &index(),
            CardinalDirection::East,
            Orientation::Out,
            HorizontalMode::SnapToGrid,
            TOL,
        )
        .unwrap();
        assert_relative_eq!(deltas.max_x, 700.0);
        assert_relative_eq!(deltas.min_x, 0.0);
        assert_relative_eq!(deltas.max_y, 0.0);
    }

    #[test]
    fn east_in_snaps_inward_to_a_grid_behind_the_face() {
        // heading inward (west) from x = 100, grid "B" at x = -300 comes first
        let deltas = horizontal_move(
            &boxed(0.0, 1000.0),
            &index(),
            CardinalDirection::East,
            Orientation::In,
            HorizontalMode::SnapToGrid,
            TOL,
        )
        .unwrap();
        assert_relative_eq!(deltas.max_x, -400.0);
    }

    #[test]
    fn west_nudge_moves_only_the_west_face() {
        let deltas = horizontal_move(
            &boxed(0.0, 1000.0),
            &index(),
            CardinalDirection::West,
            Orientation::Out,
            HorizontalMode::Nudge(50.0),
            TOL,
        )
        .unwrap();
        assert_relative_eq!(deltas.min_x, -50.0);
        assert_relative_eq!(deltas.max_x, 0.0);
    }

    #[test]
    fn rotated_box_maps_world_travel_to_local_bounds() {
        // quarter turn: the face best aligned with world east is local Y min
        let b = SectionBox::new(
            Point3::new(-100.0, -100.0, 0.0),
            Point3::new(100.0, 100.0, 1000.0),
            Transform::rotation_z(FRAC_PI_2),
        )
        .unwrap();
        let deltas = horizontal_move(
            &b,
            &index(),
            CardinalDirection::East,
            Orientation::Out,
            HorizontalMode::SnapToGrid,
            TOL,
        )
        .unwrap();
        // face center at world x = 100, grid "A" at 800: 700 of travel,
        // pointing along local -Y
        assert_relative_eq!(deltas.min_y, -700.0, epsilon = 1e-9);
        assert_relative_eq!(deltas.max_y, 0.0);
        assert_relative_eq!(deltas.max_x, 0.0);
    }

    #[test]
    fn face_already_on_a_grid_does_not_snap_past_it() {
        // east face at x = 100 rests exactly on "here"; "far" must not win
        let grids = ReferenceIndex::new(
            Vec::new(),
            vec![
                Grid::new(
                    "here",
                    Point3::new(100.0, -1000.0, 0.0),
                    Point3::new(100.0, 1000.0, 0.0),
                ),
                Grid::new(
                    "far",
                    Point3::new(800.0, -1000.0, 0.0),
                    Point3::new(800.0, 1000.0, 0.0),
                ),
            ],
        );
        let err = horizontal_move(
            &boxed(0.0, 1000.0),
            &grids,
            CardinalDirection::East,
            Orientation::Out,
            HorizontalMode::SnapToGrid,
            TOL,
        );
        assert_eq!(
            err,
            Err(Error::AlreadyAtReference {
                kind: ReferenceKind::Grid
            })
        );
    }

    #[test]
    fn edge_on_box_cannot_resolve_a_horizontal_face() {
        // local X points along world Z; world north has no local horizontal
        // component to pick a face with
        let tilted = Transform::from_basis(
            Vector3::z(),
            Vector3::x(),
            Vector3::y(),
            Point3::origin(),
        )
        .unwrap();
        let b = SectionBox::new(
            Point3::new(-100.0, -100.0, 0.0),
            Point3::new(100.0, 100.0, 1000.0),
            tilted,
        )
        .unwrap();
        let err = horizontal_move(
            &b,
            &index(),
            CardinalDirection::North,
            Orientation::Out,
            HorizontalMode::SnapToGrid,
            TOL,
        );
        assert_eq!(err, Err(Error::AmbiguousDirection));
    }

    #[test]
    fn no_grid_in_direction_is_rejected() {
        let empty = ReferenceIndex::default();
        let err = horizontal_move(
            &boxed(0.0, 1000.0),
            &empty,
            CardinalDirection::North,
            Orientation::Out,
            HorizontalMode::SnapToGrid,
            TOL,
        );
        assert!(matches!(
            err,
            Err(Error::NoCandidateInDirection {
                kind: ReferenceKind::Grid,
                ..
            })
        ));
    }
}
