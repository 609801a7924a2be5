//! Shared helpers for the integration tests.

use puzzle_core::cube::{FaceSlot, RubiksCube};
use puzzle_core::grid::GridPos;

/// Collects every sticker color on the cube, sorted, for multiset
/// comparisons: permutations must move colors without creating or
/// destroying any.
pub fn color_multiset(cube: &RubiksCube) -> Vec<u32> {
    let mut colors: Vec<u32> = cube
        .cubes()
        .iter()
        .flat_map(|sub| FaceSlot::ALL.map(|slot| sub.face_color(slot)))
        .collect();
    colors.sort_unstable();
    colors
}

/// Snapshot of every sticker for exact state comparisons.
pub fn color_snapshot(cube: &RubiksCube) -> Vec<u32> {
    cube.cubes()
        .iter()
        .flat_map(|sub| FaceSlot::ALL.map(|slot| sub.face_color(slot)))
        .collect()
}

/// Representative layer coordinate for an axis/index pair.
pub fn layer(axis: puzzle_core::grid::Axis, coord: usize) -> GridPos {
    use puzzle_core::grid::Axis;
    match axis {
        Axis::X => GridPos::new(coord, 0, 0),
        Axis::Y => GridPos::new(0, coord, 0),
        Axis::Z => GridPos::new(0, 0, coord),
    }
}
