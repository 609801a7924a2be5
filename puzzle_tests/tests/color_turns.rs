//! Property tests for the color-permutation core.

use puzzle_core::cube::{palette, FaceSlot, RubiksCube};
use puzzle_core::grid::{Axis, GridPos, Layout, SnapAngle};
use puzzle_tests::{color_multiset, color_snapshot, layer};

fn solved() -> RubiksCube {
    RubiksCube::new(Layout::new(3))
}

/// Four successive 90° turns of the same layer restore the cube exactly.
#[test]
fn four_quarter_turns_are_identity() {
    for axis in Axis::ALL {
        for coord in 0..3 {
            let mut cube = solved();
            let before = color_snapshot(&cube);
            for _ in 0..4 {
                cube.rotate_colors(layer(axis, coord), axis, SnapAngle::Deg90);
            }
            assert_eq!(color_snapshot(&cube), before, "{axis:?} layer {coord}");
        }
    }
}

/// 180° is two composed 90° permutations; 270° is three.
#[test]
fn composed_turns_match_quarter_turns() {
    for axis in Axis::ALL {
        for coord in 0..3 {
            for (snap, quarters) in [(SnapAngle::Deg180, 2), (SnapAngle::Deg270, 3)] {
                let mut direct = solved();
                direct.rotate_colors(layer(axis, coord), axis, snap);

                let mut composed = solved();
                for _ in 0..quarters {
                    composed.rotate_colors(layer(axis, coord), axis, SnapAngle::Deg90);
                }
                assert_eq!(
                    color_snapshot(&direct),
                    color_snapshot(&composed),
                    "{axis:?} layer {coord} {snap:?}"
                );
            }
        }
    }
}

/// Every turn only moves colors, never creates or destroys them.
#[test]
fn turns_preserve_the_color_multiset() {
    for axis in Axis::ALL {
        for coord in 0..3 {
            for snap in [SnapAngle::Deg90, SnapAngle::Deg180, SnapAngle::Deg270] {
                let mut cube = solved();
                // Start from a non-trivial position so the property is not
                // vacuous on repeated colors of the solved shell.
                cube.rotate_colors(layer(Axis::X, 0), Axis::X, SnapAngle::Deg90);
                cube.rotate_colors(layer(Axis::Y, 2), Axis::Y, SnapAngle::Deg90);
                let before = color_multiset(&cube);
                cube.rotate_colors(layer(axis, coord), axis, snap);
                assert_eq!(color_multiset(&cube), before);
            }
        }
    }
}

/// A quarter turn moves a visible sticker where the physical turn takes it.
#[test]
fn quarter_turn_moves_the_top_cap() {
    let mut cube = solved();
    // Turn the y = 2 (top) layer a quarter about Y: the green Z- row moves
    // to the X- side of the layer and the blue Z+ row to the X+ side.
    cube.rotate_colors(GridPos::new(0, 2, 0), Axis::Y, SnapAngle::Deg90);
    for z in 0..3 {
        assert_eq!(
            cube.face_color(GridPos::new(0, 2, z), FaceSlot::XMinus),
            palette::GREEN
        );
        assert_eq!(
            cube.face_color(GridPos::new(2, 2, z), FaceSlot::XPlus),
            palette::BLUE
        );
    }
    // The cap sticker on top stays yellow: the Y+ face of the turning layer
    // only trades with other Y+ stickers.
    for x in 0..3 {
        for z in 0..3 {
            assert_eq!(
                cube.face_color(GridPos::new(x, 2, z), FaceSlot::YPlus),
                palette::YELLOW
            );
        }
    }
}

/// The fully interior sub-cube touches no shell and stays hidden forever.
#[test]
fn center_cube_stays_hidden_through_turns() {
    let mut cube = solved();
    for axis in Axis::ALL {
        cube.rotate_colors(layer(axis, 1), axis, SnapAngle::Deg90);
    }
    for slot in FaceSlot::ALL {
        assert_eq!(cube.face_color(GridPos::new(1, 1, 1), slot), palette::HIDDEN);
    }
}

/// Interior stickers never leak onto the shell: after any turn every shell
/// face still shows only real colors.
#[test]
fn shell_faces_never_go_hidden() {
    for axis in Axis::ALL {
        for coord in 0..3 {
            let mut cube = solved();
            cube.rotate_colors(layer(axis, coord), axis, SnapAngle::Deg90);
            for sub in cube.cubes() {
                let GridPos { x, y, z } = sub.grid;
                let shell_slots = [
                    (z == 0, FaceSlot::ZMinus),
                    (x == 2, FaceSlot::XPlus),
                    (z == 2, FaceSlot::ZPlus),
                    (x == 0, FaceSlot::XMinus),
                    (y == 2, FaceSlot::YPlus),
                    (y == 0, FaceSlot::YMinus),
                ];
                for (on_shell, slot) in shell_slots {
                    if on_shell {
                        assert_ne!(
                            sub.face_color(slot),
                            palette::HIDDEN,
                            "{axis:?} layer {coord}: hidden sticker surfaced at {:?} {slot:?}",
                            sub.grid
                        );
                    } else {
                        assert_eq!(
                            sub.face_color(slot),
                            palette::HIDDEN,
                            "{axis:?} layer {coord}: shell color buried at {:?} {slot:?}",
                            sub.grid
                        );
                    }
                }
            }
        }
    }
}
