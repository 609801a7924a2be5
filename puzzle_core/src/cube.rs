//! Rubik's cube state.
//!
//! Owns the n³ sub-cubes and the two mutating operations on them:
//! - continuous per-layer rotation (visual only, transform updates), and
//! - discrete color permutation after a turn snaps to a multiple of 90°.
//!
//! Sub-cube face order is load-bearing: Z−, X+, Z+, X−, Y+, Y−. The color
//! permutation tables and the shell-color assignment index by it.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::grid::{Axis, GridPos, Layout, SnapAngle};
use crate::math::{Mat3, Vec3};
use crate::mesh::{Quad, QuadMesh};

/// Slot of one face within a sub-cube, in the fixed initialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceSlot {
    ZMinus = 0,
    XPlus = 1,
    ZPlus = 2,
    XMinus = 3,
    YPlus = 4,
    YMinus = 5,
}

impl FaceSlot {
    pub const ALL: [FaceSlot; 6] = [
        FaceSlot::ZMinus,
        FaceSlot::XPlus,
        FaceSlot::ZPlus,
        FaceSlot::XMinus,
        FaceSlot::YPlus,
        FaceSlot::YMinus,
    ];
}

/// Packed 0xRRGGBB colors used by the puzzle and its renderer.
pub mod palette {
    /// Interior faces that never reach the shell.
    pub const HIDDEN: u32 = 0x222222;
    pub const WHITE: u32 = 0xDDDDDD;
    pub const RED: u32 = 0xDD3333;
    pub const GREEN: u32 = 0x33DD33;
    pub const BLUE: u32 = 0x3333DD;
    pub const YELLOW: u32 = 0xDDDD33;
    pub const ORANGE: u32 = 0xDD9933;
    /// Window background, for the renderer's use.
    pub const BACKGROUND: u32 = 0xBBBBBB;
}

/// Gain applied to pointer deltas when free-rotating the view.
pub const VIEW_ROTATION_GAIN: f64 = PI / 360.0;

/// One rigid sub-cube: a unit-cube quad mesh plus its grid coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCube {
    pub mesh: QuadMesh,
    pub grid: GridPos,
}

impl SubCube {
    fn new(grid: GridPos, layout: &Layout) -> Self {
        let mut mesh = QuadMesh {
            scale: layout.scale,
            translation: layout.rest_position(grid),
            ..Default::default()
        };
        mesh.add_vertex(Vec3::new(-1.0, 1.0, -1.0));
        mesh.add_vertex(Vec3::new(-1.0, -1.0, -1.0));
        mesh.add_vertex(Vec3::new(1.0, -1.0, -1.0));
        mesh.add_vertex(Vec3::new(1.0, 1.0, -1.0));
        mesh.add_vertex(Vec3::new(-1.0, 1.0, 1.0));
        mesh.add_vertex(Vec3::new(-1.0, -1.0, 1.0));
        mesh.add_vertex(Vec3::new(1.0, -1.0, 1.0));
        mesh.add_vertex(Vec3::new(1.0, 1.0, 1.0));
        mesh.add_face(Quad::new([0, 1, 2, 3])); // Z-
        mesh.add_face(Quad::new([2, 6, 7, 3])); // X+
        mesh.add_face(Quad::new([7, 6, 5, 4])); // Z+
        mesh.add_face(Quad::new([4, 5, 1, 0])); // X-
        mesh.add_face(Quad::new([0, 3, 7, 4])); // Y+
        mesh.add_face(Quad::new([1, 5, 6, 2])); // Y-
        Self { mesh, grid }
    }

    pub fn face_color(&self, slot: FaceSlot) -> u32 {
        self.mesh.faces[slot as usize].color
    }

    fn set_colors(&mut self, colors: [u32; 6]) {
        for (face, color) in self.mesh.faces.iter_mut().zip(colors) {
            face.color = color;
        }
    }
}

/// One sticker, addressed as (flat sub-cube index, face slot).
type StickerRef = (usize, FaceSlot);

/// The whole puzzle: n³ sub-cubes plus the view transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubiksCube {
    layout: Layout,
    cubes: Vec<SubCube>,
    pub global_rotation: Mat3,
    pub global_translation: Vec3,
}

impl RubiksCube {
    pub fn new(layout: Layout) -> Self {
        let n = layout.cube_count;
        let cubes = (0..n * n * n)
            .map(|i| SubCube::new(GridPos::from_index(i, n), &layout))
            .collect();
        let h = layout.half_extent;
        let mut cube = Self {
            layout,
            cubes,
            global_rotation: Mat3::IDENTITY,
            global_translation: Vec3::new(2.0 * h, 2.0 * h, 2.0 * h),
        };
        cube.reset_colors();
        cube.reset_view();
        cube
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn cubes(&self) -> &[SubCube] {
        &self.cubes
    }

    pub fn face_color(&self, pos: GridPos, slot: FaceSlot) -> u32 {
        self.cubes[pos.index(self.layout.cube_count)].face_color(slot)
    }

    /// Shell faces get the canonical six-color palette; everything interior
    /// is painted the hidden color.
    pub fn reset_colors(&mut self) {
        let last = self.layout.cube_count - 1;
        for cube in &mut self.cubes {
            let pos = cube.grid;
            let mut colors = [
                palette::GREEN,  // Z-
                palette::RED,    // X+
                palette::BLUE,   // Z+
                palette::ORANGE, // X-
                palette::YELLOW, // Y+
                palette::WHITE,  // Y-
            ];
            if pos.z != 0 {
                colors[FaceSlot::ZMinus as usize] = palette::HIDDEN;
            }
            if pos.x != last {
                colors[FaceSlot::XPlus as usize] = palette::HIDDEN;
            }
            if pos.z != last {
                colors[FaceSlot::ZPlus as usize] = palette::HIDDEN;
            }
            if pos.x != 0 {
                colors[FaceSlot::XMinus as usize] = palette::HIDDEN;
            }
            if pos.y != last {
                colors[FaceSlot::YPlus as usize] = palette::HIDDEN;
            }
            if pos.y != 0 {
                colors[FaceSlot::YMinus as usize] = palette::HIDDEN;
            }
            cube.set_colors(colors);
        }
    }

    /// Default viewing angle: slightly from above and off-axis.
    pub fn reset_view(&mut self) {
        self.global_rotation = Mat3::rotation_x(PI / 6.0) * Mat3::rotation_y(PI / 4.0);
    }

    /// Puts every sub-cube back on its rest transform. Called after a turn
    /// commits (the permuted colors encode the new state) and by resets.
    pub fn reset_face_transforms(&mut self) {
        for cube in &mut self.cubes {
            cube.mesh.rotation = Mat3::IDENTITY;
            cube.mesh.translation = self.layout.rest_position(cube.grid);
        }
    }

    /// Free-look: composes incremental world-X/world-Y rotations onto the
    /// view from a pointer delta.
    pub fn global_rotate(&mut self, delta: Vec3) {
        let delta = delta * VIEW_ROTATION_GAIN;
        self.global_rotation = Mat3::rotation_x(delta.y) * self.global_rotation;
        self.global_rotation = Mat3::rotation_y(-delta.x) * self.global_rotation;
    }

    /// Visually spins the layer of `layer` perpendicular to `axis` by
    /// `theta` radians. Transform-only; colors are untouched.
    pub fn rotate_face(&mut self, layer: GridPos, axis: Axis, theta: f64) {
        let n = self.layout.cube_count;
        let layer_offset_units = layer.coord(axis) as f64 - self.layout.center();
        let rotation = match axis {
            Axis::X => Mat3::rotation_x(theta),
            Axis::Y => Mat3::rotation_y(theta),
            Axis::Z => Mat3::rotation_z(theta),
        };
        for i in 0..n {
            for j in 0..n {
                let pos = match axis {
                    Axis::X => GridPos::new(layer.x, i, j),
                    Axis::Y => GridPos::new(i, layer.y, j),
                    Axis::Z => GridPos::new(i, j, layer.z),
                };
                // Split the rest offset into the in-layer part (which spins
                // about the layer center) and the along-axis part.
                let mut in_layer = self.layout.rest_position(pos) / self.layout.spacing;
                in_layer[axis] = 0.0;
                let mut along = Vec3::ZERO;
                along[axis] = layer_offset_units;

                let cube = &mut self.cubes[pos.index(n)];
                cube.mesh.rotation = rotation;
                cube.mesh.translation = (rotation * in_layer + along) * self.layout.spacing;
            }
        }
    }

    /// Permutes the layer's sticker colors for a committed 90/180/270° turn.
    ///
    /// Each swap group is a 4-cycle: the n cap rings around the turn axis
    /// plus, for each of the n−1 perimeter positions, the two lateral faces
    /// parallel to the axis. 180° and 270° are the 90° cycle applied twice
    /// and three times.
    pub fn rotate_colors(&mut self, layer: GridPos, axis: Axis, snap: SnapAngle) {
        let shift = snap.quarter_turns();
        if shift == 0 {
            return;
        }
        for group in self.swap_groups(layer, axis) {
            let colors = group.map(|(cube, slot)| self.cubes[cube].face_color(slot));
            for (j, &(cube, slot)) in group.iter().enumerate() {
                self.cubes[cube].mesh.faces[slot as usize].color = colors[(j + shift) % 4];
            }
        }
    }

    fn swap_groups(&self, layer: GridPos, axis: Axis) -> Vec<[StickerRef; 4]> {
        let n = self.layout.cube_count;
        let n2 = n * n;
        let last = n - 1;
        let mut groups = Vec::with_capacity(3 * n - 2);
        match axis {
            Axis::X => {
                let x = layer.x;
                let ring = |i: usize| {
                    [
                        x + i * n2,
                        x + i * n + last * n2,
                        x + last * n + (last - i) * n2,
                        x + (last - i) * n,
                    ]
                };
                for i in 0..n {
                    let [a, b, c, d] = ring(i);
                    groups.push([
                        (a, FaceSlot::YMinus),
                        (b, FaceSlot::ZPlus),
                        (c, FaceSlot::YPlus),
                        (d, FaceSlot::ZMinus),
                    ]);
                }
                for i in 0..last {
                    groups.push(ring(i).map(|c| (c, FaceSlot::XPlus)));
                    groups.push(ring(i).map(|c| (c, FaceSlot::XMinus)));
                }
            }
            Axis::Y => {
                let y = layer.y;
                let ring = |i: usize| {
                    [
                        i + y * n,
                        last + y * n + i * n2,
                        last - i + y * n + last * n2,
                        y * n + (last - i) * n2,
                    ]
                };
                for i in 0..n {
                    let [a, b, c, d] = ring(i);
                    groups.push([
                        (a, FaceSlot::ZMinus),
                        (b, FaceSlot::XPlus),
                        (c, FaceSlot::ZPlus),
                        (d, FaceSlot::XMinus),
                    ]);
                }
                for i in 0..last {
                    groups.push(ring(i).map(|c| (c, FaceSlot::YPlus)));
                    groups.push(ring(i).map(|c| (c, FaceSlot::YMinus)));
                }
            }
            Axis::Z => {
                let z = layer.z;
                let ring = |i: usize| {
                    [
                        (last - i) * n + z * n2,
                        last - i + last * n + z * n2,
                        last + i * n + z * n2,
                        i + z * n2,
                    ]
                };
                for i in 0..n {
                    let [a, b, c, d] = ring(i);
                    groups.push([
                        (a, FaceSlot::XMinus),
                        (b, FaceSlot::YPlus),
                        (c, FaceSlot::XPlus),
                        (d, FaceSlot::YMinus),
                    ]);
                }
                for i in 0..last {
                    groups.push(ring(i).map(|c| (c, FaceSlot::ZMinus)));
                    groups.push(ring(i).map(|c| (c, FaceSlot::ZPlus)));
                }
            }
        }
        groups
    }

    /// Projects every sub-cube into the shared output lists and depth-sorts
    /// the visible faces back-to-front.
    pub fn project(&self, out_vertices: &mut Vec<Vec3>, out_faces: &mut Vec<Quad>) {
        for cube in &self.cubes {
            cube.mesh.project(
                &self.global_rotation,
                self.global_translation,
                out_vertices,
                out_faces,
            );
        }
        crate::mesh::z_sort(out_faces);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> RubiksCube {
        RubiksCube::new(Layout::new(3))
    }

    #[test]
    fn center_cube_is_fully_hidden() {
        let cube = cube();
        for slot in FaceSlot::ALL {
            assert_eq!(cube.face_color(GridPos::new(1, 1, 1), slot), palette::HIDDEN);
        }
    }

    #[test]
    fn corner_cube_shows_three_colors() {
        let cube = cube();
        let corner = GridPos::new(2, 2, 2);
        assert_eq!(cube.face_color(corner, FaceSlot::XPlus), palette::RED);
        assert_eq!(cube.face_color(corner, FaceSlot::YPlus), palette::YELLOW);
        assert_eq!(cube.face_color(corner, FaceSlot::ZPlus), palette::BLUE);
        assert_eq!(cube.face_color(corner, FaceSlot::ZMinus), palette::HIDDEN);
    }

    #[test]
    fn zero_rotation_keeps_rest_transforms() {
        let mut cube = cube();
        cube.rotate_face(GridPos::new(0, 0, 0), Axis::Y, 0.0);
        for sub in cube.cubes() {
            let rest = cube.layout().rest_position(sub.grid);
            assert!((sub.mesh.translation - rest).length() < 1e-9);
        }
    }

    #[test]
    fn half_turn_moves_edge_to_opposite_edge() {
        let mut cube = cube();
        cube.rotate_face(GridPos::new(0, 1, 0), Axis::Y, PI);
        // The (0,1,0) sub-cube ends up where (2,1,2) rests.
        let moved = &cube.cubes()[GridPos::new(0, 1, 0).index(3)];
        let target = cube.layout().rest_position(GridPos::new(2, 1, 2));
        assert!((moved.mesh.translation - target).length() < 1e-9);
    }

    #[test]
    fn swap_group_count_matches_layer() {
        let cube = cube();
        // n cap rings + 2(n-1) lateral rings.
        for axis in Axis::ALL {
            let groups = cube.swap_groups(GridPos::new(0, 0, 0), axis);
            assert_eq!(groups.len(), 7);
        }
    }

    #[test]
    fn swap_groups_stay_inside_the_layer() {
        let cube = cube();
        for axis in Axis::ALL {
            for layer_idx in 0..3 {
                let layer = match axis {
                    Axis::X => GridPos::new(layer_idx, 0, 0),
                    Axis::Y => GridPos::new(0, layer_idx, 0),
                    Axis::Z => GridPos::new(0, 0, layer_idx),
                };
                for group in cube.swap_groups(layer, axis) {
                    for (idx, _) in group {
                        let pos = GridPos::from_index(idx, 3);
                        assert_eq!(pos.coord(axis), layer_idx);
                    }
                }
            }
        }
    }
}
