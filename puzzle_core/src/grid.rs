//! Grid addressing and puzzle metrics.
//!
//! All conversions between flat sub-cube indices, `(x, y, z)` grid
//! coordinates and centered world positions live here, so the raw index
//! arithmetic exists in exactly one place.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// A world axis. Also identifies the pair of shell faces perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The two axes orthogonal to this one, in (first, second) order.
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

impl Index<Axis> for Vec3 {
    type Output = f64;
    fn index(&self, axis: Axis) -> &f64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Vec3 {
    fn index_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// Snap target for a committed layer turn, in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapAngle {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl SnapAngle {
    /// Number of 90° steps this snap represents.
    pub fn quarter_turns(self) -> usize {
        match self {
            SnapAngle::Deg0 => 0,
            SnapAngle::Deg90 => 1,
            SnapAngle::Deg180 => 2,
            SnapAngle::Deg270 => 3,
        }
    }

    pub fn degrees(self) -> f64 {
        self.quarter_turns() as f64 * 90.0
    }

    /// Nearest snap for an angle already normalized into `[0, 360)`.
    /// Boundaries are at 45/135/225/315 degrees; both ends map to `Deg0`.
    pub fn nearest(degrees: f64) -> Self {
        if degrees > 45.0 && degrees <= 135.0 {
            SnapAngle::Deg90
        } else if degrees > 135.0 && degrees <= 225.0 {
            SnapAngle::Deg180
        } else if degrees > 225.0 && degrees <= 315.0 {
            SnapAngle::Deg270
        } else {
            SnapAngle::Deg0
        }
    }
}

/// Grid coordinate of a sub-cube, `x, y, z ∈ [0, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridPos {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Flat row-major index `x + y·n + z·n²`.
    pub fn index(self, n: usize) -> usize {
        self.x + self.y * n + self.z * n * n
    }

    pub fn from_index(index: usize, n: usize) -> Self {
        Self {
            x: index % n,
            y: (index / n) % n,
            z: index / (n * n),
        }
    }

    pub fn coord(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Derived metrics for an n×n×n puzzle.
///
/// `spacing` is the center-to-center distance between neighboring sub-cubes,
/// `scale` the half-width of one rendered sub-cube and `half_extent` half the
/// width of the whole puzzle. The 180-unit overall size matches the
/// reference window layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub cube_count: usize,
    pub spacing: f64,
    pub scale: f64,
    pub half_extent: f64,
}

impl Layout {
    pub fn new(cube_count: usize) -> Self {
        assert!(cube_count >= 2, "puzzle needs at least 2 cubes per edge");
        let spacing = 180.0 / cube_count as f64;
        Self {
            cube_count,
            spacing,
            scale: spacing * 0.45,
            half_extent: spacing * cube_count as f64 / 2.0,
        }
    }

    /// Offset of the grid center from the zero coordinate, in grid units.
    pub fn center(&self) -> f64 {
        (self.cube_count - 1) as f64 / 2.0
    }

    /// Rest position of a sub-cube, in world units.
    pub fn rest_position(&self, pos: GridPos) -> Vec3 {
        let c = self.center();
        Vec3::new(
            pos.x as f64 - c,
            pos.y as f64 - c,
            pos.z as f64 - c,
        ) * self.spacing
    }

    /// Buckets a shell-surface coordinate in `(-half_extent, half_extent)`
    /// into a grid cell. An out-of-range result is a logic defect upstream,
    /// not a recoverable condition.
    pub fn cell(&self, coord: f64) -> usize {
        let cell = ((coord + self.half_extent) / self.spacing).floor();
        assert!(
            cell >= 0.0 && cell < self.cube_count as f64,
            "surface coordinate {coord} maps outside the grid"
        );
        cell as usize
    }

    /// Grid coordinate of the shell cell on the positive or negative side of
    /// an axis, from the plane sign.
    pub fn shell_cell(&self, side: f64) -> usize {
        if side > 0.0 {
            self.cube_count - 1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        let n = 3;
        for i in 0..n * n * n {
            assert_eq!(GridPos::from_index(i, n).index(n), i);
        }
        assert_eq!(GridPos::new(2, 1, 0).index(n), 5);
    }

    #[test]
    fn rest_position_is_centered() {
        let layout = Layout::new(3);
        assert_eq!(layout.rest_position(GridPos::new(1, 1, 1)), Vec3::ZERO);
        let corner = layout.rest_position(GridPos::new(0, 0, 0));
        assert_eq!(corner, Vec3::new(-60.0, -60.0, -60.0));
    }

    #[test]
    fn cell_buckets_surface_coordinates() {
        let layout = Layout::new(3);
        assert_eq!(layout.cell(-89.9), 0);
        assert_eq!(layout.cell(0.0), 1);
        assert_eq!(layout.cell(89.9), 2);
    }

    #[test]
    fn nearest_snap_boundaries() {
        assert_eq!(SnapAngle::nearest(45.0), SnapAngle::Deg0);
        assert_eq!(SnapAngle::nearest(45.1), SnapAngle::Deg90);
        assert_eq!(SnapAngle::nearest(135.0), SnapAngle::Deg90);
        assert_eq!(SnapAngle::nearest(225.0), SnapAngle::Deg180);
        assert_eq!(SnapAngle::nearest(315.0), SnapAngle::Deg270);
        assert_eq!(SnapAngle::nearest(315.1), SnapAngle::Deg0);
    }
}
