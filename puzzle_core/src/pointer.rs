//! Pointer interaction state machine.
//!
//! Raw pointer samples (position plus pressed/released edges) drive four
//! states: idle, free view rotation, waiting for a drag direction on a
//! clicked shell face, and live-dragging a layer. Releasing a drag snaps the
//! accumulated angle to the nearest quarter turn and hands the ease-out to
//! the animator.
//!
//! Ray casting stays axis-aligned: every shell face is parallel to a world
//! axis in puzzle-local space, so un-projecting the pointer through the
//! transposed view rotation reduces intersection tests to one division per
//! axis.

use std::f64::consts::PI;

use tracing::debug;

use crate::anim::{Animator, QueuedTurn};
use crate::cube::RubiksCube;
use crate::grid::{Axis, GridPos, SnapAngle};
use crate::math::{sign, Vec3};

/// Minimum in-plane displacement before a drag picks its rotation axis.
pub const DRAG_THRESHOLD: f64 = 12.0;
/// Gain from the drag cross product to the layer angle, before the division
/// by the puzzle half-extent.
const DRAG_ROTATION_GAIN: f64 = PI / 360.0;
/// Pointer jitter below this length does not rotate the view.
const VIEW_NOISE_FLOOR: f64 = 1.0;
/// Steps a released drag takes to ease onto its snap angle.
const SNAP_STEPS: f64 = 5.0;
/// Ray direction components below this are treated as parallel to the face.
const RAY_EPSILON: f64 = 1e-9;

/// A pointer ray in puzzle-local space.
struct Ray {
    origin: Vec3,
    dir: Vec3,
}

impl Ray {
    /// Un-projects a screen-space pointer position through the inverse
    /// (transposed) view rotation.
    fn from_pointer(cube: &RubiksCube, pos: Vec3) -> Self {
        let inverse = cube.global_rotation.transpose();
        Self {
            origin: inverse * (pos - cube.global_translation),
            dir: inverse * Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// Intersection with the plane `axis = offset`, or `None` when the ray
    /// runs (near-)parallel to it.
    fn hit_plane(&self, axis: Axis, offset: f64) -> Option<Vec3> {
        let d = self.dir[axis];
        if d.abs() < RAY_EPSILON {
            return None;
        }
        let t = (offset - self.origin[axis]) / d;
        Some(self.origin + self.dir * t)
    }
}

/// The shell face a click landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHit {
    /// Grid coordinate of the clicked sub-cube.
    pub cube: GridPos,
    /// Axis perpendicular to the clicked face.
    pub axis: Axis,
    /// Exact intersection point in puzzle-local space.
    pub point: Vec3,
}

/// Pointer machine state. Each variant carries only the data valid in it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    /// Dragging outside the puzzle rotates the whole view.
    RotateView { last_pos: Vec3 },
    /// Clicked a face; waiting for the drag direction to resolve.
    SelectingAxis { hit: FaceHit },
    /// Live-dragging one layer.
    RotatingFace {
        hit: FaceHit,
        axis: Axis,
        pivot: Vec3,
        theta: f64,
    },
}

/// Interprets pointer samples against the cube and feeds the animator.
#[derive(Debug, Default)]
pub struct PointerHandler {
    pub state: PointerState,
}

impl PointerHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.state = PointerState::Idle;
    }

    /// Advances the machine by one pointer sample.
    ///
    /// `down`/`up` are the pressed/released edge flags for this event.
    /// Returns whether the caller should redraw.
    pub fn step(
        &mut self,
        pos: Vec3,
        down: bool,
        up: bool,
        cube: &mut RubiksCube,
        animator: &mut Animator,
    ) -> bool {
        if down && self.state == PointerState::Idle {
            self.state = Self::click(cube, pos);
            return true;
        }
        if up && self.state != PointerState::Idle {
            self.release(animator);
            return true;
        }

        match self.state {
            PointerState::Idle => false,
            PointerState::SelectingAxis { .. } | PointerState::RotatingFace { .. } => {
                self.drag(cube, pos);
                true
            }
            PointerState::RotateView { last_pos } => {
                let delta = pos - last_pos;
                if delta.length() < VIEW_NOISE_FLOOR {
                    return false;
                }
                cube.global_rotate(delta);
                self.state = PointerState::RotateView { last_pos: pos };
                true
            }
        }
    }

    /// Casts the click ray against the three pairs of outer face planes,
    /// X then Y then Z, first hit wins.
    fn click(cube: &RubiksCube, pos: Vec3) -> PointerState {
        let layout = *cube.layout();
        let h = layout.half_extent;
        let ray = Ray::from_pointer(cube, pos);

        for axis in Axis::ALL {
            if ray.origin[axis].abs() <= h {
                continue;
            }
            let side = sign(ray.origin[axis]);
            let Some(point) = ray.hit_plane(axis, side * h) else {
                // Degenerate ray for this axis pair; try the next one.
                continue;
            };
            let (u, v) = axis.others();
            if point[u].abs() >= h || point[v].abs() >= h {
                continue;
            }
            let mut hit_cube = GridPos::new(0, 0, 0);
            set_coord(&mut hit_cube, axis, layout.shell_cell(side));
            set_coord(&mut hit_cube, u, layout.cell(point[u]));
            set_coord(&mut hit_cube, v, layout.cell(point[v]));
            debug!(?axis, cube = ?hit_cube, "clicked shell face");
            return PointerState::SelectingAxis {
                hit: FaceHit {
                    cube: hit_cube,
                    axis,
                    point,
                },
            };
        }
        PointerState::RotateView { last_pos: pos }
    }

    /// Handles a move while a face is held: resolves the drag direction, then
    /// live-rotates the chosen layer.
    fn drag(&mut self, cube: &mut RubiksCube, pos: Vec3) {
        let (hit, h) = match self.state {
            PointerState::SelectingAxis { hit } | PointerState::RotatingFace { hit, .. } => {
                (hit, cube.layout().half_extent)
            }
            _ => return,
        };

        // Re-intersect on the clicked layer's outer plane.
        let side = sign(hit.cube.coord(hit.axis) as f64 - cube.layout().center());
        let ray = Ray::from_pointer(cube, pos);
        let Some(point) = ray.hit_plane(hit.axis, side * h) else {
            return;
        };

        match self.state {
            PointerState::RotatingFace { axis, pivot, .. } => {
                let cross = (hit.point - pivot).cross(point - pivot);
                let theta = cross[axis] * DRAG_ROTATION_GAIN / h;
                self.state = PointerState::RotatingFace {
                    hit,
                    axis,
                    pivot,
                    theta,
                };
                cube.rotate_face(hit.cube, axis, theta);
            }
            _ => {
                // Dragging along one in-plane direction turns the layer
                // about the other.
                let diff = (hit.point - point).abs();
                let (u, v) = hit.axis.others();
                let axis = if diff[u] > DRAG_THRESHOLD && diff[u] > diff[v] {
                    Some(v)
                } else if diff[v] > DRAG_THRESHOLD {
                    Some(u)
                } else {
                    None
                };
                if let Some(axis) = axis {
                    let mut pivot = Vec3::ZERO;
                    pivot[axis] = point[axis];
                    debug!(?axis, "drag direction resolved");
                    self.state = PointerState::RotatingFace {
                        hit,
                        axis,
                        pivot,
                        theta: 0.0,
                    };
                }
            }
        }
    }

    /// Finishes a drag: snaps to the nearest quarter turn and queues the
    /// ease-out animation, then goes Idle regardless of outcome.
    fn release(&mut self, animator: &mut Animator) {
        if let PointerState::RotatingFace {
            hit, axis, theta, ..
        } = self.state
        {
            let degrees = theta.to_degrees().rem_euclid(360.0);
            let snap = SnapAngle::nearest(degrees);

            let mut degree_start = degrees;
            let mut degree_end = snap.degrees();
            // Take the short way around the wrap boundary.
            if degree_end - degree_start > 180.0 {
                degree_start += 360.0;
            } else if degree_start - degree_end > 180.0 {
                degree_end += 360.0;
            }
            let speed = (degree_end - degree_start) / SNAP_STEPS;
            match QueuedTurn::new(hit.cube, axis, snap, degree_start, degree_end, speed) {
                Ok(turn) => animator.push(turn),
                // Already exactly at rest; nothing to animate.
                Err(_) => debug!(?axis, "released with no residual angle"),
            }
        }
        self.reset();
    }
}

fn set_coord(pos: &mut GridPos, axis: Axis, value: usize) {
    match axis {
        Axis::X => pos.x = value,
        Axis::Y => pos.y = value,
        Axis::Z => pos.z = value,
    }
}
