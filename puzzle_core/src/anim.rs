//! Face-turn animation state machine.
//!
//! The animator owns a FIFO of pending turns and advances the front one by a
//! fixed angular step per tick. When a turn reaches its snap target the color
//! permutation is committed, the layer is re-homed to rest transforms and the
//! next turn (if any) starts.

use std::collections::VecDeque;

use anyhow::bail;
use tracing::debug;

use crate::cube::RubiksCube;
use crate::grid::{Axis, GridPos, SnapAngle};

/// One pending face turn.
///
/// Angles are in degrees; `speed` is the signed per-step advance. A zero
/// speed would stall the animator forever, so construction rejects it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedTurn {
    pub layer: GridPos,
    pub axis: Axis,
    pub snap: SnapAngle,
    pub degree_start: f64,
    pub degree_end: f64,
    pub speed: f64,
}

impl QueuedTurn {
    pub fn new(
        layer: GridPos,
        axis: Axis,
        snap: SnapAngle,
        degree_start: f64,
        degree_end: f64,
        speed: f64,
    ) -> anyhow::Result<Self> {
        if speed == 0.0 {
            bail!("turn from {degree_start}° to {degree_end}° has zero speed");
        }
        Ok(Self {
            layer,
            axis,
            snap,
            degree_start,
            degree_end,
            speed,
        })
    }
}

/// Plays queued turns one tick at a time.
#[derive(Debug, Default)]
pub struct Animator {
    queue: VecDeque<QueuedTurn>,
    degree: f64,
    animating: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// The turn currently playing (or about to play), if any.
    pub fn front(&self) -> Option<&QueuedTurn> {
        self.queue.front()
    }

    pub fn push(&mut self, turn: QueuedTurn) {
        self.queue.push_back(turn);
    }

    /// Drops all pending turns and forces Idle. Callers are responsible for
    /// re-homing the cube's face transforms.
    pub fn clear(&mut self) {
        self.animating = false;
        self.queue.clear();
    }

    /// Advances the front turn by one step.
    ///
    /// Returns whether the caller should redraw; `false` only when the queue
    /// was already empty.
    pub fn step(&mut self, cube: &mut RubiksCube) -> bool {
        let Some(turn) = self.queue.front().copied() else {
            return false;
        };

        if !self.animating {
            self.degree = turn.degree_start;
            self.animating = true;
        }

        self.degree += turn.speed;

        // Construction rejects zero speeds, but a stalled entry must still
        // terminate if one sneaks in through the public fields.
        let reached_end = (turn.speed >= 0.0 && self.degree >= turn.degree_end)
            || (turn.speed <= 0.0 && self.degree <= turn.degree_end);
        if reached_end {
            if turn.snap != SnapAngle::Deg0 {
                cube.rotate_colors(turn.layer, turn.axis, turn.snap);
            }
            debug!(axis = ?turn.axis, snap = ?turn.snap, "turn committed");
            cube.reset_face_transforms();
            self.queue.pop_front();
            match self.queue.front() {
                Some(next) => self.degree = next.degree_start,
                None => self.animating = false,
            }
        } else {
            cube.rotate_face(turn.layer, turn.axis, self.degree.to_radians());
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Layout;

    fn quarter_turn() -> QueuedTurn {
        QueuedTurn::new(
            GridPos::new(0, 0, 0),
            Axis::X,
            SnapAngle::Deg90,
            0.0,
            90.0,
            15.0,
        )
        .unwrap()
    }

    #[test]
    fn zero_speed_turn_is_rejected() {
        let err = QueuedTurn::new(
            GridPos::new(0, 0, 0),
            Axis::X,
            SnapAngle::Deg0,
            10.0,
            10.0,
            0.0,
        );
        assert!(err.is_err());
    }

    #[test]
    fn idle_step_requests_no_redraw() {
        let mut cube = RubiksCube::new(Layout::new(3));
        let mut anim = Animator::new();
        assert!(!anim.step(&mut cube));
        assert!(!anim.is_animating());
    }

    #[test]
    fn quarter_turn_finishes_in_six_steps() {
        let mut cube = RubiksCube::new(Layout::new(3));
        let mut anim = Animator::new();
        anim.push(quarter_turn());
        for _ in 0..5 {
            assert!(anim.step(&mut cube));
            assert!(anim.is_animating());
        }
        assert!(anim.step(&mut cube));
        assert!(!anim.is_animating());
        assert_eq!(anim.pending(), 0);
    }

    #[test]
    fn back_to_back_turns_re_prime_the_angle() {
        let mut cube = RubiksCube::new(Layout::new(3));
        let mut anim = Animator::new();
        anim.push(quarter_turn());
        let reverse = QueuedTurn::new(
            GridPos::new(0, 0, 0),
            Axis::X,
            SnapAngle::Deg270,
            360.0,
            270.0,
            -15.0,
        )
        .unwrap();
        anim.push(reverse);
        while anim.step(&mut cube) {}
        // Two opposite quarter turns cancel out.
        let solved = RubiksCube::new(Layout::new(3));
        for (a, b) in cube.cubes().iter().zip(solved.cubes()) {
            for slot in crate::cube::FaceSlot::ALL {
                assert_eq!(a.face_color(slot), b.face_color(slot));
            }
        }
    }

    #[test]
    fn clear_forces_idle() {
        let mut cube = RubiksCube::new(Layout::new(3));
        let mut anim = Animator::new();
        anim.push(quarter_turn());
        anim.step(&mut cube);
        anim.clear();
        assert!(!anim.is_animating());
        assert!(!anim.step(&mut cube));
    }
}
