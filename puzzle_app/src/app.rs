//! Application context.
//!
//! [`PuzzleApp`] owns the cube state, the animation queue, the pointer
//! handler and the scrambler, and routes the three external drivers into
//! them: the fixed-period tick, raw pointer events and discrete commands
//! (reset view, reset colors, scramble). Everything is single-threaded; the
//! two state machines only ever run one step at a time behind `&mut self`.

use puzzle_core::anim::Animator;
use puzzle_core::config::PuzzleConfig;
use puzzle_core::cube::{palette, RubiksCube};
use puzzle_core::grid::Layout;
use puzzle_core::math::Vec3;
use puzzle_core::mesh::Quad;
use puzzle_core::pointer::PointerHandler;
use puzzle_core::render::RenderBackend;
use puzzle_core::scramble::Scrambler;
use tracing::{debug, info};

/// Top-level application state.
pub struct PuzzleApp {
    pub cube: RubiksCube,
    pub animator: Animator,
    pub pointer: PointerHandler,
    scrambler: Scrambler,
    cfg: PuzzleConfig,
}

impl PuzzleApp {
    pub fn new(cfg: PuzzleConfig) -> Self {
        Self::with_scrambler(cfg, Scrambler::new())
    }

    /// Deterministic variant for tests.
    pub fn with_scrambler(cfg: PuzzleConfig, scrambler: Scrambler) -> Self {
        Self {
            cube: RubiksCube::new(Layout::new(cfg.cube_count)),
            animator: Animator::new(),
            pointer: PointerHandler::new(),
            scrambler,
            cfg,
        }
    }

    /// One animation step. Returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.animator.step(&mut self.cube)
    }

    /// One pointer event. Ignored while a turn animation is playing, so a
    /// drag can never fight the animator over the same layer.
    pub fn pointer_event(&mut self, pos: Vec3, down: bool, up: bool) -> bool {
        if self.animator.is_animating() {
            return false;
        }
        self.pointer
            .step(pos, down, up, &mut self.cube, &mut self.animator)
    }

    /// Restores the default viewing angle and pointer state.
    pub fn reset_view(&mut self) {
        self.cube.reset_view();
        self.cube.reset_face_transforms();
        self.pointer.reset();
        debug!("view reset");
    }

    /// Full reset: view, colors, pointer and any queued animation.
    pub fn reset_colors(&mut self) {
        self.cube.reset_view();
        self.cube.reset_face_transforms();
        self.cube.reset_colors();
        self.pointer.reset();
        self.animator.clear();
        debug!("colors reset");
    }

    /// Queues a configured number of random turns. Refused while animating.
    /// Returns whether anything was queued.
    pub fn scramble(&mut self) -> bool {
        if self.animator.is_animating() {
            return false;
        }
        self.pointer.reset();
        self.cube.reset_face_transforms();
        for _ in 0..self.cfg.scramble_turns {
            let turn = self.scrambler.next_turn(self.cube.layout());
            self.animator.push(turn);
        }
        info!(turns = self.cfg.scramble_turns, "scramble queued");
        true
    }

    /// Projects the cube into a fresh drawing list.
    pub fn project(&self) -> (Vec<Vec3>, Vec<Quad>) {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        self.cube.project(&mut vertices, &mut faces);
        (vertices, faces)
    }

    /// Projects and hands the frame to a renderer.
    pub fn draw<B: RenderBackend>(&self, backend: &mut B) {
        let (vertices, faces) = self.project();
        backend.begin_frame(palette::BACKGROUND);
        backend.draw_quads(&vertices, &faces);
        backend.end_frame();
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PuzzleApp {
        PuzzleApp::with_scrambler(PuzzleConfig::default(), Scrambler::from_seed(1))
    }

    #[test]
    fn pointer_events_are_ignored_while_animating() {
        let mut app = app();
        app.scramble();
        assert!(app.tick());
        assert!(!app.pointer_event(Vec3::ZERO, true, false));
    }

    #[test]
    fn scramble_is_refused_while_animating() {
        let mut app = app();
        assert!(app.scramble());
        app.tick();
        assert!(!app.scramble());
    }

    #[test]
    fn reset_colors_clears_the_queue() {
        let mut app = app();
        app.scramble();
        app.tick();
        app.reset_colors();
        assert!(!app.animator.is_animating());
        assert!(!app.tick());
    }
}
