//! `puzzle_app`
//!
//! Application-side systems:
//! - The [`PuzzleApp`] context owning cube, animator, pointer handler and
//!   scrambler
//! - Command routing (reset view, reset colors, scramble)
//! - A headless console binary driving the fixed tick loop

pub mod app;

pub use app::PuzzleApp;
