//! `puzzle_core`
//!
//! Core libraries for the interactive Rubik's cube.
//!
//! Design goals:
//! - Deterministic and modular where practical.
//! - Clear separation of concerns (math, mesh/projection, cube state,
//!   animation, pointer interaction, scrambling).
//! - Single-threaded, tick-driven state machines behind `&mut` seams.
//! - No `unsafe`.

pub mod anim;
pub mod config;
pub mod cube;
pub mod grid;
pub mod math;
pub mod mesh;
pub mod pointer;
pub mod render;
pub mod scramble;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::anim::*;
    pub use crate::config::*;
    pub use crate::cube::*;
    pub use crate::grid::*;
    pub use crate::math::*;
    pub use crate::mesh::*;
    pub use crate::pointer::*;
    pub use crate::render::*;
    pub use crate::scramble::*;
}
