//! Rendering abstraction.
//!
//! This crate intentionally does not depend on a graphics backend. The
//! projection pass produces screen-space vertices plus depth-sorted quads;
//! a real renderer fills them back-to-front as solid polygons.

use crate::math::Vec3;
use crate::mesh::Quad;

/// A minimal rendering API over the projected drawing list.
pub trait RenderBackend: Send + Sync {
    fn begin_frame(&mut self, background: u32);
    /// Fills the given quads, which arrive already sorted back-to-front.
    fn draw_quads(&mut self, vertices: &[Vec3], faces: &[Quad]);
    fn end_frame(&mut self);
}

/// A no-op renderer useful for headless runs and tests.
#[derive(Default)]
pub struct NullRenderer {
    /// Number of quads handed over in the most recent frame.
    pub last_quad_count: usize,
}

impl RenderBackend for NullRenderer {
    fn begin_frame(&mut self, _background: u32) {}
    fn draw_quads(&mut self, _vertices: &[Vec3], faces: &[Quad]) {
        self.last_quad_count = faces.len();
    }
    fn end_frame(&mut self) {}
}
