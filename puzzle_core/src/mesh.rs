//! Quad meshes and screen projection.
//!
//! A [`QuadMesh`] is a list of local-space vertices plus quad faces and a
//! rigid transform. Projection flattens every mesh of a scene into one shared
//! vertex/face list (indices rebased on append), culls back-facing quads and
//! records a per-face mean depth so the caller can paint back-to-front
//! without a depth buffer.

use serde::{Deserialize, Serialize};

use crate::math::{Mat3, Vec3};

/// One quad face, as indices into the owning vertex list.
///
/// Winding is fixed:
/// ```text
/// v1 - v4
/// |     |
/// v2 - v3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// Vertex indices in winding order (v1, v2, v3, v4).
    pub verts: [usize; 4],
    /// Packed 0xRRGGBB color.
    pub color: u32,
    /// Mean projected z, filled in during projection and used for sorting.
    pub depth: f64,
}

impl Quad {
    pub fn new(verts: [usize; 4]) -> Self {
        Self {
            verts,
            color: 0,
            depth: 0.0,
        }
    }

    /// Rebases all four indices when merging into a larger vertex list.
    pub fn offset_indices(&mut self, base: usize) {
        for v in &mut self.verts {
            *v += base;
        }
    }
}

/// A rigid quad mesh: local vertices, faces and a transform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuadMesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Quad>,
    pub rotation: Mat3,
    pub translation: Vec3,
    pub scale: f64,
}

impl QuadMesh {
    pub fn add_vertex(&mut self, v: Vec3) {
        self.vertices.push(v);
    }

    pub fn add_face(&mut self, f: Quad) {
        self.faces.push(f);
    }

    /// Projects this mesh into the shared output lists.
    ///
    /// Every vertex maps through
    /// `global_rotation * (rotation * v * scale + translation) + global_translation`
    /// and is appended to `out_vertices`. A face is visible iff the z
    /// component of `(v2 - v1) × (v3 - v2)` in projected space is strictly
    /// positive; the `<= 0` side is culled. This sign convention matches the
    /// fixed winding above with the camera looking down +z — do not flip it.
    pub fn project(
        &self,
        global_rotation: &Mat3,
        global_translation: Vec3,
        out_vertices: &mut Vec<Vec3>,
        out_faces: &mut Vec<Quad>,
    ) {
        let base = out_vertices.len();
        out_vertices.extend(self.vertices.iter().map(|&v| {
            let local = self.rotation * v * self.scale + self.translation;
            *global_rotation * local + global_translation
        }));

        for face in &self.faces {
            let [i1, i2, i3, i4] = face.verts;
            let v1 = out_vertices[base + i1];
            let v2 = out_vertices[base + i2];
            let v3 = out_vertices[base + i3];
            let cross = (v2 - v1).cross(v3 - v2);
            if cross.z <= 0.0 {
                continue;
            }
            let v4 = out_vertices[base + i4];
            let mut visible = *face;
            visible.depth = (v1.z + v2.z + v3.z + v4.z) / 4.0;
            visible.offset_indices(base);
            out_faces.push(visible);
        }
    }
}

/// Sorts faces by descending mean depth, farthest first.
pub fn z_sort(faces: &mut [Quad]) {
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
