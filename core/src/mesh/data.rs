//! Polygon mesh data structures.
//!
//! [`PolyMesh`] is an owned value type: faces are ordered rings of loops,
//! each loop referencing one vertex and carrying the per-corner UV from the
//! mesh's single optional UV channel.

use crate::math::{Vec2, Vec3};

/// One vertex: position and shading normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in object space.
    pub position: Vec3,
    /// Shading normal (unit length for well-formed input).
    pub normal: Vec3,
}

/// One corner of a face.
///
/// References one vertex and carries the per-face UV coordinate for that
/// corner. UVs are meaningful only when the owning mesh has an active UV
/// channel; otherwise every corner resolves to `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loop {
    /// Index into the mesh's vertex list.
    pub vertex: u32,
    /// Normalized texture coordinate for this corner.
    pub uv: Vec2,
}

/// A face: an ordered ring of loops, 3 or more for valid geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    /// The corners of the face, in winding order.
    pub loops: Vec<Loop>,
}

/// A polygon mesh with per-vertex positions/normals and per-loop UVs.
///
/// Faces may be arbitrary n-gons. Built through the `with_*` / `add_*`
/// methods; read through the accessor methods. The compile pipeline treats
/// a `PolyMesh` as read-only input.
#[derive(Clone, Default)]
pub struct PolyMesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    uv_channel: bool,
    label: Option<String>,
}

impl PolyMesh {
    /// Create a new empty mesh with no active UV channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a debug label, used in log output and error diagnostics.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the UV channel as active.
    ///
    /// Without this, loop UVs are ignored and resolve to `(0, 0)`.
    pub fn with_uv_channel(mut self) -> Self {
        self.uv_channel = true;
        self
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex { position, normal });
        index
    }

    /// Append a face from vertex indices, with zero UVs on every corner.
    pub fn add_face(&mut self, corners: &[u32]) -> usize {
        let loops = corners
            .iter()
            .map(|&vertex| Loop {
                vertex,
                uv: Vec2::zeros(),
            })
            .collect();
        let index = self.faces.len();
        self.faces.push(Face { loops });
        index
    }

    /// Append a face from (vertex index, UV) pairs.
    pub fn add_face_with_uvs(&mut self, corners: &[(u32, Vec2)]) -> usize {
        let loops = corners
            .iter()
            .map(|&(vertex, uv)| Loop { vertex, uv })
            .collect();
        let index = self.faces.len();
        self.faces.push(Face { loops });
        index
    }

    /// Get the vertex list.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get the face list.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the UV channel is active.
    pub fn has_uv_channel(&self) -> bool {
        self.uv_channel
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label for diagnostics: the debug label, or `<unnamed>` if none was set.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("<unnamed>")
    }

    /// Check whether the mesh has no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }
}

impl std::fmt::Debug for PolyMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolyMesh")
            .field("label", &self.label)
            .field("vertex_count", &self.vertices.len())
            .field("face_count", &self.faces.len())
            .field("uv_channel", &self.uv_channel)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh = PolyMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert!(!mesh.has_uv_channel());
        assert_eq!(mesh.label(), None);
        assert_eq!(mesh.display_label(), "<unnamed>");
    }

    #[test]
    fn test_build_triangle() {
        let mut mesh = PolyMesh::new().with_label("tri");
        let a = mesh.add_vertex(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        let b = mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let c = mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let face = mesh.add_face(&[a, b, c]);

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(face, 0);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces()[0].loops.len(), 3);
        assert_eq!(mesh.faces()[0].loops[1].vertex, 1);
        assert_eq!(mesh.faces()[0].loops[1].uv, Vec2::zeros());
        assert_eq!(mesh.display_label(), "tri");
    }

    #[test]
    fn test_build_face_with_uvs() {
        let mut mesh = PolyMesh::new().with_uv_channel();
        let a = mesh.add_vertex(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        let b = mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let c = mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        mesh.add_face_with_uvs(&[
            (a, Vec2::new(0.0, 0.0)),
            (b, Vec2::new(1.0, 0.0)),
            (c, Vec2::new(0.0, 1.0)),
        ]);

        assert!(mesh.has_uv_channel());
        assert_eq!(mesh.faces()[0].loops[2].uv, Vec2::new(0.0, 1.0));
    }
}
