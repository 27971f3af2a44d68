//! Topology normalization: edge splitting and fan triangulation.
//!
//! [`normalize`] rebuilds a mesh so that every face is a triangle and no
//! two original faces share a vertex. Splitting gives each face private
//! copies of its corners carrying the face's own geometric normal, which
//! pins flat shading at every original edge instead of smoothing normals
//! across neighbors.

use crate::math::{face_normal, Vec3};
use crate::mesh::PolyMesh;

use super::error::CompileError;

/// Normalize a mesh into triangulated, edge-split form.
///
/// The input is never mutated. The output preserves the original face
/// order; triangles introduced for an n-gon follow a fixed fan sub-order
/// `(0, i, i+1)`, so the traversal order downstream is deterministic.
///
/// An empty input produces an empty output, not an error. A loop
/// referencing a missing vertex or a face with fewer than 3 loops is
/// corrupt input and fails the whole compile.
pub fn normalize(mesh: &PolyMesh) -> Result<PolyMesh, CompileError> {
    let mut out = PolyMesh::new();
    if let Some(label) = mesh.label() {
        out = out.with_label(label);
    }
    if mesh.has_uv_channel() {
        out = out.with_uv_channel();
    }

    for (face_index, face) in mesh.faces().iter().enumerate() {
        if face.loops.len() < 3 {
            return Err(CompileError::DegenerateFace {
                mesh: mesh.display_label().to_string(),
                face: face_index,
                loops: face.loops.len(),
            });
        }

        let mut positions = Vec::with_capacity(face.loops.len());
        for corner in &face.loops {
            let vertex = mesh.vertices().get(corner.vertex as usize).ok_or_else(|| {
                CompileError::VertexOutOfRange {
                    mesh: mesh.display_label().to_string(),
                    face: face_index,
                    vertex: corner.vertex,
                }
            })?;
            positions.push(vertex.position);
        }

        let normal = face_normal(&positions);
        if normal == Vec3::zeros() {
            log::warn!(
                "mesh '{}' face {} has zero area, emitting a zero normal",
                mesh.display_label(),
                face_index
            );
        }

        // Private vertex copies for this face: the edge split.
        let base = out.vertex_count() as u32;
        for position in &positions {
            out.add_vertex(*position, normal);
        }

        // Fan triangulation keeps the original winding.
        for i in 1..face.loops.len() as u32 - 1 {
            out.add_face_with_uvs(&[
                (base, face.loops[0].uv),
                (base + i, face.loops[i as usize].uv),
                (base + i + 1, face.loops[i as usize + 1].uv),
            ]);
        }
    }

    Ok(out)
}
