//! Pipeline-level tests: full compile runs over small meshes.

use crate::math::{Vec2, Vec3};
use crate::mesh::PolyMesh;


/// Single triangle in the XY plane with the given UV at every corner.
fn triangle_with_uv(uv: Vec2) -> PolyMesh {
    let mut mesh = PolyMesh::new().with_label("tri").with_uv_channel();
    let a = mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    let b = mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    let c = mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    mesh.add_face_with_uvs(&[(a, uv), (b, uv), (c, uv)]);
    mesh
}

/// Two coplanar triangles forming a unit quad, sharing the diagonal.
///
/// Both faces get the same flat normal, and shared corners carry the same
/// planar UV, so their split copies deduplicate back together.
fn coplanar_pair() -> PolyMesh {
    let mut mesh = PolyMesh::new().with_label("coplanar").with_uv_channel();
    let corners = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let ids: Vec<u32> = corners
        .iter()
        .map(|&p| mesh.add_vertex(p, Vec3::new(0.0, 0.0, 1.0)))
        .collect();
    let uv = |i: usize| Vec2::new(corners[i].x, corners[i].y);
    mesh.add_face_with_uvs(&[(ids[0], uv(0)), (ids[1], uv(1)), (ids[2], uv(2))]);
    mesh.add_face_with_uvs(&[(ids[0], uv(0)), (ids[2], uv(2)), (ids[3], uv(3))]);
    mesh
}

/// Two triangles sharing an edge but folded out of plane.
///
/// The fold gives the faces different normals, so the shared corners stay
/// distinct slots after deduplication.
fn folded_pair() -> PolyMesh {
    let mut mesh = PolyMesh::new().with_label("folded");
    let a = mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    let b = mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    let c = mesh.add_vertex(Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    let d = mesh.add_vertex(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
    mesh.add_face(&[a, b, c]);
    mesh.add_face(&[a, c, d]);
    mesh
}
