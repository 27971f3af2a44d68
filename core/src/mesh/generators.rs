//! Mesh generators for common tile shapes.
//!
//! These generators produce [`PolyMesh`] values ready for the compile
//! pipeline. They stand in for the authoring environment in demos and
//! tests.

use crate::math::{Vec2, Vec3};
use crate::mesh::PolyMesh;

/// Generate a quad tile on the XY plane.
///
/// The quad is centered at the origin with the given half-width and
/// half-height, wound counter-clockwise so its normal points along +Z.
/// UVs cover the full texture: `(0,0)` at the top-left corner and `(1,1)`
/// at the bottom-right, matching the texture-space convention where V
/// grows downward.
///
/// # Arguments
///
/// * `half_width` - Half the width of the quad along the X axis
/// * `half_height` - Half the height of the quad along the Y axis
pub fn generate_quad(half_width: f32, half_height: f32) -> PolyMesh {
    let mut mesh = PolyMesh::new().with_label("quad").with_uv_channel();
    let normal = Vec3::new(0.0, 0.0, 1.0);

    let corners = [
        (Vec3::new(-half_width, -half_height, 0.0), Vec2::new(0.0, 1.0)),
        (Vec3::new(half_width, -half_height, 0.0), Vec2::new(1.0, 1.0)),
        (Vec3::new(half_width, half_height, 0.0), Vec2::new(1.0, 0.0)),
        (Vec3::new(-half_width, half_height, 0.0), Vec2::new(0.0, 0.0)),
    ];

    let loops: Vec<(u32, Vec2)> = corners
        .iter()
        .map(|&(position, uv)| (mesh.add_vertex(position, normal), uv))
        .collect();
    mesh.add_face_with_uvs(&loops);

    mesh
}

/// Generate an axis-aligned box.
///
/// Eight shared corner vertices, six quad faces wound counter-clockwise
/// viewed from outside. Each face maps the full `[0,1]` UV range. Vertex
/// normals point diagonally outward from the center; the compile pipeline
/// replaces them with flat per-face normals during normalization.
///
/// # Arguments
///
/// * `half_extents` - Half the box size along each axis
pub fn generate_box(half_extents: Vec3) -> PolyMesh {
    let mut mesh = PolyMesh::new().with_label("box").with_uv_channel();
    let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);

    let corners = [
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(-hx, hy, hz),
    ];
    for position in corners {
        mesh.add_vertex(position, position.normalize());
    }

    // One quad per side, outward winding.
    const FACES: [[u32; 4]; 6] = [
        [4, 5, 6, 7], // +Z
        [1, 0, 3, 2], // -Z
        [1, 2, 6, 5], // +X
        [0, 4, 7, 3], // -X
        [3, 7, 6, 2], // +Y
        [0, 1, 5, 4], // -Y
    ];
    let uvs = [
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 0.0),
    ];

    for face in FACES {
        let loops: Vec<(u32, Vec2)> = face.iter().zip(uvs).map(|(&v, uv)| (v, uv)).collect();
        mesh.add_face_with_uvs(&loops);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::face_normal;

    #[test]
    fn test_generate_quad() {
        let mesh = generate_quad(0.5, 0.5);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.has_uv_channel());
        assert_eq!(mesh.label(), Some("quad"));

        // Counter-clockwise winding means a +Z facing normal.
        let positions: Vec<_> = mesh
            .faces()[0]
            .loops
            .iter()
            .map(|l| mesh.vertices()[l.vertex as usize].position)
            .collect();
        assert_eq!(face_normal(&positions), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_generate_box() {
        let mesh = generate_box(Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 6);
        assert!(mesh.has_uv_channel());
    }

    #[test]
    fn test_box_faces_wind_outward() {
        let mesh = generate_box(Vec3::new(1.0, 1.0, 1.0));
        for face in mesh.faces() {
            let positions: Vec<_> = face
                .loops
                .iter()
                .map(|l| mesh.vertices()[l.vertex as usize].position)
                .collect();
            let normal = face_normal(&positions);
            let center = positions.iter().sum::<Vec3>() / positions.len() as f32;
            // The normal must point away from the box center.
            assert!(normal.dot(&center) > 0.0);
        }
    }
}
