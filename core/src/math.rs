//! Math type aliases and helper functions.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Compute the unit normal of a polygon using Newell's method.
///
/// Works for arbitrary (possibly slightly non-planar) polygons. The sign
/// follows the winding: counter-clockwise loops viewed from the normal's
/// side. Returns a zero vector for degenerate input (fewer than 3 points,
/// or zero area).
pub fn face_normal(points: &[Vec3]) -> Vec3 {
    if points.len() < 3 {
        return Vec3::zeros();
    }
    let mut n = Vec3::zeros();
    for (i, a) in points.iter().enumerate() {
        let b = &points[(i + 1) % points.len()];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    let len = n.norm();
    if len > 0.0 {
        n / len
    } else {
        Vec3::zeros()
    }
}
