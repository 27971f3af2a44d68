//! Vertex deduplication: attribute transform, exact-key slot assignment,
//! and the 16-bit index stream.

use std::collections::HashMap;

use crate::math::Vec2;
use crate::mesh::PolyMesh;

use super::error::CompileError;
use super::CompileConfig;

/// Highest number of vertex slots a 16-bit index stream can address.
const MAX_SLOTS: usize = u16::MAX as usize + 1;

/// One deduplicated vertex: scaled position, normal, texel UV (32 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedVertex {
    /// Position, pre-scaled to output units.
    pub position: [f32; 3],
    /// Flat shading normal.
    pub normal: [f32; 3],
    /// Texture coordinate in texels, V growing downward.
    pub uv: [f32; 2],
}

/// Composite attribute key for exact-equality deduplication.
///
/// Holds the bit patterns of the eight transformed attribute floats.
/// Equality is exact: two near-identical but not bit-equal vertices stay
/// distinct slots, there is no epsilon merging. The attributes are
/// canonicalized before the key is taken, so 0.0 and -0.0 collapse to the
/// same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey([u32; 8]);

impl VertexKey {
    fn new(vertex: &PackedVertex) -> Self {
        let floats: [f32; 8] = bytemuck::cast(*vertex);
        let mut bits = [0u32; 8];
        for (slot, value) in bits.iter_mut().zip(floats) {
            *slot = value.to_bits();
        }
        Self(bits)
    }
}

/// Replace negative zero with positive zero.
///
/// Keeps `-0` out of the emitted table and out of the dedup keys.
pub(crate) fn clean_zero(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Compiled vertex/index buffers for one mesh.
///
/// `vertices` holds the unique vertices in first-seen order; `indices`
/// references them three per triangle, in traversal order. Both are ready
/// for direct GPU upload via the byte accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Unique vertices, in slot order.
    pub vertices: Vec<PackedVertex>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u16>,
}

impl MeshBuffers {
    /// Get the number of unique vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check whether the buffers hold no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// The vertex attributes as a flat float array, 8 floats per vertex.
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the vertex buffer, ready for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index buffer, ready for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Walk a normalized mesh in face/loop order and build its buffers.
///
/// The first loop to produce a given key defines that vertex's slot; every
/// later occurrence reuses it. Slot order is first-seen order, nothing
/// more.
pub(crate) fn build_buffers(
    mesh: &PolyMesh,
    config: &CompileConfig,
) -> Result<MeshBuffers, CompileError> {
    let mut slots: HashMap<VertexKey, u16> = HashMap::new();
    let mut buffers = MeshBuffers::default();

    for (face_index, face) in mesh.faces().iter().enumerate() {
        for corner in &face.loops {
            let vertex = mesh.vertices().get(corner.vertex as usize).ok_or_else(|| {
                CompileError::VertexOutOfRange {
                    mesh: mesh.display_label().to_string(),
                    face: face_index,
                    vertex: corner.vertex,
                }
            })?;
            let uv = if mesh.has_uv_channel() {
                corner.uv
            } else {
                Vec2::zeros()
            };

            let packed = PackedVertex {
                position: [
                    clean_zero(vertex.position.x * config.position_scale),
                    clean_zero(vertex.position.y * config.position_scale),
                    clean_zero(vertex.position.z * config.position_scale),
                ],
                normal: [
                    clean_zero(vertex.normal.x),
                    clean_zero(vertex.normal.y),
                    clean_zero(vertex.normal.z),
                ],
                uv: [
                    clean_zero(uv.x * config.texture_width),
                    clean_zero(config.texture_height - uv.y * config.texture_height),
                ],
            };

            let key = VertexKey::new(&packed);
            let slot = match slots.get(&key) {
                Some(&slot) => slot,
                None => {
                    if slots.len() == MAX_SLOTS {
                        return Err(CompileError::IndexCapacityExceeded {
                            mesh: mesh.display_label().to_string(),
                            unique_vertices: slots.len() + 1,
                        });
                    }
                    let slot = slots.len() as u16;
                    slots.insert(key, slot);
                    buffers.vertices.push(packed);
                    slot
                }
            };
            buffers.indices.push(slot);
        }
    }

    Ok(buffers)
}
