//! Mesh-to-buffer compilation pipeline.
//!
//! Turns polygon meshes into deduplicated, indexed vertex/index buffer
//! pairs and serializes them as one Zig source table. Three stages run per
//! mesh, strictly forward:
//!
//! 1. Topology normalization - every edge split, every face a triangle.
//! 2. Vertex deduplication - exact-key slot assignment and a 16-bit index
//!    stream.
//! 3. Emission - one table entry per mesh, in input order.
//!
//! No state crosses mesh boundaries; the output table is assembled by the
//! driver and returned whole or not at all.
//!
//! # Example
//!
//! ```ignore
//! use tilebake_core::compile::{write_table, CompileConfig};
//! use tilebake_core::mesh::generators;
//!
//! let meshes = vec![generators::generate_quad(0.5, 0.5)];
//! let table = write_table(&meshes, &CompileConfig::default()).unwrap();
//! std::fs::write("tile_data.zig", table).unwrap();
//! ```

mod dedup;
mod emitter;
mod error;
mod normalize;
#[cfg(test)]
mod tests;

pub use dedup::{MeshBuffers, PackedVertex};
pub use error::CompileError;
pub use normalize::normalize;

use crate::mesh::PolyMesh;

/// Tunable constants of the attribute transform.
///
/// The defaults match a 64x168 texel tile atlas with positions authored at
/// 1/8 output scale.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileConfig {
    /// Uniform scale applied to every position axis.
    pub position_scale: f32,
    /// Texture atlas width in texels; U is scaled by it.
    pub texture_width: f32,
    /// Texture atlas height in texels; V is flipped and scaled by it, so
    /// texel V grows downward.
    pub texture_height: f32,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            position_scale: 8.0,
            texture_width: 64.0,
            texture_height: 168.0,
        }
    }
}

/// Compile one mesh into deduplicated vertex/index buffers.
///
/// The input mesh is left untouched. An empty mesh compiles to empty
/// buffers.
pub fn compile_mesh(mesh: &PolyMesh, config: &CompileConfig) -> Result<MeshBuffers, CompileError> {
    let working = normalize(mesh)?;
    let buffers = dedup::build_buffers(&working, config)?;
    log::debug!(
        "compiled mesh '{}': {} unique vertices, {} triangles",
        mesh.display_label(),
        buffers.vertex_count(),
        buffers.triangle_count()
    );
    Ok(buffers)
}

/// Compile every mesh and serialize the whole table.
///
/// Entries appear in input order, one per mesh including empty ones. Any
/// error aborts the run with nothing emitted; a partial table is never
/// produced.
pub fn write_table(meshes: &[PolyMesh], config: &CompileConfig) -> Result<String, CompileError> {
    let mut writer = emitter::TableWriter::new();
    for mesh in meshes {
        let buffers = compile_mesh(mesh, config)?;
        writer.write_entry(&buffers);
    }
    let table = writer.finish();
    log::info!(
        "compiled {} meshes into a {} byte table",
        meshes.len(),
        table.len()
    );
    Ok(table)
}
