//! Textual emission of compiled buffers as a Zig source table.
//!
//! The table is one Zig module: a `tiles` slice with one entry per mesh,
//! each entry an interleaved `f32` vertex array plus a `u16` index array.
//! Floats use the shortest representation that round-trips; exact zero
//! prints as `0`, never `-0`.

use std::fmt::Write;

use super::dedup::{clean_zero, MeshBuffers};

const HEADER: &str = "const Mesh = @import(\"../mesh.zig\").Mesh;\n\n\
                      pub const tiles: []const Mesh = &.{\n";

/// Incremental writer for the output table.
///
/// Entries are appended in call order; `finish` closes the table and hands
/// back the whole string. Nothing is observable until then.
pub(crate) struct TableWriter {
    out: String,
}

impl TableWriter {
    pub(crate) fn new() -> Self {
        Self {
            out: HEADER.to_string(),
        }
    }

    /// Append one mesh entry. Empty buffers still produce an entry with
    /// empty arrays.
    pub(crate) fn write_entry(&mut self, buffers: &MeshBuffers) {
        self.out.push_str("    .{\n");

        self.out.push_str("        .vertex_data = &[_]f32{\n");
        for vertex in &buffers.vertices {
            let floats: [f32; 8] = bytemuck::cast(*vertex);
            self.out.push_str("            ");
            for value in floats {
                // clean_zero ran upstream; re-assert it so the writer can
                // never print -0 on its own.
                let _ = write!(self.out, "{}, ", clean_zero(value));
            }
            replace_trailing_space(&mut self.out);
        }
        self.out.push_str("        },\n");

        self.out.push_str("        .index_data = &[_]u16{\n");
        for triangle in buffers.indices.chunks(3) {
            self.out.push_str("            ");
            for index in triangle {
                let _ = write!(self.out, "{index}, ");
            }
            replace_trailing_space(&mut self.out);
        }
        self.out.push_str("        },\n");

        self.out.push_str("    },\n");
    }

    /// Close the table and return the full source text.
    pub(crate) fn finish(mut self) -> String {
        self.out.push_str("};\n");
        self.out
    }
}

/// Turn the `", "` separator left by the last value of a row into `",\n"`.
fn replace_trailing_space(out: &mut String) {
    debug_assert!(out.ends_with(' '));
    out.pop();
    out.push('\n');
}
