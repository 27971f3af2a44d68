//! # Tilebake Core
//!
//! Core crate for the tilebake mesh-to-buffer compiler: polygon meshes go
//! in, deduplicated vertex/index buffer pairs come out, serialized as one
//! Zig source table ready to embed in a game build.

pub mod compile;
pub mod math;
pub mod mesh;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
