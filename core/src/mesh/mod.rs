//! Polygon mesh data model and generators.
//!
//! This module provides:
//! - [`PolyMesh`] - Host-facing polygon mesh (vertices, faces, loops)
//! - [`Vertex`], [`Face`], [`Loop`] - The pieces a mesh is made of
//! - Generators for common tile shapes (quad, box)
//!
//! A `PolyMesh` is the input to the compile pipeline; the pipeline never
//! mutates it.

mod data;
pub mod generators;

pub use data::{Face, Loop, PolyMesh, Vertex};
