//! # Tile Export Demo
//!
//! Plays the host-environment role for the tilebake compiler: builds a few
//! sample tile meshes with the generators, compiles them into vertex/index
//! buffers, and writes the resulting Zig source table to disk.
//!
//! ```bash
//! cargo run --bin export_tiles -- --output src/tiles/tile_data.zig
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tilebake_core::compile::{write_table, CompileConfig};
use tilebake_core::math::Vec3;
use tilebake_core::mesh::generators;

#[derive(Parser)]
#[command(about = "Compile sample tile meshes into a Zig vertex/index table")]
struct Args {
    /// Output path for the generated Zig source.
    #[arg(short, long, default_value = "tile_data.zig")]
    output: PathBuf,

    /// Uniform position scale.
    #[arg(long, default_value_t = 8.0)]
    position_scale: f32,

    /// Texture atlas width in texels.
    #[arg(long, default_value_t = 64.0)]
    texture_width: f32,

    /// Texture atlas height in texels.
    #[arg(long, default_value_t = 168.0)]
    texture_height: f32,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = CompileConfig {
        position_scale: args.position_scale,
        texture_width: args.texture_width,
        texture_height: args.texture_height,
    };

    // Sample tiles standing in for authored meshes.
    let meshes = vec![
        generators::generate_box(Vec3::new(0.5, 0.5, 0.5)).with_label("block"),
        generators::generate_quad(0.5, 0.5).with_label("panel"),
        generators::generate_box(Vec3::new(0.5, 0.5, 0.25)).with_label("slab"),
    ];

    let table = match write_table(&meshes, &config) {
        Ok(table) => table,
        Err(err) => {
            log::error!("compile failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = std::fs::write(&args.output, &table) {
        log::error!("failed to write {}: {err}", args.output.display());
        return ExitCode::FAILURE;
    }

    log::info!(
        "wrote {} ({} bytes, {} meshes)",
        args.output.display(),
        table.len(),
        meshes.len()
    );
    ExitCode::SUCCESS
}
