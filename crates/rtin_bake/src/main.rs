//! Terrain-RGB mesh baker.
//!
//! Reads a Terrain-RGB PNG tile, builds its RTIN error field once and writes
//! one simplified mesh per error threshold as JSON.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to also see the
//! meshing spans from `rtin_mesh`.

mod bake;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use config::BakeConfig;

/// Terrain-RGB to RTIN mesh baker.
#[derive(Parser, Debug)]
#[command(name = "rtin_bake")]
#[command(about = "Bakes Terrain-RGB heightmaps into error-bounded RTIN meshes")]
struct Args {
	/// Terrain-RGB PNG tile (square, power-of-two side).
	#[arg(short, long)]
	input: PathBuf,

	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Error threshold in metres. Repeat for several meshes; overrides the config list.
	#[arg(short = 'e', long = "max-error", allow_negative_numbers = true)]
	max_error: Vec<f64>,

	/// Output JSON file (default: stdout).
	#[arg(short, long)]
	output: Option<PathBuf>,
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	let mut config = match &args.config {
		Some(path) => {
			info!("Loading config from: {}", path.display());
			BakeConfig::load(path)?
		}
		None => BakeConfig::default(),
	};
	if !args.max_error.is_empty() {
		config.max_errors = args.max_error.clone();
		config.validate()?;
	}

	info!("Loading heightmap: {}", args.input.display());
	let heightmap = bake::load_heightmap(&args.input)?;

	let payload = bake::bake(&heightmap, &config)?;
	payload.save(args.output.as_deref(), config.pretty)?;

	if let Some(path) = &args.output {
		info!("Done! Output written to: {}", path.display());
	}

	Ok(())
}
