//! JSON mesh payload.
//!
//! ```text
//! {
//!   "width": 257,
//!   "terrain": [h00, h01, ...],        (optional)
//!   "meshes": [
//!     { "max_error": 20.0, "vertices": [...], "triangles": [...], "timing_us": 812 }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use rtin_mesh::MeshResult;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Everything written for one input tile.
#[derive(Debug, Serialize)]
pub struct MeshPayload {
	/// Grid side length (tile size + 1).
	pub width: usize,
	/// Row-major backfilled heights.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub terrain: Option<Vec<f64>>,
	pub meshes: Vec<MeshEntry>,
}

/// One extracted mesh.
#[derive(Debug, Serialize)]
pub struct MeshEntry {
	pub max_error: f64,
	pub vertices: Vec<u32>,
	pub triangles: Vec<u32>,
	pub timing_us: u64,
}

impl From<MeshResult> for MeshEntry {
	fn from(result: MeshResult) -> Self {
		Self {
			max_error: result.max_error,
			vertices: result.mesh.vertices,
			triangles: result.mesh.triangles,
			timing_us: result.timing_us,
		}
	}
}

impl MeshPayload {
	/// Serialize to `writer`.
	pub fn write_to<W: Write>(&self, mut writer: W, pretty: bool) -> Result<()> {
		let written = if pretty {
			serde_json::to_writer_pretty(&mut writer, self)
		} else {
			serde_json::to_writer(&mut writer, self)
		};
		written.context("Failed to serialize mesh payload")?;
		writeln!(writer).context("Failed to write mesh payload")?;
		writer.flush().context("Failed to flush mesh payload")?;
		Ok(())
	}

	/// Write to `path`, or stdout when no path is given.
	pub fn save(&self, path: Option<&Path>, pretty: bool) -> Result<()> {
		match path {
			Some(path) => {
				let file = File::create(path)
					.with_context(|| format!("Failed to create output: {}", path.display()))?;
				self.write_to(BufWriter::new(file), pretty)
					.with_context(|| format!("Failed to write: {}", path.display()))
			}
			None => self.write_to(std::io::stdout().lock(), pretty),
		}
	}
}

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;
