//! Image loading and the mesh bake itself.

use anyhow::{Context, Result};
use log::info;
use rtin_mesh::{extract_batch, ErrorField, Heightmap, RtinHierarchy};
use std::path::Path;

use crate::config::BakeConfig;
use crate::output::{MeshEntry, MeshPayload};

/// Load a Terrain-RGB PNG and backfill it into a `2^k + 1` grid.
pub fn load_heightmap(path: &Path) -> Result<Heightmap> {
	let img = image::open(path)
		.with_context(|| format!("Failed to load image: {}", path.display()))?
		.to_rgb8();
	let (width, height) = img.dimensions();

	if width != height {
		anyhow::bail!("Heightmap must be square, got {}x{}", width, height);
	}
	if width < 2 || !width.is_power_of_two() {
		anyhow::bail!("Heightmap side must be a power of 2 >= 2, got {}", width);
	}

	let heightmap = Heightmap::from_rgb_tile(width as usize, img.as_raw())
		.with_context(|| format!("Failed to decode Terrain-RGB: {}", path.display()))?;
	Ok(heightmap)
}

/// Build the error field and extract every configured threshold.
pub fn bake(heightmap: &Heightmap, config: &BakeConfig) -> Result<MeshPayload> {
	let grid_size = heightmap.grid_size();
	let hierarchy = RtinHierarchy::new(grid_size)?;
	let field = if config.parallel_errors {
		ErrorField::new_parallel(heightmap.heights(), &hierarchy)?
	} else {
		ErrorField::new(heightmap.heights(), &hierarchy)?
	};

	info!(
		"Built {}x{} error field ({} triangles), max error {:.2} m",
		grid_size,
		grid_size,
		hierarchy.triangle_count(),
		field.max_error()
	);

	let results = extract_batch(&field, &config.max_errors);
	for result in &results {
		info!(
			"  max_error {:>8.2} m: {} vertices, {} triangles ({} us)",
			result.max_error,
			result.mesh.vertex_count(),
			result.mesh.triangle_count(),
			result.timing_us
		);
	}

	Ok(MeshPayload {
		width: grid_size,
		terrain: config
			.include_terrain
			.then(|| heightmap.heights().to_vec()),
		meshes: results.into_iter().map(MeshEntry::from).collect(),
	})
}

#[cfg(test)]
#[path = "bake_test.rs"]
mod bake_test;
