//! Multi-threshold extraction.
//!
//! Thin wrapper around [`ErrorField::extract_mesh_with`] that:
//! - Extracts several thresholds in parallel via rayon
//! - Tracks timing per mesh
//! - Keeps one scratch buffer per worker
//!
//! ```text
//!   &ErrorField ──┬── max_errors[0] ──► extract ──► MeshResult
//!                 ├── max_errors[1] ──► extract ──► MeshResult
//!                 └── …                             (input order)
//! ```

use web_time::Instant;

use rayon::prelude::*;

use crate::error_field::ErrorField;
use crate::mesh::MeshScratch;
use crate::types::TerrainMesh;

/// One extracted mesh with the threshold that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshResult {
  pub max_error: f64,
  pub mesh: TerrainMesh,
  /// Wall-clock extraction time in microseconds.
  pub timing_us: u64,
}

/// Extract a single mesh and record how long it took.
pub fn extract_timed(field: &ErrorField<'_>, scratch: &mut MeshScratch, max_error: f64) -> MeshResult {
  let start = Instant::now();
  let mesh = field.extract_mesh_with(scratch, max_error);
  let timing_us = start.elapsed().as_micros() as u64;

  MeshResult {
    max_error,
    mesh,
    timing_us,
  }
}

/// Extract one mesh per threshold in parallel.
///
/// Results maintain the same order as `max_errors`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mesh::extract_batch"))]
pub fn extract_batch(field: &ErrorField<'_>, max_errors: &[f64]) -> Vec<MeshResult> {
  if max_errors.is_empty() {
    return Vec::new();
  }

  max_errors
    .par_iter()
    .map_init(MeshScratch::default, |scratch, &max_error| {
      extract_timed(field, scratch, max_error)
    })
    .collect()
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
