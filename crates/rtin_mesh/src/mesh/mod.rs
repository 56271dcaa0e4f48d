//! Mesh extraction from an error field.
//!
//! Extraction runs the shared traversal twice:
//!
//! ```text
//!   count pass   scratch[cell] = next ordinal (1-based) for each new corner
//!                triangle_count += 1
//!        │
//!        ▼       allocate vertices[2·V], triangles[3·T]
//!   fill pass    o = scratch[cell] - 1
//!                vertices[2o..2o+2] = (x, y);  triangles.push(o)
//! ```
//!
//! Vertex ordinals follow first encounter in traversal order, corner order
//! `a, b, c`. A zero in the scratch means "not yet assigned".

mod traversal;

use crate::error_field::ErrorField;
use crate::types::TerrainMesh;

/// Reusable per-cell vertex ordinal buffer.
///
/// One scratch serves one extraction at a time; the `&mut` borrow taken by
/// [`ErrorField::extract_mesh_with`] enforces that. It resizes itself when
/// used with a different grid size.
#[derive(Clone, Debug, Default)]
pub struct MeshScratch {
  indices: Vec<u32>,
}

impl MeshScratch {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-size for a grid so the first extraction does not allocate.
  pub fn with_grid_size(grid_size: usize) -> Self {
    Self {
      indices: vec![0; grid_size * grid_size],
    }
  }

  /// Number of cells the buffer currently covers.
  pub fn capacity_cells(&self) -> usize {
    self.indices.len()
  }

  fn reset(&mut self, cell_count: usize) {
    self.indices.clear();
    self.indices.resize(cell_count, 0);
  }
}

impl ErrorField<'_> {
  /// Extract the mesh for `max_error` with a private scratch buffer.
  ///
  /// Takes `&self`, so any number of threads may extract from one field.
  pub fn extract_mesh(&self, max_error: f64) -> TerrainMesh {
    let mut scratch = MeshScratch::new();
    self.extract_mesh_with(&mut scratch, max_error)
  }

  /// Extract the mesh for `max_error`, reusing `scratch`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mesh::extract"))]
  pub fn extract_mesh_with(&self, scratch: &mut MeshScratch, max_error: f64) -> TerrainMesh {
    let grid_size = self.grid_size();
    scratch.reset(grid_size * grid_size);

    let mut vertex_count = 0u32;
    let mut triangle_count = 0usize;
    {
      let indices = &mut scratch.indices;
      self.for_each_triangle(max_error, |corners| {
        for p in corners {
          let slot = &mut indices[p.index(grid_size)];
          if *slot == 0 {
            vertex_count += 1;
            *slot = vertex_count;
          }
        }
        triangle_count += 1;
      });
    }

    let mut vertices = vec![0u32; 2 * vertex_count as usize];
    let mut triangles = Vec::with_capacity(3 * triangle_count);
    let indices = &scratch.indices;
    self.for_each_triangle(max_error, |corners| {
      for p in corners {
        let ordinal = indices[p.index(grid_size)] - 1;
        let k = 2 * ordinal as usize;
        vertices[k] = p.x;
        vertices[k + 1] = p.y;
        triangles.push(ordinal);
      }
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(
      max_error,
      vertices = vertex_count,
      triangles = triangle_count,
      "extracted mesh"
    );

    TerrainMesh {
      vertices,
      triangles,
    }
  }
}
