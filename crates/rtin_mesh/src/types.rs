//! Mesh output types.

use glam::Vec3;

use crate::grid::GridPoint;

/// Extracted mesh in grid coordinates.
///
/// `vertices` interleaves `x, y` pairs; `triangles` holds three vertex
/// ordinals per triangle, corner order `(a, b, c)` as produced by the
/// traversal. Winding is consistent across the whole mesh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TerrainMesh {
  /// Interleaved grid coordinates `[x0, y0, x1, y1, ...]`.
  pub vertices: Vec<u32>,

  /// Vertex ordinals, 3 per triangle.
  pub triangles: Vec<u32>,
}

impl TerrainMesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of distinct vertices.
  pub fn vertex_count(&self) -> usize {
    self.vertices.len() / 2
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.triangles.len() / 3
  }

  /// Returns true if no geometry was extracted.
  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  /// Grid position of vertex `i`.
  #[inline]
  pub fn vertex(&self, i: usize) -> GridPoint {
    GridPoint::new(self.vertices[2 * i], self.vertices[2 * i + 1])
  }

  /// Vertex ordinals of triangle `i`.
  #[inline]
  pub fn triangle(&self, i: usize) -> [u32; 3] {
    let k = 3 * i;
    [self.triangles[k], self.triangles[k + 1], self.triangles[k + 2]]
  }

  /// Iterate over vertex positions in ordinal order.
  pub fn iter_vertices(&self) -> impl Iterator<Item = GridPoint> + '_ {
    self
      .vertices
      .chunks_exact(2)
      .map(|v| GridPoint::new(v[0], v[1]))
  }

  /// Y-up positions `(x, height * vertical_scale, y)` for each vertex.
  ///
  /// `heights` is the heightmap the mesh was extracted from.
  pub fn positions(&self, heights: &[f64], grid_size: usize, vertical_scale: f32) -> Vec<Vec3> {
    self
      .iter_vertices()
      .map(|p| {
        let height = heights[p.index(grid_size)] as f32;
        Vec3::new(p.x as f32, height * vertical_scale, p.y as f32)
      })
      .collect()
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
