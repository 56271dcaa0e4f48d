//! RTIN hierarchy - the grid-size-dependent triangle table.
//!
//! The subdivision tree is implicit: no nodes are linked, every triangle is
//! addressed by an index into a flat corner table. Index `i` corresponds to
//! the binary node id `i + 2`.
//!
//! # Node Ids
//!
//! ```text
//! id = 1 bₙ … b₂ b₁ b₀        (binary, leading 1 marks the length)
//!
//!   b₀        root choice:  1 → (0,0)→(max,max)   0 → (max,max)→(0,0)
//!   b₁ … bₙ   path choices: 1 → left child (c, a) 0 → right child (b, c)
//! ```
//!
//! Ids of equal bit length form one tree level, so level `d` (1 = roots)
//! occupies indices `[2^d - 2, 2^(d+1) - 2)`. Every id in a deeper level is
//! larger than every id above it: walking indices downward visits children
//! before their parents.
//!
//! # Counts
//!
//! ```text
//! tile_size             = grid_size - 1 = 2^k
//! triangle_count        = 2·tile² - 2
//! parent_triangle_count = triangle_count - tile²
//! level_count           = 2k
//! ```
//!
//! The table is immutable once built and can be shared by reference across
//! any number of heightmaps (and threads) of the same grid size.

mod triangle;

pub use triangle::RtinTriangle;

use std::ops::Range;

use crate::error::RtinResult;
use crate::error_field::ErrorField;
use crate::grid::validate_grid_size;

/// Precomputed corner table for one grid size.
#[derive(Clone, Debug)]
pub struct RtinHierarchy {
  grid_size: usize,
  parent_triangle_count: usize,
  triangles: Vec<RtinTriangle>,
}

impl RtinHierarchy {
  /// Build the corner table for a `grid_size × grid_size` grid.
  ///
  /// Fails with [`RtinError::InvalidGridSize`](crate::RtinError) unless
  /// `grid_size - 1` is a power of two and `grid_size >= 3`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "hierarchy::new"))]
  pub fn new(grid_size: usize) -> RtinResult<Self> {
    let tile_size = validate_grid_size(grid_size)?;
    let leaf_count = tile_size * tile_size;
    let triangle_count = 2 * leaf_count - 2;

    let triangles = (0..triangle_count)
      .map(|i| decode_triangle(i + 2, tile_size as u32))
      .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(grid_size, triangle_count, "built rtin hierarchy");

    Ok(Self {
      grid_size,
      parent_triangle_count: triangle_count - leaf_count,
      triangles,
    })
  }

  /// Side length of the grid.
  #[inline]
  pub fn grid_size(&self) -> usize {
    self.grid_size
  }

  /// `grid_size - 1`, the number of cells per side.
  #[inline]
  pub fn tile_size(&self) -> usize {
    self.grid_size - 1
  }

  /// Total triangles in the table (both roots included).
  #[inline]
  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  /// Triangles with two children. These occupy the lowest indices.
  #[inline]
  pub fn parent_triangle_count(&self) -> usize {
    self.parent_triangle_count
  }

  /// True if the triangle at `index` has children in the table.
  #[inline]
  pub fn is_parent(&self, index: usize) -> bool {
    index < self.parent_triangle_count
  }

  /// Triangle at `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index >= triangle_count()`.
  #[inline]
  pub fn triangle(&self, index: usize) -> RtinTriangle {
    self.triangles[index]
  }

  /// The full corner table in index order.
  #[inline]
  pub fn triangles(&self) -> &[RtinTriangle] {
    &self.triangles
  }

  /// Number of tree levels (roots are level 1, leaves are the last).
  pub fn level_count(&self) -> usize {
    2 * self.tile_size().trailing_zeros() as usize
  }

  /// Index range of level `level` (1-based).
  ///
  /// # Panics
  ///
  /// Panics if `level` is 0 or greater than `level_count()`.
  pub fn level_range(&self, level: usize) -> Range<usize> {
    assert!(
      (1..=self.level_count()).contains(&level),
      "level {} out of range 1..={}",
      level,
      self.level_count()
    );
    ((1 << level) - 2)..((1 << (level + 1)) - 2)
  }

  /// Build the error field for `heights` over this hierarchy.
  ///
  /// Shorthand for [`ErrorField::new`].
  pub fn error_field<'h>(&self, heights: &'h [f64]) -> RtinResult<ErrorField<'h>> {
    ErrorField::new(heights, self)
  }
}

/// Walk the bits of `id` from the root down and return its hypotenuse.
fn decode_triangle(id: usize, tile_size: u32) -> RtinTriangle {
  let [first_root, second_root] = RtinTriangle::roots(tile_size);
  let mut triangle = if id & 1 != 0 { first_root } else { second_root };
  let mut c = triangle.apex();

  let mut path = id >> 1;
  while path > 1 {
    let m = triangle.midpoint();
    triangle = if path & 1 != 0 {
      RtinTriangle::new(c, triangle.a)
    } else {
      RtinTriangle::new(triangle.b, c)
    };
    c = m;
    path >>= 1;
  }

  triangle
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
