//! Heightmap input for the error field.
//!
//! Raster tiles come in power-of-two sizes, the hierarchy needs `2^k + 1`
//! samples per side. The extra row and column are backfilled by duplicating
//! the second-to-last ones:
//!
//! ```text
//!   tile (4×4)            grid (5×5)
//!   a b c d               a b c d d
//!   e f g h       →       e f g h h
//!   i j k l               i j k l l
//!   m n o p               m n o p p
//!                         m n o p p   ← row copy, then column copy
//! ```

pub mod terrain_rgb;

use crate::error::{RtinError, RtinResult};
use crate::grid::{coord_to_index, validate_grid_size, GridPoint};

/// Square row-major height grid of side `2^k + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Heightmap {
  grid_size: usize,
  heights: Vec<f64>,
}

impl Heightmap {
  /// Wrap an existing `grid_size²` height array.
  pub fn new(grid_size: usize, heights: Vec<f64>) -> RtinResult<Self> {
    validate_grid_size(grid_size)?;
    check_len(heights.len(), grid_size * grid_size)?;
    Ok(Self { grid_size, heights })
  }

  /// Copy a `tile_size²` raster into a backfilled `(tile_size + 1)²` grid.
  pub fn from_tile(tile_size: usize, tile: &[f64]) -> RtinResult<Self> {
    let grid_size = grid_size_for_tile(tile_size)?;
    check_len(tile.len(), tile_size * tile_size)?;

    let mut heights = vec![0.0; grid_size * grid_size];
    for (row, src) in tile.chunks_exact(tile_size).enumerate() {
      let start = coord_to_index(0, row, grid_size);
      heights[start..start + tile_size].copy_from_slice(src);
    }
    backfill(&mut heights, grid_size);

    Ok(Self { grid_size, heights })
  }

  /// Decode a packed RGB8 Terrain-RGB tile and backfill it.
  ///
  /// `rgb` must hold exactly `tile_size² · 3` bytes.
  pub fn from_rgb_tile(tile_size: usize, rgb: &[u8]) -> RtinResult<Self> {
    let grid_size = grid_size_for_tile(tile_size)?;
    check_len(rgb.len(), tile_size * tile_size * terrain_rgb::CHANNELS)?;

    let mut heights = vec![0.0; grid_size * grid_size];
    for (i, height) in terrain_rgb::decode_pixels(rgb).enumerate() {
      let (x, y) = (i % tile_size, i / tile_size);
      heights[coord_to_index(x, y, grid_size)] = height;
    }
    backfill(&mut heights, grid_size);

    Ok(Self { grid_size, heights })
  }

  #[inline]
  pub fn grid_size(&self) -> usize {
    self.grid_size
  }

  #[inline]
  pub fn heights(&self) -> &[f64] {
    &self.heights
  }

  pub fn into_heights(self) -> Vec<f64> {
    self.heights
  }

  #[inline]
  pub fn height_at(&self, point: GridPoint) -> f64 {
    self.heights[point.index(self.grid_size)]
  }
}

fn grid_size_for_tile(tile_size: usize) -> RtinResult<usize> {
  let grid_size = tile_size.saturating_add(1);
  validate_grid_size(grid_size)?;
  Ok(grid_size)
}

fn check_len(actual: usize, expected: usize) -> RtinResult<()> {
  if actual != expected {
    return Err(RtinError::InvalidHeightmapLength { expected, actual });
  }
  Ok(())
}

/// Fill the last row, then the last column, from their inner neighbours.
fn backfill(heights: &mut [f64], grid_size: usize) {
  let last = grid_size - 1;

  for x in 0..last {
    heights[coord_to_index(x, last, grid_size)] = heights[coord_to_index(x, last - 1, grid_size)];
  }
  for y in 0..grid_size {
    heights[coord_to_index(last, y, grid_size)] = heights[coord_to_index(last - 1, y, grid_size)];
  }
}
