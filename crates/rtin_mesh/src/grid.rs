//! Grid layout for RTIN heightmaps.
//!
//! A heightmap is a square grid of `grid_size × grid_size` samples where
//! `grid_size = 2^k + 1`. The `+ 1` lets every triangle of the subdivision
//! land its corners and hypotenuse midpoint exactly on grid samples.
//!
//! ```text
//!   x →  0     1     2     3     4          grid_size = 5
//! y      ┌─────┬─────┬─────┬─────┐          tile_size = 4
//! ↓ 0    │ 0   │ 1   │ 2   │ 3   │ 4
//!        ├─────┼─────┼─────┼─────┤
//!   1    │ 5   │ 6   │ 7   │ 8   │ 9
//!        ├─────┼─────┼─────┼─────┤
//!   2    │ 10  │ 11  │ 12  │ 13  │ 14        index = y * grid_size + x
//!        ├─────┼─────┼─────┼─────┤
//!   3    │ 15  │ 16  │ 17  │ 18  │ 19
//!        ├─────┼─────┼─────┼─────┤
//!   4      20    21    22    23    24
//! ```
//!
//! Coordinates are stored as `u32`; flat indices are `usize`.

use crate::error::{RtinError, RtinResult};

/// Smallest grid that still has an interior midpoint (one 2×2 tile).
pub const MIN_GRID_SIZE: usize = 3;

/// Largest supported tile size (2^15). Keeps the corner table and
/// coordinate sums well inside `u32`.
pub const MAX_TILE_SIZE: usize = 1 << 15;

/// Integer grid coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct GridPoint {
  pub x: u32,
  pub y: u32,
}

impl GridPoint {
  #[inline(always)]
  pub const fn new(x: u32, y: u32) -> Self {
    Self { x, y }
  }

  /// Flat row-major index of this point in a grid of side `grid_size`.
  #[inline(always)]
  pub const fn index(self, grid_size: usize) -> usize {
    coord_to_index(self.x as usize, self.y as usize, grid_size)
  }

  /// Midpoint of the segment `self → other`, rounded toward zero.
  #[inline(always)]
  pub const fn midpoint(self, other: Self) -> Self {
    Self {
      x: (self.x + other.x) >> 1,
      y: (self.y + other.y) >> 1,
    }
  }

  /// L1 distance between two points.
  #[inline(always)]
  pub const fn manhattan(self, other: Self) -> u32 {
    self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
  }
}

/// Convert grid coordinates to a row-major flat index.
#[inline(always)]
pub const fn coord_to_index(x: usize, y: usize, grid_size: usize) -> usize {
  y * grid_size + x
}

/// Convert a row-major flat index back to `(x, y)`.
#[inline(always)]
pub const fn index_to_coord(idx: usize, grid_size: usize) -> (usize, usize) {
  (idx % grid_size, idx / grid_size)
}

/// True when `grid_size - 1` is a power of two within the supported range.
pub fn is_valid_grid_size(grid_size: usize) -> bool {
  if grid_size < MIN_GRID_SIZE {
    return false;
  }
  let tile_size = grid_size - 1;
  tile_size.is_power_of_two() && tile_size <= MAX_TILE_SIZE
}

/// Validate a grid size and return its tile size (`grid_size - 1`).
pub fn validate_grid_size(grid_size: usize) -> RtinResult<usize> {
  if is_valid_grid_size(grid_size) {
    Ok(grid_size - 1)
  } else {
    Err(RtinError::InvalidGridSize { grid_size })
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
