//! Per-cell approximation error over an RTIN hierarchy.
//!
//! For every triangle, the error at its hypotenuse midpoint is the vertical
//! distance between the real height there and the height linearly
//! interpolated from the hypotenuse endpoints. Each parent additionally
//! absorbs the errors of its two children's midpoints, so a cell's error
//! bounds the error of everything below it.
//!
//! ```text
//!   leaves ─────────────────────────────────────────────► roots
//!   index  triangle_count-1   …   parent_triangle_count   …   0
//!
//!   errors[m] = max(errors[m],
//!                   |(h[a] + h[b]) / 2 - h[m]|,
//!                   errors[mid(a, c)],      ← parents only
//!                   errors[mid(b, c)])      ← parents only
//! ```
//!
//! The descending walk is load-bearing: a parent must see its children's
//! final values. [`ErrorField::new_parallel`] keeps that ordering by
//! processing one tree level at a time.

use rayon::prelude::*;

use crate::error::{RtinError, RtinResult};
use crate::grid::GridPoint;
use crate::hierarchy::{RtinHierarchy, RtinTriangle};

/// Maximum approximation error per grid cell for one heightmap.
///
/// Immutable after construction; extraction only reads it.
#[derive(Clone, Debug)]
pub struct ErrorField<'h> {
  grid_size: usize,
  heights: &'h [f64],
  errors: Vec<f64>,
}

impl<'h> ErrorField<'h> {
  /// Compute the error field for `heights` with a single backward pass.
  ///
  /// `heights` must hold `grid_size²` row-major samples.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "error_field::new"))]
  pub fn new(heights: &'h [f64], hierarchy: &RtinHierarchy) -> RtinResult<Self> {
    let grid_size = check_length(heights, hierarchy)?;
    let mut errors = vec![0.0; heights.len()];

    for (index, triangle) in hierarchy.triangles().iter().enumerate().rev() {
      let (mid, error) = contribution(
        heights,
        &errors,
        grid_size,
        triangle,
        hierarchy.is_parent(index),
      );
      errors[mid] = errors[mid].max(error);
    }

    Ok(Self {
      grid_size,
      heights,
      errors,
    })
  }

  /// Same result as [`ErrorField::new`], computed level by level with rayon.
  ///
  /// Within a level every triangle only reads midpoints of finer levels, so
  /// contributions are gathered in parallel and folded in afterwards.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "error_field::new_parallel")
  )]
  pub fn new_parallel(heights: &'h [f64], hierarchy: &RtinHierarchy) -> RtinResult<Self> {
    let grid_size = check_length(heights, hierarchy)?;
    let mut errors = vec![0.0; heights.len()];
    let triangles = hierarchy.triangles();

    for level in (1..=hierarchy.level_count()).rev() {
      let range = hierarchy.level_range(level);
      let start = range.start;

      let contributions: Vec<(usize, f64)> = triangles[range]
        .par_iter()
        .enumerate()
        .map(|(offset, triangle)| {
          contribution(
            heights,
            &errors,
            grid_size,
            triangle,
            hierarchy.is_parent(start + offset),
          )
        })
        .collect();

      for (mid, error) in contributions {
        errors[mid] = errors[mid].max(error);
      }
    }

    Ok(Self {
      grid_size,
      heights,
      errors,
    })
  }

  /// Side length of the grid.
  #[inline]
  pub fn grid_size(&self) -> usize {
    self.grid_size
  }

  /// The heightmap this field was computed from.
  #[inline]
  pub fn heights(&self) -> &'h [f64] {
    self.heights
  }

  /// Per-cell errors, row-major, same length as `heights`.
  #[inline]
  pub fn errors(&self) -> &[f64] {
    &self.errors
  }

  /// Error stored at a grid point.
  #[inline]
  pub fn error_at(&self, point: GridPoint) -> f64 {
    self.errors[point.index(self.grid_size)]
  }

  /// Largest error anywhere in the field.
  ///
  /// Every cell descends from the shared midpoint of the two roots, so this
  /// is the value stored at the grid center. Extracting at or above it
  /// yields the two-triangle mesh.
  pub fn max_error(&self) -> f64 {
    let center = (self.grid_size / 2) as u32;
    self.error_at(GridPoint::new(center, center))
  }
}

fn check_length(heights: &[f64], hierarchy: &RtinHierarchy) -> RtinResult<usize> {
  let grid_size = hierarchy.grid_size();
  let expected = grid_size * grid_size;
  if heights.len() != expected {
    return Err(RtinError::InvalidHeightmapLength {
      expected,
      actual: heights.len(),
    });
  }
  Ok(grid_size)
}

/// Midpoint index of `triangle` and the error it contributes there.
#[inline]
fn contribution(
  heights: &[f64],
  errors: &[f64],
  grid_size: usize,
  triangle: &RtinTriangle,
  is_parent: bool,
) -> (usize, f64) {
  let mid = triangle.midpoint().index(grid_size);
  let interpolated =
    (heights[triangle.a.index(grid_size)] + heights[triangle.b.index(grid_size)]) / 2.0;
  let mut error = (interpolated - heights[mid]).abs();

  if is_parent {
    let (left, right) = triangle.child_midpoints();
    error = error
      .max(errors[left.index(grid_size)])
      .max(errors[right.index(grid_size)]);
  }

  (mid, error)
}

#[cfg(test)]
#[path = "error_field_test.rs"]
mod error_field_test;
