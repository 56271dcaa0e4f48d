//! Top-down walk over the implicit subdivision tree.
//!
//! Starting from the two roots, a triangle is split while its legs are
//! longer than one cell and the error at its hypotenuse midpoint exceeds the
//! threshold. Every triangle that is not split is handed to the visitor as
//! `[a, b, c]`.

use crate::error_field::ErrorField;
use crate::grid::GridPoint;
use crate::hierarchy::RtinTriangle;

impl ErrorField<'_> {
  /// Visit every triangle kept at `max_error`, in traversal order.
  ///
  /// A NaN threshold never splits, so it yields the two root triangles.
  pub fn for_each_triangle<F>(&self, max_error: f64, mut visit: F)
  where
    F: FnMut([GridPoint; 3]),
  {
    let max = (self.grid_size() - 1) as u32;
    for root in RtinTriangle::roots(max) {
      let [a, b, c] = root.corners();
      self.descend(a, b, c, max_error, &mut visit);
    }
  }

  fn descend<F>(&self, a: GridPoint, b: GridPoint, c: GridPoint, max_error: f64, visit: &mut F)
  where
    F: FnMut([GridPoint; 3]),
  {
    let m = a.midpoint(b);

    if a.manhattan(c) > 1 && self.error_at(m) > max_error {
      self.descend(c, a, m, max_error, visit);
      self.descend(b, c, m, max_error, visit);
    } else {
      visit([a, b, c]);
    }
  }
}
