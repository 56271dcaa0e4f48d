//! RtinTriangle - one node of the subdivision tree.
//!
//! Only the two hypotenuse endpoints `a` and `b` are stored. The hypotenuse
//! midpoint `m` and the right-angle apex `c` follow from them:
//!
//! ```text
//!              c                 m = (a + b) / 2
//!             ╱│╲                c = m + rot90(a - m)
//!            ╱ │ ╲
//!      left ╱  │  ╲ right        cx = mx + my - ay
//!   (c, a) ╱   │   ╲ (b, c)      cy = my + ax - mx
//!         ╱    │    ╲
//!        a─────m─────b
//! ```
//!
//! Bisecting at `m` yields the two children. Their apex is `m`, so the
//! relabeling is `left = (c, a)` and `right = (b, c)`.

use crate::grid::GridPoint;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RtinTriangle {
  /// First hypotenuse endpoint
  pub a: GridPoint,
  /// Second hypotenuse endpoint
  pub b: GridPoint,
}

impl RtinTriangle {
  pub const fn new(a: GridPoint, b: GridPoint) -> Self {
    Self { a, b }
  }

  /// The two roots splitting a grid with far corner `max` along its main
  /// diagonal, in traversal order.
  pub const fn roots(max: u32) -> [Self; 2] {
    [
      Self::new(GridPoint::new(0, 0), GridPoint::new(max, max)),
      Self::new(GridPoint::new(max, max), GridPoint::new(0, 0)),
    ]
  }

  /// Hypotenuse midpoint.
  #[inline(always)]
  pub const fn midpoint(&self) -> GridPoint {
    self.a.midpoint(self.b)
  }

  /// Right-angle corner.
  ///
  /// The subtraction is ordered so that the intermediate sum never
  /// underflows for triangles of the hierarchy.
  #[inline(always)]
  pub const fn apex(&self) -> GridPoint {
    let m = self.midpoint();
    GridPoint {
      x: m.x + m.y - self.a.y,
      y: m.y + self.a.x - m.x,
    }
  }

  /// Corners in output order `(a, b, c)`.
  #[inline]
  pub const fn corners(&self) -> [GridPoint; 3] {
    [self.a, self.b, self.apex()]
  }

  /// Child reached by a set bit in the node id.
  #[inline]
  pub const fn left_child(&self) -> Self {
    Self::new(self.apex(), self.a)
  }

  /// Child reached by a clear bit in the node id.
  #[inline]
  pub const fn right_child(&self) -> Self {
    Self::new(self.b, self.apex())
  }

  /// Midpoints of the two children, `(left, right)`.
  #[inline]
  pub const fn child_midpoints(&self) -> (GridPoint, GridPoint) {
    let c = self.apex();
    (self.a.midpoint(c), self.b.midpoint(c))
  }
}

#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;
