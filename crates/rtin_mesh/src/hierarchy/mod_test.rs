use std::collections::HashMap;

use super::*;
use crate::error::RtinError;
use crate::grid::GridPoint;

fn tri(ax: u32, ay: u32, bx: u32, by: u32) -> RtinTriangle {
  RtinTriangle::new(GridPoint::new(ax, ay), GridPoint::new(bx, by))
}

// =========================================================================
// Construction and counts
// =========================================================================

#[test]
fn test_triangle_counts_for_valid_sizes() {
  for k in 1..=8 {
    let grid_size = (1usize << k) + 1;
    let hierarchy = RtinHierarchy::new(grid_size).expect("valid grid size");
    let tile = grid_size - 1;

    assert_eq!(hierarchy.grid_size(), grid_size);
    assert_eq!(hierarchy.tile_size(), tile);
    assert_eq!(hierarchy.triangle_count(), 2 * tile * tile - 2);
    assert_eq!(
      hierarchy.parent_triangle_count(),
      hierarchy.triangle_count() - tile * tile
    );
    assert_eq!(hierarchy.triangles().len(), hierarchy.triangle_count());
  }
}

#[test]
fn test_invalid_grid_size_is_rejected() {
  for grid_size in [0, 1, 2, 4, 16, 256, 513 + 1] {
    assert_eq!(
      RtinHierarchy::new(grid_size).unwrap_err(),
      RtinError::InvalidGridSize { grid_size }
    );
  }
}

/// The smallest grid: two roots, each split once into two leaves.
#[test]
fn test_corner_table_for_grid_3() {
  let hierarchy = RtinHierarchy::new(3).unwrap();

  assert_eq!(
    hierarchy.triangles(),
    &[
      tri(2, 2, 0, 0),
      tri(0, 0, 2, 2),
      tri(0, 0, 0, 2),
      tri(2, 2, 2, 0),
      tri(0, 2, 2, 2),
      tri(2, 0, 0, 0),
    ]
  );
  assert_eq!(hierarchy.parent_triangle_count(), 2);
  assert!(hierarchy.is_parent(1));
  assert!(!hierarchy.is_parent(2));
}

#[test]
fn test_corner_table_for_grid_5() {
  let hierarchy = RtinHierarchy::new(5).unwrap();

  assert_eq!(hierarchy.triangle_count(), 30);
  assert_eq!(hierarchy.parent_triangle_count(), 14);
  assert_eq!(
    &hierarchy.triangles()[..6],
    &[
      tri(4, 4, 0, 0),
      tri(0, 0, 4, 4),
      tri(0, 0, 0, 4),
      tri(4, 4, 4, 0),
      tri(0, 4, 4, 4),
      tri(4, 0, 0, 0),
    ]
  );
  assert_eq!(hierarchy.triangle(28), tri(2, 4, 2, 2));
  assert_eq!(hierarchy.triangle(29), tri(2, 0, 2, 2));
}

/// Every table entry is distinct and both children of a parent appear at a
/// larger index, so a descending walk always sees children first.
#[test]
fn test_children_follow_parents() {
  for grid_size in [3, 5, 9, 17, 33] {
    let hierarchy = RtinHierarchy::new(grid_size).unwrap();
    let positions: HashMap<RtinTriangle, usize> = hierarchy
      .triangles()
      .iter()
      .enumerate()
      .map(|(i, t)| (*t, i))
      .collect();
    assert_eq!(positions.len(), hierarchy.triangle_count());

    for i in 0..hierarchy.parent_triangle_count() {
      let parent = hierarchy.triangle(i);
      let left = positions[&parent.left_child()];
      let right = positions[&parent.right_child()];
      assert!(left > i, "grid {}: left child of {} at {}", grid_size, i, left);
      assert!(right > i, "grid {}: right child of {} at {}", grid_size, i, right);
    }
  }
}

/// Every midpoint in the table is an exact grid point: the hypotenuse spans
/// an even number of cells on each axis.
#[test]
fn test_midpoints_are_exact() {
  let hierarchy = RtinHierarchy::new(33).unwrap();
  for t in hierarchy.triangles() {
    assert_eq!((t.a.x + t.b.x) % 2, 0, "{:?}", t);
    assert_eq!((t.a.y + t.b.y) % 2, 0, "{:?}", t);
  }
}

// =========================================================================
// Levels
// =========================================================================

#[test]
fn test_level_ranges_partition_table() {
  for grid_size in [3, 5, 9, 65] {
    let hierarchy = RtinHierarchy::new(grid_size).unwrap();
    let tile = hierarchy.tile_size();

    let mut next = 0;
    for level in 1..=hierarchy.level_count() {
      let range = hierarchy.level_range(level);
      assert_eq!(range.start, next);
      assert_eq!(range.len(), 1 << level);
      next = range.end;
    }
    assert_eq!(next, hierarchy.triangle_count());

    let leaves = hierarchy.level_range(hierarchy.level_count());
    assert_eq!(leaves.len(), tile * tile);
    assert_eq!(leaves.start, hierarchy.parent_triangle_count());
  }
}

#[test]
#[should_panic]
fn test_level_zero_panics() {
  let hierarchy = RtinHierarchy::new(5).unwrap();
  let _ = hierarchy.level_range(0);
}

#[test]
fn test_hierarchy_is_shareable() {
  fn assert_send_sync<T: Send + Sync>() {}
  assert_send_sync::<RtinHierarchy>();
}
