use super::*;

#[test]
fn test_valid_grid_sizes() {
  for k in 1..=10 {
    let grid_size = (1usize << k) + 1;
    assert!(is_valid_grid_size(grid_size), "{} should be valid", grid_size);
    assert_eq!(validate_grid_size(grid_size).unwrap(), grid_size - 1);
  }
}

#[test]
fn test_invalid_grid_sizes() {
  for grid_size in [0, 1, 2, 4, 6, 7, 10, 256, 258, 1000] {
    assert!(!is_valid_grid_size(grid_size), "{} should be invalid", grid_size);
    assert!(matches!(
      validate_grid_size(grid_size),
      Err(RtinError::InvalidGridSize { grid_size: g }) if g == grid_size
    ));
  }
}

#[test]
fn test_grid_size_upper_bound() {
  assert!(is_valid_grid_size(MAX_TILE_SIZE + 1));
  assert!(!is_valid_grid_size(MAX_TILE_SIZE * 2 + 1));
}

#[test]
fn test_coord_to_index_roundtrip() {
  let grid_size = 17;
  for y in 0..grid_size {
    for x in 0..grid_size {
      let idx = coord_to_index(x, y, grid_size);
      assert_eq!(index_to_coord(idx, grid_size), (x, y));
    }
  }
}

#[test]
fn test_point_index_is_row_major() {
  assert_eq!(GridPoint::new(0, 0).index(5), 0);
  assert_eq!(GridPoint::new(4, 0).index(5), 4);
  assert_eq!(GridPoint::new(0, 1).index(5), 5);
  assert_eq!(GridPoint::new(2, 2).index(5), 12);
  assert_eq!(GridPoint::new(4, 4).index(5), 24);
}

#[test]
fn test_midpoint() {
  let a = GridPoint::new(0, 0);
  let b = GridPoint::new(4, 4);
  assert_eq!(a.midpoint(b), GridPoint::new(2, 2));
  assert_eq!(b.midpoint(a), GridPoint::new(2, 2));

  // Odd spans round down (unit-cell diagonals)
  assert_eq!(GridPoint::new(1, 1).midpoint(GridPoint::new(0, 0)), GridPoint::new(0, 0));
}

#[test]
fn test_manhattan() {
  let a = GridPoint::new(3, 1);
  assert_eq!(a.manhattan(a), 0);
  assert_eq!(a.manhattan(GridPoint::new(0, 0)), 4);
  assert_eq!(GridPoint::new(0, 0).manhattan(a), 4);
}
