use super::*;

#[test]
fn test_decode_sea_level() {
  // 100000 / 10 - 10000
  assert_eq!(decode(1, 134, 160), 0.0);
}

#[test]
fn test_decode_extremes() {
  assert_eq!(decode(0, 0, 0), -10000.0);
  let max = decode(255, 255, 255);
  assert!((max - (16_777_215.0 / 10.0 - 10000.0)).abs() < 1e-9);
}

#[test]
fn test_decode_channel_weights() {
  let base = decode(0, 0, 0);
  assert!((decode(0, 0, 1) - base - 0.1).abs() < 1e-9);
  assert!((decode(0, 1, 0) - base - 25.6).abs() < 1e-9);
  assert!((decode(1, 0, 0) - base - 6553.6).abs() < 1e-9);
}

#[test]
fn test_decode_pixels() {
  let bytes = [1, 134, 160, 0, 0, 0, 9];
  let heights: Vec<f64> = decode_pixels(&bytes).collect();
  assert_eq!(heights, vec![0.0, -10000.0]);
}
