//! Mapbox Terrain-RGB elevation encoding.
//!
//! ```text
//! height = (R·65536 + G·256 + B) / 10 - 10000     (metres)
//! ```

/// Bytes per packed RGB8 pixel.
pub const CHANNELS: usize = 3;

/// Decode one pixel to metres.
#[inline]
pub fn decode(r: u8, g: u8, b: u8) -> f64 {
  let packed = ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
  packed as f64 / 10.0 - 10000.0
}

/// Decode packed RGB8 pixels. Trailing bytes that do not form a whole
/// pixel are ignored.
pub fn decode_pixels(rgb: &[u8]) -> impl Iterator<Item = f64> + '_ {
  rgb
    .chunks_exact(CHANNELS)
    .map(|px| decode(px[0], px[1], px[2]))
}

#[cfg(test)]
#[path = "terrain_rgb_test.rs"]
mod terrain_rgb_test;
