//! Error types for hierarchy and error field construction.

use thiserror::Error;

/// Input validation failures. Both are detected eagerly, before any
/// allocation proportional to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RtinError {
  /// `grid_size - 1` is not a power of two, or the grid is smaller than 3.
  #[error("Invalid grid size: {grid_size} (expected 2^k + 1 with k >= 1)")]
  InvalidGridSize { grid_size: usize },

  /// Heightmap length does not match the grid.
  #[error("Invalid heightmap length: expected {expected}, got {actual}")]
  InvalidHeightmapLength { expected: usize, actual: usize },
}

/// Result type for RTIN operations.
pub type RtinResult<T> = std::result::Result<T, RtinError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    let err = RtinError::InvalidGridSize { grid_size: 256 };
    assert_eq!(
      format!("{err}"),
      "Invalid grid size: 256 (expected 2^k + 1 with k >= 1)"
    );

    let err = RtinError::InvalidHeightmapLength {
      expected: 25,
      actual: 24,
    };
    let message = format!("{err}");
    assert!(message.contains("25"));
    assert!(message.contains("24"));
  }
}
