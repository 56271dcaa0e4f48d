//! rtin_mesh - Error-bounded terrain meshing with RTIN
//!
//! Converts a square heightmap into a simplified triangle mesh using a
//! Right-Triangulated Irregular Network. The work is split in three stages:
//!
//! 1. [`RtinHierarchy`] - the grid-size-dependent triangle table, built once
//!    and shared across every heightmap of that size.
//! 2. [`ErrorField`] - per-cell approximation error for one heightmap, built
//!    in one bottom-up pass (or level by level with rayon).
//! 3. Extraction - the coarsest mesh whose error stays within a threshold,
//!    for any number of thresholds against the same field.
//!
//! # Features
//!
//! - **Reusable hierarchy**: immutable, `Send + Sync`, no per-heightmap state
//! - **Caller-owned scratch**: [`MeshScratch`] lets repeated extraction skip
//!   the per-call allocation
//! - **Batch extraction**: [`extract_batch`] runs several thresholds in
//!   parallel
//! - **Terrain-RGB helpers**: decoding and border backfill for raster tiles
//! - **`tracing`** (optional feature): spans around the heavy stages
//!
//! # Example
//!
//! ```
//! use rtin_mesh::{Heightmap, RtinHierarchy};
//!
//! let tile: Vec<f64> = (0..16 * 16).map(|i| (i % 7) as f64).collect();
//! let heightmap = Heightmap::from_tile(16, &tile)?;
//!
//! let hierarchy = RtinHierarchy::new(heightmap.grid_size())?;
//! let field = hierarchy.error_field(heightmap.heights())?;
//! let mesh = field.extract_mesh(2.0);
//!
//! println!("{} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count());
//! # Ok::<(), rtin_mesh::RtinError>(())
//! ```

pub mod error;
pub mod grid;
pub mod types;

pub use error::{RtinError, RtinResult};
pub use grid::{coord_to_index, index_to_coord, GridPoint, MAX_TILE_SIZE, MIN_GRID_SIZE};
pub use types::TerrainMesh;

// Triangle table
pub mod hierarchy;
pub use hierarchy::{RtinHierarchy, RtinTriangle};

// Error propagation
pub mod error_field;
pub use error_field::ErrorField;

// Extraction
pub mod mesh;
pub use mesh::MeshScratch;

pub mod batch;
pub use batch::{extract_batch, extract_timed, MeshResult};

// Raster input
pub mod heightmap;
pub use heightmap::Heightmap;
