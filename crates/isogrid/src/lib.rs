//! isogrid: marching cubes isosurface extraction over rectilinear grids.
//!
//! Build a [`RectilinearGrid`] from per-axis coordinates and point values,
//! pick an isovalue, and extract a [`Mesh`] of independent triangles ready to
//! hand to a renderer.
//!
//! # Quick Start
//!
//! ```no_run
//! use isogrid::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let coords = uniform_coords(32, -1.0, 1.0);
//!     let grid = RectilinearGrid::from_fn(coords.clone(), coords.clone(), coords, |p| {
//!         p.length()
//!     })?;
//!
//!     let mesh = extract_isosurface(&grid, 0.5)?;
//!     save_obj(&mesh, "sphere.obj")?;
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! Every cell of the grid is visited once. Its eight corner values are
//! compared against the isovalue to form an 8-bit case code, the case table
//! names the edges the surface crosses, and each crossing is placed by linear
//! interpolation along its edge. Triangles are not welded: a crossing shared
//! by neighbouring cells is emitted once per triangle.

pub mod config;
pub mod export;

// Re-export core types
pub use isogrid_core::{
    case_table, classify, emit, extract, grid, interpolate, mesh, options,
    error::{IsogridError, Result},
    extract_isosurface, extract_with_options, uniform_coords, Axis, ExtractOptions,
    ExtractionStats, Extractor, IndexedMesh, Mesh, RectilinearGrid, SweepState, Triangle, Vec3,
    DEFAULT_ISOVALUE,
};

pub use config::{load_options, options_from_str, save_options};
pub use export::{save_obj, write_obj};

/// Installs an `env_logger` logger driven by `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
