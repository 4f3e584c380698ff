//! Core of isogrid: marching cubes over rectilinear scalar grids.
//!
//! This crate provides the pieces of the extraction pipeline, leaf first:
//! - [`RectilinearGrid`] for index conversion, coordinates and scalar lookup
//! - [`case_table`] with the 256-case triangulation and edge-endpoint map
//! - [`classify`] to build a cell's corner code
//! - [`interpolate`] to place crossings along cell edges
//! - [`emit`] to turn one classified cell into triangles
//! - [`Mesh`] to collect the unwelded triangle soup
//! - [`Extractor`] to sweep a whole grid

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Corner and edge IDs are plain indices; naming them would not read better
#![allow(clippy::many_single_char_names)]

pub mod case_table;
pub mod classify;
pub mod emit;
pub mod error;
pub mod extract;
pub mod grid;
pub mod interpolate;
pub mod mesh;
pub mod options;

pub use case_table::{Edge, CASE_TABLE, CORNER_OFFSETS, EDGES, SENTINEL};
pub use classify::{case_code, classify, corner_values};
pub use emit::emit_cell;
pub use error::{IsogridError, Result};
pub use extract::{extract_isosurface, extract_with_options, ExtractionStats, Extractor, SweepState};
pub use grid::{uniform_coords, Axis, RectilinearGrid};
pub use interpolate::{crossing_fraction, interpolate_edge};
pub use mesh::{IndexedMesh, Mesh, Triangle};
pub use options::{ExtractOptions, DEFAULT_ISOVALUE, LEGACY_CELL_LIMIT};

// Re-export glam types for convenience
pub use glam::Vec3;
