//! The extraction sweep.
//!
//! An [`Extractor`] walks every cell of a grid once, classifying it, emitting
//! its triangles, and collecting them into a [`Mesh`]. The sweep moves through
//! three states:
//!
//! - [`SweepState::Idle`]: options validated, mesh empty;
//! - [`SweepState::Sweeping`]: some z slabs of cells processed;
//! - [`SweepState::Done`]: every cell visited, mesh ready to hand off.
//!
//! Sweeps are driven slab by slab with [`Extractor::step`] or all at once with
//! [`Extractor::sweep`]. Dropping an extractor part way through discards its
//! partial mesh.

use crate::classify::{case_code, corner_values};
use crate::emit::emit_cell;
use crate::error::Result;
use crate::grid::RectilinearGrid;
use crate::mesh::Mesh;
use crate::options::ExtractOptions;

/// Progress of an [`Extractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    /// No cells processed yet.
    Idle,
    /// Some, but not all, slabs processed.
    Sweeping,
    /// Every cell in range processed.
    Done,
}

/// Counters collected during a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Cells classified.
    pub cells_visited: usize,
    /// Cells that emitted at least one triangle.
    pub active_cells: usize,
    /// Triangles emitted.
    pub triangles: usize,
}

/// Marching cubes sweep over one immutable grid.
pub struct Extractor<'a> {
    grid: &'a RectilinearGrid,
    isovalue: f32,
    cell_range: [usize; 3],
    state: SweepState,
    next_slab: usize,
    mesh: Mesh,
    stats: ExtractionStats,
}

impl<'a> Extractor<'a> {
    /// Prepares a sweep of `grid`.
    ///
    /// Fails if the options are invalid; nothing is swept in that case.
    pub fn new(grid: &'a RectilinearGrid, options: &ExtractOptions) -> Result<Self> {
        options.validate()?;

        let cell_dims = grid.cell_dims();
        let cell_range = match options.cell_limit {
            Some(limit) => {
                if limit.iter().zip(&cell_dims).any(|(l, c)| l > c) {
                    log::warn!("cell limit {limit:?} exceeds grid cells {cell_dims:?}; clamping");
                }
                [
                    limit[0].min(cell_dims[0]),
                    limit[1].min(cell_dims[1]),
                    limit[2].min(cell_dims[2]),
                ]
            }
            None => cell_dims,
        };

        Ok(Self {
            grid,
            isovalue: options.isovalue,
            cell_range,
            state: SweepState::Idle,
            next_slab: 0,
            mesh: Mesh::new(),
            stats: ExtractionStats::default(),
        })
    }

    /// Returns the current sweep state.
    #[must_use]
    pub fn state(&self) -> SweepState {
        self.state
    }

    /// Returns the isovalue being extracted.
    #[must_use]
    pub fn isovalue(&self) -> f32 {
        self.isovalue
    }

    /// Returns the number of cells swept along each axis.
    #[must_use]
    pub fn cell_range(&self) -> [usize; 3] {
        self.cell_range
    }

    /// Returns the counters gathered so far.
    #[must_use]
    pub fn stats(&self) -> ExtractionStats {
        self.stats
    }

    /// Processes the next z slab of cells and returns the resulting state.
    pub fn step(&mut self) -> SweepState {
        if self.state == SweepState::Done {
            return self.state;
        }
        if self.state == SweepState::Idle {
            let [nx, ny, nz] = self.grid.dims();
            log::debug!(
                "sweeping {:?} cells of {nx}x{ny}x{nz} grid at isovalue {}",
                self.cell_range,
                self.isovalue
            );
        }

        let [cx, cy, cz] = self.cell_range;
        if self.next_slab < cz {
            let z = self.next_slab;
            for y in 0..cy {
                for x in 0..cx {
                    self.process_cell([x, y, z]);
                }
            }
            self.next_slab += 1;
        }

        self.state = if self.next_slab >= cz {
            log::debug!(
                "sweep finished: {} cells, {} active, {} triangles",
                self.stats.cells_visited,
                self.stats.active_cells,
                self.stats.triangles
            );
            SweepState::Done
        } else {
            SweepState::Sweeping
        };
        self.state
    }

    /// Runs the sweep to completion.
    pub fn sweep(&mut self) -> ExtractionStats {
        while self.step() != SweepState::Done {}
        self.stats
    }

    /// Finishes the sweep if needed and hands off the mesh.
    #[must_use]
    pub fn into_mesh(mut self) -> Mesh {
        self.sweep();
        log::info!(
            "extracted {} triangles at isovalue {}",
            self.mesh.num_triangles(),
            self.isovalue
        );
        self.mesh
    }

    fn process_cell(&mut self, base: [usize; 3]) {
        let values = corner_values(self.grid, base);
        let code = case_code(&values, self.isovalue);
        self.stats.cells_visited += 1;

        // Fully below or fully above: no crossing.
        if code == 0 || code == u8::MAX {
            return;
        }

        let emitted = emit_cell(self.grid, base, code, &values, self.isovalue, &mut self.mesh);
        if emitted > 0 {
            self.stats.active_cells += 1;
            self.stats.triangles += emitted;
        }
    }
}

/// Extracts the isosurface of `grid` at `isovalue` over every cell.
pub fn extract_isosurface(grid: &RectilinearGrid, isovalue: f32) -> Result<Mesh> {
    extract_with_options(grid, &ExtractOptions::new(isovalue))
}

/// Extracts the isosurface of `grid` as configured by `options`.
pub fn extract_with_options(grid: &RectilinearGrid, options: &ExtractOptions) -> Result<Mesh> {
    Ok(Extractor::new(grid, options)?.into_mesh())
}
