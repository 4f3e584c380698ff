//! Triangle emission for one classified cell.

use glam::Vec3;

use crate::case_table::triangle_edges;
use crate::grid::RectilinearGrid;
use crate::interpolate::interpolate_edge;
use crate::mesh::{Mesh, Triangle};

/// Crossing points of one cell, computed on first use.
///
/// Lives for a single cell only; neighbouring cells recompute shared edges.
struct EdgePoints<'a> {
    grid: &'a RectilinearGrid,
    base: [usize; 3],
    values: &'a [f32; 8],
    isovalue: f32,
    points: [Option<Vec3>; 12],
}

impl<'a> EdgePoints<'a> {
    fn new(grid: &'a RectilinearGrid, base: [usize; 3], values: &'a [f32; 8], isovalue: f32) -> Self {
        Self {
            grid,
            base,
            values,
            isovalue,
            points: [None; 12],
        }
    }

    fn get(&mut self, edge_id: usize) -> Vec3 {
        let (grid, base, values, isovalue) = (self.grid, self.base, self.values, self.isovalue);
        *self.points[edge_id]
            .get_or_insert_with(|| interpolate_edge(grid, base, edge_id, values, isovalue))
    }
}

/// Appends the triangles for case `code` of the cell based at `base` to `mesh`.
///
/// Only edges named by the case row are interpolated. Returns the number of
/// triangles appended.
pub fn emit_cell(
    grid: &RectilinearGrid,
    base: [usize; 3],
    code: u8,
    values: &[f32; 8],
    isovalue: f32,
    mesh: &mut Mesh,
) -> usize {
    let mut points = EdgePoints::new(grid, base, values, isovalue);
    let mut emitted = 0;
    for [e0, e1, e2] in triangle_edges(code) {
        mesh.push(Triangle::new(points.get(e0), points.get(e1), points.get(e2)));
        emitted += 1;
    }
    emitted
}
