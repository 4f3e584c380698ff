//! Runs the fixed-size 49x49x49 sweep at isovalue 3.2.
//!
//! Usage: `cargo run --example legacy_sweep [options.json]`
//!
//! Without an options file the legacy defaults are used. The scalar field is
//! a sum of two radial falloffs sampled on an uneven 64^3 grid, so the
//! limit clips the sweep short of the grid's far corner.

use isogrid::*;

/// Coordinates packed densely near the origin and sparser towards `max`.
fn graded_coords(n: usize, max: f32) -> Vec<f32> {
    uniform_coords(n, 0.0, 1.0)
        .into_iter()
        .map(|t| max * t * t)
        .collect()
}

fn main() -> Result<()> {
    init_logging();

    let options = match std::env::args().nth(1) {
        Some(path) => load_options(path)?,
        None => ExtractOptions::legacy(),
    };

    let coords = graded_coords(64, 8.0);
    let centers = [Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.5, 2.5, 2.0)];
    let grid = RectilinearGrid::from_fn(coords.clone(), coords.clone(), coords, |p| {
        centers
            .iter()
            .map(|c| 4.0 / (1.0 + p.distance_squared(*c)))
            .sum()
    })?;

    let (lo, hi) = grid.value_range();
    println!("field range {lo:.3} .. {hi:.3}, isovalue {}", options.isovalue);

    let mut extractor = Extractor::new(&grid, &options)?;
    println!("sweeping {:?} cells", extractor.cell_range());
    let stats = extractor.sweep();
    let mesh = extractor.into_mesh();
    println!(
        "{} cells visited, {} active, {} triangles",
        stats.cells_visited, stats.active_cells, stats.triangles
    );

    let indexed = mesh.to_indexed();
    println!(
        "{} vertices, {} indices ready for hand-off",
        indexed.vertices.len(),
        indexed.indices.len()
    );

    save_obj(&mesh, "legacy_sweep.obj")?;
    Ok(())
}
