#![allow(clippy::cast_precision_loss)]
//! Extracts a sphere from a distance field and writes it to an OBJ file.
//!
//! Usage: `cargo run --example sphere_isosurface [resolution] [output.obj]`
//!
//! Set `RUST_LOG=debug` to see the sweep summary.

use isogrid::*;

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let resolution = args
        .next()
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(48);
    let output = args.next().unwrap_or_else(|| "sphere.obj".to_string());

    let radius = 0.75;
    let coords = uniform_coords(resolution, -1.0, 1.0);
    let grid = RectilinearGrid::from_fn(coords.clone(), coords.clone(), coords, |p| {
        p.length() - radius
    })?;

    let mut extractor = Extractor::new(&grid, &ExtractOptions::new(0.0))?;
    let stats = extractor.sweep();
    let mesh = extractor.into_mesh();

    println!(
        "{} cells visited, {} active, {} triangles",
        stats.cells_visited, stats.active_cells, stats.triangles
    );
    let expected = 4.0 * std::f32::consts::PI * radius * radius;
    println!(
        "surface area {:.4} (analytic {:.4})",
        mesh.total_area(),
        expected
    );
    if let Some((min, max)) = mesh.bounding_box() {
        println!("bounds {min:?} .. {max:?}");
    }

    save_obj(&mesh, &output)?;
    println!("wrote {output}");
    Ok(())
}
