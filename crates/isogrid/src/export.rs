//! Wavefront OBJ export.
//!
//! Meshes are written as triangle soup: every triangle gets three fresh
//! vertices, matching the unwelded layout of [`Mesh`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use isogrid_core::{Mesh, Result};

/// Writes `mesh` as OBJ text to `writer`.
pub fn write_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    writeln!(writer, "# isogrid OBJ export")?;
    writeln!(writer, "# Triangles: {}", mesh.num_triangles())?;
    writeln!(writer)?;

    for p in mesh.positions() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    // OBJ uses 1-based indexing
    for t in 0..mesh.num_triangles() {
        let base = t * 3 + 1;
        writeln!(writer, "f {} {} {}", base, base + 1, base + 2)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `mesh` to an OBJ file at `path`, replacing any existing file.
pub fn save_obj(mesh: &Mesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut writer)?;
    log::info!(
        "wrote {} triangles to {}",
        mesh.num_triangles(),
        path.display()
    );
    Ok(())
}
