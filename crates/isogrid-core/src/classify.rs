//! Corner classification for a single cell.

use crate::case_table::CORNER_OFFSETS;
use crate::grid::RectilinearGrid;

/// Reads the scalar values at the eight corners of the cell based at `base`.
///
/// `base` must satisfy `base[axis] + 1 < dims[axis]` on every axis.
#[must_use]
#[inline]
pub fn corner_values(grid: &RectilinearGrid, base: [usize; 3]) -> [f32; 8] {
    CORNER_OFFSETS.map(|[dx, dy, dz]| grid.scalar_at(base[0] + dx, base[1] + dy, base[2] + dz))
}

/// Builds the 8-bit case code: bit `b` is set when `values[b] <= isovalue`.
///
/// NaN compares false and therefore always leaves its bit clear.
#[must_use]
#[inline]
pub fn case_code(values: &[f32; 8], isovalue: f32) -> u8 {
    values
        .iter()
        .enumerate()
        .fold(0u8, |code, (bit, &v)| code | (u8::from(v <= isovalue) << bit))
}

/// Computes the case code of the cell based at `base`.
#[must_use]
pub fn classify(grid: &RectilinearGrid, base: [usize; 3], isovalue: f32) -> u8 {
    case_code(&corner_values(grid, base), isovalue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cell(values: [f32; 8]) -> RectilinearGrid {
        // Storage order is x-fastest, then y, then z; reorder from corner numbering.
        let mut field = vec![0.0; 8];
        for (corner, [dx, dy, dz]) in CORNER_OFFSETS.iter().enumerate() {
            field[dz * 4 + dy * 2 + dx] = values[corner];
        }
        RectilinearGrid::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0], field).unwrap()
    }

    #[test]
    fn test_corner_values_follow_corner_numbering() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let grid = unit_cell(values);
        assert_eq!(corner_values(&grid, [0, 0, 0]), values);
        // Corner 2 is +z, corner 4 is +y.
        assert_eq!(grid.scalar_at(0, 0, 1), 2.0);
        assert_eq!(grid.scalar_at(0, 1, 0), 4.0);
    }

    #[test]
    fn test_code_bits() {
        let grid = unit_cell([0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0]);
        assert_eq!(classify(&grid, [0, 0, 0], 5.0), 0x0F);
        assert_eq!(classify(&grid, [0, 0, 0], -1.0), 0x00);
        assert_eq!(classify(&grid, [0, 0, 0], 10.0), 0xFF);
    }

    #[test]
    fn test_ties_count_as_below() {
        let values = [3.2, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 3.2];
        assert_eq!(case_code(&values, 3.2), 0b1000_0001);
    }

    #[test]
    fn test_nan_is_never_below() {
        let values = [f32::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(case_code(&values, 1.0), 0xFE);
    }

    #[test]
    fn test_interior_cell() {
        let xs = vec![0.0, 1.0, 2.0];
        let grid = RectilinearGrid::from_fn(xs.clone(), xs.clone(), xs, |p| p.x).unwrap();
        // x = 1 and x = 2 columns: corners with +x offset are above 1.5
        assert_eq!(classify(&grid, [1, 1, 1], 1.5), 0b0101_0101);
        assert_eq!(classify(&grid, [0, 0, 0], 1.5), 0xFF);
    }
}
