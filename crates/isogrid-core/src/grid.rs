//! Rectilinear sample grids.
//!
//! A [`RectilinearGrid`] stores point counts per axis, one coordinate array per
//! axis, and a scalar value per grid point. Points are laid out x-fastest:
//! the value for point `(i, j, k)` lives at `k * nx * ny + j * nx + i`.

use std::fmt;

use glam::Vec3;

use crate::error::{IsogridError, Result};

/// One of the three grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component index of this axis (0, 1 or 2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// An immutable 3D rectilinear grid with a scalar value at every point.
///
/// Grids are validated once on construction; after that every accessor is a
/// plain lookup. A grid with `nz == 1` is a 2D slab and has no cells.
#[derive(Debug, Clone)]
pub struct RectilinearGrid {
    dims: [usize; 3],
    coords: [Vec<f32>; 3],
    values: Vec<f32>,
}

impl RectilinearGrid {
    /// Creates a grid from per-axis coordinates and point values.
    ///
    /// The point counts are taken from the coordinate arrays.
    pub fn new(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>, values: Vec<f32>) -> Result<Self> {
        let dims = [x.len(), y.len(), z.len()];
        Self::with_dims(dims, x, y, z, values)
    }

    /// Creates a grid with explicit point counts, checking every array against them.
    pub fn with_dims(
        dims: [usize; 3],
        x: Vec<f32>,
        y: Vec<f32>,
        z: Vec<f32>,
        values: Vec<f32>,
    ) -> Result<Self> {
        for axis in Axis::ALL {
            if dims[axis.index()] == 0 {
                return Err(IsogridError::EmptyDimension { axis });
            }
        }

        let num_points = dims[0]
            .checked_mul(dims[1])
            .and_then(|n| n.checked_mul(dims[2]))
            .ok_or(IsogridError::DimensionOverflow(dims))?;

        let coords = [x, y, z];
        for axis in Axis::ALL {
            let actual = coords[axis.index()].len();
            let expected = dims[axis.index()];
            if actual != expected {
                return Err(IsogridError::CoordinateLength {
                    axis,
                    expected,
                    actual,
                });
            }
        }

        if values.len() != num_points {
            return Err(IsogridError::SizeMismatch {
                expected: num_points,
                actual: values.len(),
            });
        }

        let grid = Self {
            dims,
            coords,
            values,
        };
        if !grid.is_monotonic() {
            log::warn!(
                "grid {}x{}x{} has non-monotonic coordinates; extracted geometry may fold",
                dims[0],
                dims[1],
                dims[2]
            );
        }
        Ok(grid)
    }

    /// Creates a grid by sampling `f` at every point of the given coordinates.
    pub fn from_fn<F>(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>, mut f: F) -> Result<Self>
    where
        F: FnMut(Vec3) -> f32,
    {
        let mut values = Vec::with_capacity(x.len() * y.len() * z.len());
        for &pz in &z {
            for &py in &y {
                for &px in &x {
                    values.push(f(Vec3::new(px, py, pz)));
                }
            }
        }
        Self::new(x, y, z, values)
    }

    /// Returns the number of points along each axis.
    #[must_use]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Returns the number of cells along each axis.
    #[must_use]
    pub fn cell_dims(&self) -> [usize; 3] {
        self.dims.map(|n| n.saturating_sub(1))
    }

    /// Returns the total number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.values.len()
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.cell_dims().iter().product()
    }

    /// Flattens a logical point index.
    ///
    /// The index must satisfy `i < nx`, `j < ny`, `k < nz`.
    #[must_use]
    #[inline]
    pub fn point_index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(
            i < self.dims[0] && j < self.dims[1] && k < self.dims[2],
            "point ({i}, {j}, {k}) outside grid {:?}",
            self.dims
        );
        k * self.dims[0] * self.dims[1] + j * self.dims[0] + i
    }

    /// Flattens a logical cell index.
    #[must_use]
    pub fn cell_index(&self, x: usize, y: usize, z: usize) -> usize {
        let [cx, cy, _] = self.cell_dims();
        z * cx * cy + y * cx + x
    }

    /// Inverse of [`Self::point_index`].
    #[must_use]
    pub fn logical_point_index(&self, point_id: usize) -> [usize; 3] {
        let [nx, ny, _] = self.dims;
        [point_id % nx, (point_id / nx) % ny, point_id / (nx * ny)]
    }

    /// Inverse of [`Self::cell_index`].
    ///
    /// Returns `None` if `cell_id` is not a cell of this grid, which includes
    /// every ID on a grid with no cells.
    #[must_use]
    pub fn logical_cell_index(&self, cell_id: usize) -> Option<[usize; 3]> {
        if cell_id >= self.num_cells() {
            return None;
        }
        let [cx, cy, _] = self.cell_dims();
        Some([cell_id % cx, (cell_id / cx) % cy, cell_id / (cx * cy)])
    }

    /// Returns the scalar value at a logical point.
    #[must_use]
    #[inline]
    pub fn scalar_at(&self, i: usize, j: usize, k: usize) -> f32 {
        self.values[self.point_index(i, j, k)]
    }

    /// Returns the physical coordinate of `index` along `axis`.
    #[must_use]
    #[inline]
    pub fn coord(&self, axis: Axis, index: usize) -> f32 {
        self.coords[axis.index()][index]
    }

    /// Returns the coordinate array of an axis.
    #[must_use]
    pub fn coords(&self, axis: Axis) -> &[f32] {
        &self.coords[axis.index()]
    }

    /// Returns all scalar values in storage order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the physical position of a logical point.
    #[must_use]
    #[inline]
    pub fn position(&self, i: usize, j: usize, k: usize) -> Vec3 {
        Vec3::new(
            self.coord(Axis::X, i),
            self.coord(Axis::Y, j),
            self.coord(Axis::Z, k),
        )
    }

    /// Returns the axis-aligned bounds of the grid points.
    #[must_use]
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::ZERO;
        let mut max = Vec3::ZERO;
        for axis in Axis::ALL {
            let (lo, hi) = self.coords[axis.index()]
                .iter()
                .fold((f32::MAX, f32::MIN), |(lo, hi), &c| (lo.min(c), hi.max(c)));
            min[axis.index()] = lo;
            max[axis.index()] = hi;
        }
        (min, max)
    }

    /// Returns the range of finite scalar values, or `(0.0, 1.0)` if there are none.
    #[must_use]
    pub fn value_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &v in &self.values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min > max {
            (0.0, 1.0)
        } else {
            (min, max)
        }
    }

    /// Returns true if every coordinate array is strictly increasing.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.coords
            .iter()
            .all(|c| c.windows(2).all(|w| w[0] < w[1]))
    }
}

/// Returns `n` evenly spaced coordinates from `min` to `max` inclusive.
///
/// `n == 0` gives an empty vector.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn uniform_coords(n: usize, min: f32, max: f32) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![min];
    }
    let step = (max - min) / (n - 1) as f32;
    (0..n).map(|i| min + step * i as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> RectilinearGrid {
        // 3 x 2 x 2 points, value = linear point index
        let values = (0..12).map(|v| v as f32).collect();
        RectilinearGrid::new(
            vec![0.0, 1.0, 3.0],
            vec![-1.0, 1.0],
            vec![10.0, 20.0],
            values,
        )
        .unwrap()
    }

    #[test]
    fn test_point_index_layout() {
        let grid = sample_grid();
        assert_eq!(grid.point_index(0, 0, 0), 0);
        assert_eq!(grid.point_index(2, 0, 0), 2);
        assert_eq!(grid.point_index(0, 1, 0), 3);
        assert_eq!(grid.point_index(0, 0, 1), 6);
        assert_eq!(grid.point_index(2, 1, 1), 11);
        assert_eq!(grid.scalar_at(1, 1, 1), 10.0);
    }

    #[test]
    fn test_logical_index_roundtrip() {
        let grid = sample_grid();
        for id in 0..grid.num_points() {
            let [i, j, k] = grid.logical_point_index(id);
            assert_eq!(grid.point_index(i, j, k), id);
        }
        assert_eq!(grid.cell_dims(), [2, 1, 1]);
        assert_eq!(grid.num_cells(), 2);
        assert_eq!(grid.cell_index(1, 0, 0), 1);
        assert_eq!(grid.logical_cell_index(1), Some([1, 0, 0]));
        assert_eq!(grid.logical_cell_index(2), None);
    }

    #[test]
    fn test_coords_and_position() {
        let grid = sample_grid();
        assert_eq!(grid.coord(Axis::X, 2), 3.0);
        assert_eq!(grid.coord(Axis::Y, 0), -1.0);
        assert_eq!(grid.coord(Axis::Z, 1), 20.0);
        assert_eq!(grid.position(2, 1, 0), Vec3::new(3.0, 1.0, 10.0));
        assert_eq!(
            grid.bounds(),
            (Vec3::new(0.0, -1.0, 10.0), Vec3::new(3.0, 1.0, 20.0))
        );
        assert_eq!(grid.value_range(), (0.0, 11.0));
        assert!(grid.is_monotonic());
    }

    #[test]
    fn test_rejects_empty_dimension() {
        let err = RectilinearGrid::new(vec![0.0], vec![], vec![0.0], vec![]).unwrap_err();
        assert!(matches!(
            err,
            IsogridError::EmptyDimension { axis: Axis::Y }
        ));
    }

    #[test]
    fn test_rejects_value_length_mismatch() {
        let err = RectilinearGrid::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0; 7])
            .unwrap_err();
        assert!(matches!(
            err,
            IsogridError::SizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_rejects_coordinate_length_mismatch() {
        let err = RectilinearGrid::with_dims(
            [2, 2, 2],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0],
            vec![0.0; 8],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IsogridError::CoordinateLength {
                axis: Axis::Z,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_rejects_overflowing_dims() {
        let err = RectilinearGrid::with_dims(
            [usize::MAX, 2, 1],
            vec![],
            vec![],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, IsogridError::DimensionOverflow(_)));
    }

    #[test]
    fn test_flat_grid_has_no_cells() {
        let grid = RectilinearGrid::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0], vec![0.0; 4])
            .unwrap();
        assert_eq!(grid.cell_dims(), [1, 1, 0]);
        assert_eq!(grid.num_cells(), 0);
        assert_eq!(grid.logical_cell_index(0), None);

        let line = RectilinearGrid::new(vec![0.0], vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0; 4])
            .unwrap();
        assert_eq!(line.cell_dims(), [0, 1, 1]);
        assert_eq!(line.logical_cell_index(0), None);
    }

    #[test]
    fn test_from_fn_and_uniform_coords() {
        let xs = uniform_coords(5, -1.0, 1.0);
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(uniform_coords(1, 2.0, 4.0), vec![2.0]);
        assert!(uniform_coords(0, 0.0, 1.0).is_empty());

        let grid = RectilinearGrid::from_fn(xs.clone(), xs.clone(), xs, |p| p.x + 10.0 * p.z)
            .unwrap();
        assert_eq!(grid.dims(), [5, 5, 5]);
        assert_eq!(grid.scalar_at(4, 0, 0), 1.0);
        assert_eq!(grid.scalar_at(0, 3, 4), -1.0 + 10.0);
    }

    #[test]
    fn test_non_monotonic_is_accepted() {
        let grid = RectilinearGrid::new(vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0; 8])
            .unwrap();
        assert!(!grid.is_monotonic());
        assert_eq!(grid.bounds().0, Vec3::ZERO);
    }
}
