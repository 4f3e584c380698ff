//! Linear interpolation of isovalue crossings along cell edges.
//!
//! The crossing point on an edge from corner value `f0` at `p0` to `f1` at `p1`
//! sits at fraction `t = (iso - f0) / (f1 - f0)` along the edge. Two rules keep
//! this total over every input the case table can select:
//!
//! - equal endpoint values give `t = 0`, so the point is the edge's low corner;
//! - otherwise `t` is clamped to `[0, 1]` so rounding never leaves the edge.
//!
//! NaN values are not masked and propagate into the returned coordinate.

use glam::Vec3;

use crate::case_table::{CORNER_OFFSETS, EDGES};
use crate::grid::RectilinearGrid;

/// Returns the fraction along an edge at which the field reaches `isovalue`.
#[must_use]
#[inline]
#[allow(clippy::float_cmp)]
pub fn crossing_fraction(f0: f32, f1: f32, isovalue: f32) -> f32 {
    if f1 == f0 {
        return 0.0;
    }
    ((isovalue - f0) / (f1 - f0)).clamp(0.0, 1.0)
}

/// Blends two coordinates so that `t = 0` and `t = 1` reproduce the endpoints exactly.
#[must_use]
#[inline]
pub fn lerp(p0: f32, p1: f32, t: f32) -> f32 {
    p0 * (1.0 - t) + p1 * t
}

/// Computes where the isosurface crosses edge `edge_id` of the cell based at `base`.
///
/// `values` are the cell's corner values in corner order. Only the coordinate
/// along the edge's axis is interpolated; the other two come from the edge's
/// fixed corners.
#[must_use]
pub fn interpolate_edge(
    grid: &RectilinearGrid,
    base: [usize; 3],
    edge_id: usize,
    values: &[f32; 8],
    isovalue: f32,
) -> Vec3 {
    let edge = EDGES[edge_id];
    let [dx, dy, dz] = CORNER_OFFSETS[edge.from];
    let mut point = grid.position(base[0] + dx, base[1] + dy, base[2] + dz);

    let axis = edge.axis.index();
    let p0 = grid.coord(edge.axis, base[axis]);
    let p1 = grid.coord(edge.axis, base[axis] + 1);
    let t = crossing_fraction(values[edge.from], values[edge.to], isovalue);
    point[axis] = lerp(p0, p1, t);
    point
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stretched_cell() -> RectilinearGrid {
        RectilinearGrid::new(
            vec![0.1, 0.3],
            vec![-2.0, 5.0],
            vec![1.0, 1.7],
            vec![0.0; 8],
        )
        .unwrap()
    }

    #[test]
    fn test_midpoint_crossing() {
        assert_eq!(crossing_fraction(0.0, 10.0, 5.0), 0.5);
        assert_eq!(crossing_fraction(10.0, 0.0, 2.5), 0.75);
    }

    #[test]
    fn test_equal_values_use_low_corner() {
        assert_eq!(crossing_fraction(3.2, 3.2, 3.2), 0.0);
        assert_eq!(crossing_fraction(1.0, 1.0, 7.0), 0.0);
    }

    #[test]
    fn test_fraction_is_clamped() {
        assert_eq!(crossing_fraction(0.0, 1.0, 2.0), 1.0);
        assert_eq!(crossing_fraction(0.0, 1.0, -2.0), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(crossing_fraction(f32::NAN, 1.0, 0.5).is_nan());
        let grid = stretched_cell();
        let values = [f32::NAN, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let p = interpolate_edge(&grid, [0, 0, 0], 0, &values, 0.5);
        assert!(p.x.is_nan());
        assert_eq!(p.y, -2.0);
        assert_eq!(p.z, 1.0);
    }

    #[test]
    fn test_edge_axes_and_fixed_coordinates() {
        let grid = stretched_cell();
        // Low corners at 0, high corners at 1: every edge crosses at its midpoint.
        let values = CORNER_OFFSETS.map(|[dx, dy, dz]| (dx + dy + dz) as f32);
        let iso = 0.5;

        // Edge 0: corners 0-1 along x at y0, z0.
        let values_x = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0];
        let p = interpolate_edge(&grid, [0, 0, 0], 0, &values_x, iso);
        assert!((p.x - 0.2).abs() < 1e-6);
        assert_eq!((p.y, p.z), (-2.0, 1.0));

        // Edge 5: corners 5-7 along z at x1, y1.
        let p = interpolate_edge(&grid, [0, 0, 0], 5, &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0], iso);
        assert_eq!((p.x, p.y), (0.3, 5.0));
        assert!((p.z - 1.35).abs() < 1e-6);

        // Edge 10: corners 2-6 along y at x0, z1.
        let p = interpolate_edge(&grid, [0, 0, 0], 10, &values, 1.5);
        assert_eq!((p.x, p.z), (0.1, 1.7));
        assert!((p.y - 1.5).abs() < 1e-5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// A corner that sits exactly on the isovalue is returned unchanged.
        #[test]
        fn boundary_values_are_exact(
            f_other in -100.0f32..100.0,
            iso in -100.0f32..100.0,
            p0 in -50.0f32..50.0,
            len in 0.01f32..50.0,
        ) {
            prop_assume!(f_other != iso);
            let p1 = p0 + len;
            prop_assert_eq!(lerp(p0, p1, crossing_fraction(iso, f_other, iso)), p0);
            prop_assert_eq!(lerp(p0, p1, crossing_fraction(f_other, iso, iso)), p1);
        }

        /// Crossings of a sign-changing edge stay on the edge.
        #[test]
        fn crossing_stays_on_edge(
            f0 in -100.0f32..100.0,
            f1 in -100.0f32..100.0,
            iso in -100.0f32..100.0,
        ) {
            let t = crossing_fraction(f0, f1, iso);
            prop_assert!((0.0..=1.0).contains(&t));
            let x = lerp(2.0, 3.0, t);
            prop_assert!((2.0..=3.0).contains(&x));
        }
    }
}
