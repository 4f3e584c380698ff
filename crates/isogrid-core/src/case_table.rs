//! Marching cubes lookup tables.
//!
//! Corner numbering within a cell, relative to its base point `(x, y, z)`:
//!
//! | corner | offset      |
//! |--------|-------------|
//! | 0      | base        |
//! | 1      | +x          |
//! | 2      | +z          |
//! | 3      | +x +z       |
//! | 4      | +y          |
//! | 5      | +x +y       |
//! | 6      | +y +z       |
//! | 7      | +x +y +z    |
//!
//! [`CORNER_OFFSETS`], [`EDGES`] and [`CASE_TABLE`] all use this numbering and
//! must change together.

#![allow(clippy::cast_sign_loss)]

use crate::grid::Axis;

/// Marks the end of a row in [`CASE_TABLE`].
pub const SENTINEL: i8 = -1;

/// Maximum number of triangles any case emits.
pub const MAX_TRIANGLES_PER_CELL: usize = 5;

/// Logical `[x, y, z]` offset of each corner from the cell base.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 0, 1],
    [1, 0, 1],
    [0, 1, 0],
    [1, 1, 0],
    [0, 1, 1],
    [1, 1, 1],
];

/// The two corners joined by a cell edge, and the axis the edge runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Corner at the low end of the edge.
    pub from: usize,
    /// Corner at the high end of the edge.
    pub to: usize,
    /// Axis along which the two corners differ.
    pub axis: Axis,
}

const fn edge(from: usize, to: usize, axis: Axis) -> Edge {
    Edge { from, to, axis }
}

/// Edge-endpoint map, indexed by edge ID.
pub const EDGES: [Edge; 12] = [
    edge(0, 1, Axis::X),
    edge(1, 3, Axis::Z),
    edge(2, 3, Axis::X),
    edge(0, 2, Axis::Z),
    edge(4, 5, Axis::X),
    edge(5, 7, Axis::Z),
    edge(6, 7, Axis::X),
    edge(4, 6, Axis::Z),
    edge(0, 4, Axis::Y),
    edge(1, 5, Axis::Y),
    edge(2, 6, Axis::Y),
    edge(3, 7, Axis::Y),
];

/// Returns the edges of `code`'s table row, three per triangle.
#[must_use]
pub fn triangle_edges(code: u8) -> impl Iterator<Item = [usize; 3]> {
    CASE_TABLE[usize::from(code)]
        .chunks_exact(3)
        .take_while(|tri| tri[0] != SENTINEL)
        .map(|tri| [tri[0], tri[1], tri[2]].map(|e| e as usize))
}

/// Returns how many triangles `code` emits.
#[must_use]
pub fn triangle_count(code: u8) -> usize {
    CASE_TABLE[usize::from(code)]
        .iter()
        .take_while(|&&e| e != SENTINEL)
        .count()
        / 3
}

/// Returns a 12-bit mask of the edges whose corners fall on opposite sides of the isovalue.
#[must_use]
pub fn crossing_edges(code: u8) -> u16 {
    EDGES
        .iter()
        .enumerate()
        .filter(|(_, e)| (code >> e.from) & 1 != (code >> e.to) & 1)
        .fold(0, |mask, (id, _)| mask | (1 << id))
}

/// Triangulation of every corner code.
///
/// Row `code` lists edge IDs in groups of three, one group per triangle,
/// followed by [`SENTINEL`] padding. Bit `b` of `code` is set when corner `b`
/// is at or below the isovalue.
///
/// A face shared by two cells is always split the same way from both sides,
/// so the extracted surface has no cracks between cells.
#[rustfmt::skip]
pub static CASE_TABLE: [[i8; 16]; 256] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 0
    [ 0,  3,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 1
    [ 9,  1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 2
    [ 8,  9,  1,  8,  1,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 3
    [ 2, 10,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 4
    [ 0,  2, 10,  0, 10,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 5
    [ 1,  0,  9, 10,  3,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 6
    [ 2,  9,  1,  2, 10,  9, 10,  8,  9, -1, -1, -1, -1, -1, -1, -1], // 7
    [ 1, 11,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 8
    [ 0,  3,  8, 11,  2,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 9
    [ 2,  0,  9,  2,  9, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 10
    [ 3, 11,  2,  3,  8, 11,  8,  9, 11, -1, -1, -1, -1, -1, -1, -1], // 11
    [ 3,  1, 11,  3, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 12
    [ 1,  8,  0,  1, 11,  8, 11, 10,  8, -1, -1, -1, -1, -1, -1, -1], // 13
    [ 0, 10,  3,  0,  9, 10,  9, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 14
    [ 8, 11, 10,  8,  9, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 15
    [ 4,  8,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 16
    [ 4,  0,  3,  4,  3,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 17
    [ 4,  8,  7,  1,  0,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 18
    [ 9,  7,  4,  9,  1,  7,  1,  3,  7, -1, -1, -1, -1, -1, -1, -1], // 19
    [ 8,  7,  4,  2, 10,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 20
    [ 7,  2, 10,  7,  4,  2,  4,  0,  2, -1, -1, -1, -1, -1, -1, -1], // 21
    [ 0,  9,  1,  3,  2, 10,  4,  8,  7, -1, -1, -1, -1, -1, -1, -1], // 22
    [10,  7,  4, 10,  4,  2,  2,  4,  9,  2,  9,  1, -1, -1, -1, -1], // 23
    [ 4,  8,  7,  2,  1, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 24
    [ 4,  0,  3,  4,  3,  7, 11,  2,  1, -1, -1, -1, -1, -1, -1, -1], // 25
    [ 2,  0,  9,  2,  9, 11,  7,  4,  8, -1, -1, -1, -1, -1, -1, -1], // 26
    [ 3, 11,  2,  3,  4, 11,  4,  9, 11,  7,  4,  3, -1, -1, -1, -1], // 27
    [11, 10,  3, 11,  3,  1,  4,  8,  7, -1, -1, -1, -1, -1, -1, -1], // 28
    [11, 10,  1, 10,  7,  4,  1, 10,  4,  1,  4,  0, -1, -1, -1, -1], // 29
    [ 7,  4,  8,  9, 11, 10,  9, 10,  0,  0, 10,  3, -1, -1, -1, -1], // 30
    [ 7,  4,  9,  7,  9, 10, 10,  9, 11, -1, -1, -1, -1, -1, -1, -1], // 31
    [ 5,  9,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 32
    [ 9,  4,  5,  3,  8,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 33
    [ 0,  4,  5,  0,  5,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 34
    [ 4,  3,  8,  4,  5,  3,  5,  1,  3, -1, -1, -1, -1, -1, -1, -1], // 35
    [ 2, 10,  3,  4,  5,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 36
    [10,  8,  0, 10,  0,  2,  5,  9,  4, -1, -1, -1, -1, -1, -1, -1], // 37
    [ 5,  1,  0,  5,  0,  4, 10,  3,  2, -1, -1, -1, -1, -1, -1, -1], // 38
    [ 8,  4, 10, 10,  1,  2,  4,  1, 10,  4,  5,  1, -1, -1, -1, -1], // 39
    [ 5,  9,  4,  2,  1, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 40
    [ 0,  3,  8,  9,  4,  5,  2,  1, 11, -1, -1, -1, -1, -1, -1, -1], // 41
    [11,  4,  5, 11,  2,  4,  2,  0,  4, -1, -1, -1, -1, -1, -1, -1], // 42
    [ 8,  2,  3,  8,  4,  2,  4, 11,  2,  4,  5, 11, -1, -1, -1, -1], // 43
    [ 3,  1, 11,  3, 11, 10,  4,  5,  9, -1, -1, -1, -1, -1, -1, -1], // 44
    [ 4,  5,  9, 11, 10,  8, 11,  8,  1,  1,  8,  0, -1, -1, -1, -1], // 45
    [ 0, 10,  3,  0,  5, 10,  5, 11, 10,  4,  5,  0, -1, -1, -1, -1], // 46
    [ 4,  5, 11,  4, 11,  8,  8, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 47
    [ 7,  5,  9,  7,  9,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 48
    [ 0,  5,  9,  0,  3,  5,  3,  7,  5, -1, -1, -1, -1, -1, -1, -1], // 49
    [ 8,  1,  0,  8,  7,  1,  7,  5,  1, -1, -1, -1, -1, -1, -1, -1], // 50
    [ 3,  7,  5,  3,  5,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 51
    [ 9,  8,  7,  9,  7,  5,  2, 10,  3, -1, -1, -1, -1, -1, -1, -1], // 52
    [ 2, 10,  7,  2,  7,  9,  9,  7,  5,  0,  2,  9, -1, -1, -1, -1], // 53
    [ 2, 10,  3,  7,  5,  1,  7,  1,  8,  8,  1,  0, -1, -1, -1, -1], // 54
    [ 2, 10,  7,  2,  7,  1,  1,  7,  5, -1, -1, -1, -1, -1, -1, -1], // 55
    [ 7,  5,  9,  7,  9,  8,  2,  1, 11, -1, -1, -1, -1, -1, -1, -1], // 56
    [11,  2,  1,  3,  7,  5,  3,  5,  0,  0,  5,  9, -1, -1, -1, -1], // 57
    [ 5, 11,  7,  7,  0,  8, 11,  0,  7, 11,  2,  0, -1, -1, -1, -1], // 58
    [11,  2,  3, 11,  3,  5,  5,  3,  7, -1, -1, -1, -1, -1, -1, -1], // 59
    [ 8,  7,  5,  8,  5,  9, 10,  3,  1, 10,  1, 11, -1, -1, -1, -1], // 60
    [10,  0, 11,  5,  0,  7,  7,  0, 10,  9,  0,  5, 11,  0,  1, -1], // 61
    [ 5,  0,  7, 10,  0, 11, 11,  0,  5,  3,  0, 10,  7,  0,  8, -1], // 62
    [10,  5, 11, 10,  7,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 63
    [ 6,  7, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 64
    [ 7, 10,  6,  0,  3,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 65
    [ 6,  7, 10,  0,  9,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 66
    [ 1,  3,  8,  1,  8,  9,  6,  7, 10, -1, -1, -1, -1, -1, -1, -1], // 67
    [ 2,  6,  7,  2,  7,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 68
    [ 8,  6,  7,  8,  0,  6,  0,  2,  6, -1, -1, -1, -1, -1, -1, -1], // 69
    [ 7,  3,  2,  7,  2,  6,  9,  1,  0, -1, -1, -1, -1, -1, -1, -1], // 70
    [ 6,  7,  8,  6,  8,  1,  1,  8,  9,  2,  6,  1, -1, -1, -1, -1], // 71
    [11,  2,  1,  7, 10,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 72
    [ 2,  1, 11, 10,  6,  7,  0,  3,  8, -1, -1, -1, -1, -1, -1, -1], // 73
    [ 9, 11,  2,  9,  2,  0,  7, 10,  6, -1, -1, -1, -1, -1, -1, -1], // 74
    [ 6,  7, 10,  8,  9, 11,  8, 11,  3,  3, 11,  2, -1, -1, -1, -1], // 75
    [ 6,  1, 11,  6,  7,  1,  7,  3,  1, -1, -1, -1, -1, -1, -1, -1], // 76
    [ 7,  8,  0,  7,  0,  6,  6,  0,  1,  6,  1, 11, -1, -1, -1, -1], // 77
    [ 3,  0,  7,  7, 11,  6,  0, 11,  7,  0,  9, 11, -1, -1, -1, -1], // 78
    [ 6,  7,  8,  6,  8, 11, 11,  8,  9, -1, -1, -1, -1, -1, -1, -1], // 79
    [ 6,  4,  8,  6,  8, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 80
    [10,  0,  3, 10,  6,  0,  6,  4,  0, -1, -1, -1, -1, -1, -1, -1], // 81
    [ 6,  4,  8,  6,  8, 10,  1,  0,  9, -1, -1, -1, -1, -1, -1, -1], // 82
    [ 1,  3,  9,  3, 10,  6,  9,  3,  6,  9,  6,  4, -1, -1, -1, -1], // 83
    [ 3,  4,  8,  3,  2,  4,  2,  6,  4, -1, -1, -1, -1, -1, -1, -1], // 84
    [ 0,  6,  4,  0,  2,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 85
    [ 9,  1,  0,  2,  6,  4,  2,  4,  3,  3,  4,  8, -1, -1, -1, -1], // 86
    [ 9,  1,  2,  9,  2,  4,  4,  2,  6, -1, -1, -1, -1, -1, -1, -1], // 87
    [ 8, 10,  6,  8,  6,  4,  1, 11,  2, -1, -1, -1, -1, -1, -1, -1], // 88
    [ 1, 11,  2,  6,  4,  0,  6,  0, 10, 10,  0,  3, -1, -1, -1, -1], // 89
    [ 4,  8, 10,  4, 10,  6,  0,  9, 11,  0, 11,  2, -1, -1, -1, -1], // 90
    [ 4,  3,  6, 11,  3,  9,  9,  3,  4,  2,  3, 11,  6,  3, 10, -1], // 91
    [ 4,  8,  3,  4,  3, 11, 11,  3,  1,  6,  4, 11, -1, -1, -1, -1], // 92
    [ 1, 11,  6,  1,  6,  0,  0,  6,  4, -1, -1, -1, -1, -1, -1, -1], // 93
    [11,  3,  9,  4,  3,  6,  6,  3, 11,  8,  3,  4,  9,  3,  0, -1], // 94
    [ 4, 11,  6,  4,  9, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 95
    [ 6,  7, 10,  9,  4,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 96
    [ 4,  5,  9,  8,  0,  3,  6,  7, 10, -1, -1, -1, -1, -1, -1, -1], // 97
    [ 0,  4,  5,  0,  5,  1, 10,  6,  7, -1, -1, -1, -1, -1, -1, -1], // 98
    [10,  6,  7,  5,  1,  3,  5,  3,  4,  4,  3,  8, -1, -1, -1, -1], // 99
    [ 2,  6,  7,  2,  7,  3,  9,  4,  5, -1, -1, -1, -1, -1, -1, -1], // 100
    [ 5,  9,  4,  0,  2,  6,  0,  6,  8,  8,  6,  7, -1, -1, -1, -1], // 101
    [ 6,  7,  3,  6,  3,  2,  4,  5,  1,  4,  1,  0, -1, -1, -1, -1], // 102
    [ 1,  8,  5,  6,  8,  2,  2,  8,  1,  7,  8,  6,  5,  8,  4, -1], // 103
    [ 6,  7, 10, 11,  2,  1,  4,  5,  9, -1, -1, -1, -1, -1, -1, -1], // 104
    [ 0,  3,  8, 10,  6,  7, 11,  2,  1,  4,  5,  9, -1, -1, -1, -1], // 105
    [ 7, 10,  6,  2,  0,  4,  2,  4, 11, 11,  4,  5, -1, -1, -1, -1], // 106
    [ 6,  7, 10,  5, 11,  4,  4, 11,  2,  4,  2,  8,  8,  2,  3, -1], // 107
    [ 9,  4,  5,  7,  3,  1,  7,  1,  6,  6,  1, 11, -1, -1, -1, -1], // 108
    [ 4,  5,  9,  7,  8,  6,  6,  8,  0,  6,  0, 11, 11,  0,  1, -1], // 109
    [ 3, 11,  7,  4, 11,  0,  0, 11,  3,  5, 11,  4,  7, 11,  6, -1], // 110
    [ 6,  7, 11, 11,  7,  8, 11,  8,  4, 11,  4,  5, -1, -1, -1, -1], // 111
    [ 5, 10,  6,  5,  9, 10,  9,  8, 10, -1, -1, -1, -1, -1, -1, -1], // 112
    [ 3, 10,  6,  3,  6,  0,  0,  6,  5,  0,  5,  9, -1, -1, -1, -1], // 113
    [10,  6,  5, 10,  5,  0,  0,  5,  1,  8, 10,  0, -1, -1, -1, -1], // 114
    [10,  6,  5, 10,  5,  3,  3,  5,  1, -1, -1, -1, -1, -1, -1, -1], // 115
    [ 9,  8,  5,  8,  3,  2,  5,  8,  2,  5,  2,  6, -1, -1, -1, -1], // 116
    [ 5,  9,  0,  5,  0,  6,  6,  0,  2, -1, -1, -1, -1, -1, -1, -1], // 117
    [ 6,  8,  2,  1,  8,  5,  5,  8,  6,  0,  8,  1,  2,  8,  3, -1], // 118
    [ 6,  1,  2,  6,  5,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 119
    [ 2,  1, 11,  9,  8, 10,  9, 10,  5,  5, 10,  6, -1, -1, -1, -1], // 120
    [ 2,  1, 11,  3, 10,  0,  0, 10,  6,  0,  6,  9,  9,  6,  5, -1], // 121
    [ 0,  5,  2, 10,  5,  8,  8,  5,  0,  6,  5, 10,  2,  5, 11, -1], // 122
    [10,  6,  3,  3,  6,  5,  3,  5, 11,  3, 11,  2, -1, -1, -1, -1], // 123
    [ 8,  6,  9,  1,  6,  3,  3,  6,  8, 11,  6,  1,  9,  6,  5, -1], // 124
    [ 1, 11,  0,  0, 11,  6,  0,  6,  5,  0,  5,  9, -1, -1, -1, -1], // 125
    [ 0,  8,  3,  6,  5, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 126
    [11,  6,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 127
    [11,  5,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 128
    [ 0,  3,  8,  6, 11,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 129
    [ 9,  1,  0,  6, 11,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 130
    [ 8,  9,  1,  8,  1,  3,  6, 11,  5, -1, -1, -1, -1, -1, -1, -1], // 131
    [ 2, 10,  3,  5,  6, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 132
    [ 0,  2, 10,  0, 10,  8,  5,  6, 11, -1, -1, -1, -1, -1, -1, -1], // 133
    [ 2, 10,  3,  1,  0,  9,  6, 11,  5, -1, -1, -1, -1, -1, -1, -1], // 134
    [ 5,  6, 11, 10,  8,  9, 10,  9,  2,  2,  9,  1, -1, -1, -1, -1], // 135
    [ 6,  2,  1,  6,  1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 136
    [ 6,  2,  1,  6,  1,  5,  8,  0,  3, -1, -1, -1, -1, -1, -1, -1], // 137
    [ 5,  0,  9,  5,  6,  0,  6,  2,  0, -1, -1, -1, -1, -1, -1, -1], // 138
    [ 9,  5,  8,  8,  2,  3,  5,  2,  8,  5,  6,  2, -1, -1, -1, -1], // 139
    [10,  5,  6, 10,  3,  5,  3,  1,  5, -1, -1, -1, -1, -1, -1, -1], // 140
    [10,  5,  6, 10,  0,  5,  0,  1,  5,  8,  0, 10, -1, -1, -1, -1], // 141
    [ 3,  6, 10,  3,  0,  6,  0,  5,  6,  0,  9,  5, -1, -1, -1, -1], // 142
    [ 5,  6, 10,  5, 10,  9,  9, 10,  8, -1, -1, -1, -1, -1, -1, -1], // 143
    [ 5,  6, 11,  8,  7,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 144
    [ 3,  7,  4,  3,  4,  0, 11,  5,  6, -1, -1, -1, -1, -1, -1, -1], // 145
    [ 4,  8,  7,  5,  6, 11,  0,  9,  1, -1, -1, -1, -1, -1, -1, -1], // 146
    [ 6, 11,  5,  1,  3,  7,  1,  7,  9,  9,  7,  4, -1, -1, -1, -1], // 147
    [ 6, 11,  5,  7,  4,  8,  2, 10,  3, -1, -1, -1, -1, -1, -1, -1], // 148
    [11,  5,  6,  4,  0,  2,  4,  2,  7,  7,  2, 10, -1, -1, -1, -1], // 149
    [ 4,  8,  7,  3,  2, 10,  1,  0,  9,  6, 11,  5, -1, -1, -1, -1], // 150
    [ 6, 11,  5, 10,  7,  2,  2,  7,  4,  2,  4,  1,  1,  4,  9, -1], // 151
    [ 1,  5,  6,  1,  6,  2,  8,  7,  4, -1, -1, -1, -1, -1, -1, -1], // 152
    [ 0,  3,  7,  0,  7,  4,  2,  1,  5,  2,  5,  6, -1, -1, -1, -1], // 153
    [ 8,  7,  4,  6,  2,  0,  6,  0,  5,  5,  0,  9, -1, -1, -1, -1], // 154
    [ 2,  9,  6,  7,  9,  3,  3,  9,  2,  4,  9,  7,  6,  9,  5, -1], // 155
    [ 4,  8,  7,  3,  1,  5,  3,  5, 10, 10,  5,  6, -1, -1, -1, -1], // 156
    [ 0, 10,  4,  5, 10,  1,  1, 10,  0,  6, 10,  5,  4, 10,  7, -1], // 157
    [ 4,  8,  7,  9,  5,  0,  0,  5,  6,  0,  6,  3,  3,  6, 10, -1], // 158
    [ 7,  4, 10, 10,  4,  9, 10,  9,  5, 10,  5,  6, -1, -1, -1, -1], // 159
    [ 4,  6, 11,  4, 11,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 160
    [11,  9,  4, 11,  4,  6,  3,  8,  0, -1, -1, -1, -1, -1, -1, -1], // 161
    [ 1,  6, 11,  1,  0,  6,  0,  4,  6, -1, -1, -1, -1, -1, -1, -1], // 162
    [ 4,  3,  8,  4, 11,  3, 11,  1,  3,  6, 11,  4, -1, -1, -1, -1], // 163
    [ 4,  6, 11,  4, 11,  9,  3,  2, 10, -1, -1, -1, -1, -1, -1, -1], // 164
    [ 2, 10,  8,  2,  8,  0,  6, 11,  9,  6,  9,  4, -1, -1, -1, -1], // 165
    [10,  3,  2,  0,  4,  6,  0,  6,  1,  1,  6, 11, -1, -1, -1, -1], // 166
    [ 8,  1, 10,  6,  1,  4,  4,  1,  8, 11,  1,  6, 10,  1,  2, -1], // 167
    [ 9,  2,  1,  9,  4,  2,  4,  6,  2, -1, -1, -1, -1, -1, -1, -1], // 168
    [ 3,  8,  0,  4,  6,  2,  4,  2,  9,  9,  2,  1, -1, -1, -1, -1], // 169
    [ 0,  4,  6,  0,  6,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 170
    [ 3,  8,  4,  3,  4,  2,  2,  4,  6, -1, -1, -1, -1, -1, -1, -1], // 171
    [ 1,  9,  3,  3,  6, 10,  9,  6,  3,  9,  4,  6, -1, -1, -1, -1], // 172
    [ 6,  1,  4,  8,  1, 10, 10,  1,  6,  0,  1,  8,  4,  1,  9, -1], // 173
    [10,  3,  0, 10,  0,  6,  6,  0,  4, -1, -1, -1, -1, -1, -1, -1], // 174
    [ 6,  8,  4,  6, 10,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 175
    [ 6,  8,  7,  6, 11,  8, 11,  9,  8, -1, -1, -1, -1, -1, -1, -1], // 176
    [ 3,  7,  0,  7,  6, 11,  0,  7, 11,  0, 11,  9, -1, -1, -1, -1], // 177
    [ 7,  0,  8,  7,  6,  0,  6,  1,  0,  6, 11,  1, -1, -1, -1, -1], // 178
    [ 6, 11,  1,  6,  1,  7,  7,  1,  3, -1, -1, -1, -1, -1, -1, -1], // 179
    [ 3,  2, 10, 11,  9,  8, 11,  8,  6,  6,  8,  7, -1, -1, -1, -1], // 180
    [ 9,  7, 11,  2,  7,  0,  0,  7,  9, 10,  7,  2, 11,  7,  6, -1], // 181
    [ 2, 10,  3, 11,  1,  6,  6,  1,  0,  6,  0,  7,  7,  0,  8, -1], // 182
    [ 2, 10,  1,  1, 10,  7,  1,  7,  6,  1,  6, 11, -1, -1, -1, -1], // 183
    [ 6,  8,  7,  6,  1,  8,  1,  9,  8,  2,  1,  6, -1, -1, -1, -1], // 184
    [ 7,  9,  3,  2,  9,  6,  6,  9,  7,  1,  9,  2,  3,  9,  0, -1], // 185
    [ 8,  7,  6,  8,  6,  0,  0,  6,  2, -1, -1, -1, -1, -1, -1, -1], // 186
    [ 2,  7,  6,  2,  3,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 187
    [ 1,  6,  3,  8,  6,  9,  9,  6,  1,  7,  6,  8,  3,  6, 10, -1], // 188
    [ 6, 10,  7,  0,  1,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 189
    [10,  3,  6,  6,  3,  0,  6,  0,  8,  6,  8,  7, -1, -1, -1, -1], // 190
    [ 6, 10,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 191
    [10, 11,  5, 10,  5,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 192
    [ 5,  7, 10,  5, 10, 11,  0,  3,  8, -1, -1, -1, -1, -1, -1, -1], // 193
    [10, 11,  5, 10,  5,  7,  0,  9,  1, -1, -1, -1, -1, -1, -1, -1], // 194
    [ 3,  8,  9,  3,  9,  1,  7, 10, 11,  7, 11,  5, -1, -1, -1, -1], // 195
    [11,  3,  2, 11,  5,  3,  5,  7,  3, -1, -1, -1, -1, -1, -1, -1], // 196
    [ 5,  7, 11,  7,  8,  0, 11,  7,  0, 11,  0,  2, -1, -1, -1, -1], // 197
    [ 0,  9,  1,  5,  7,  3,  5,  3, 11, 11,  3,  2, -1, -1, -1, -1], // 198
    [ 7,  2,  5,  9,  2,  8,  8,  2,  7,  1,  2,  9,  5,  2, 11, -1], // 199
    [ 2,  7, 10,  2,  1,  7,  1,  5,  7, -1, -1, -1, -1, -1, -1, -1], // 200
    [ 8,  0,  3,  1,  5,  7,  1,  7,  2,  2,  7, 10, -1, -1, -1, -1], // 201
    [ 2,  7, 10,  2,  9,  7,  9,  5,  7,  0,  9,  2, -1, -1, -1, -1], // 202
    [ 9,  2,  8,  7,  2,  5,  5,  2,  9, 10,  2,  7,  8,  2,  3, -1], // 203
    [ 3,  5,  7,  3,  1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 204
    [ 8,  0,  1,  8,  1,  7,  7,  1,  5, -1, -1, -1, -1, -1, -1, -1], // 205
    [ 0,  9,  5,  0,  5,  3,  3,  5,  7, -1, -1, -1, -1, -1, -1, -1], // 206
    [ 7,  9,  5,  7,  8,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 207
    [ 4, 11,  5,  4,  8, 11,  8, 10, 11, -1, -1, -1, -1, -1, -1, -1], // 208
    [ 0,  3, 10,  0, 10,  5,  5, 10, 11,  4,  0,  5, -1, -1, -1, -1], // 209
    [ 1,  0,  9,  8, 10, 11,  8, 11,  4,  4, 11,  5, -1, -1, -1, -1], // 210
    [ 3,  4,  1, 11,  4, 10, 10,  4,  3,  5,  4, 11,  1,  4,  9, -1], // 211
    [ 8,  3,  2,  8,  2,  4,  4,  2, 11,  4, 11,  5, -1, -1, -1, -1], // 212
    [11,  5,  4, 11,  4,  2,  2,  4,  0, -1, -1, -1, -1, -1, -1, -1], // 213
    [ 0,  9,  1,  8,  3,  4,  4,  3,  2,  4,  2,  5,  5,  2, 11, -1], // 214
    [ 9,  1,  4,  4,  1,  2,  4,  2, 11,  4, 11,  5, -1, -1, -1, -1], // 215
    [ 8, 10,  4, 10,  2,  1,  4, 10,  1,  4,  1,  5, -1, -1, -1, -1], // 216
    [ 5, 10,  1,  0, 10,  4,  4, 10,  5,  3, 10,  0,  1, 10,  2, -1], // 217
    [10,  5,  8,  0,  5,  2,  2,  5, 10,  9,  5,  0,  8,  5,  4, -1], // 218
    [ 2,  3, 10,  4,  9,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 219
    [ 4,  8,  3,  4,  3,  5,  5,  3,  1, -1, -1, -1, -1, -1, -1, -1], // 220
    [ 0,  5,  4,  0,  1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 221
    [ 4,  8,  5,  5,  8,  3,  5,  3,  0,  5,  0,  9, -1, -1, -1, -1], // 222
    [ 5,  4,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 223
    [ 7,  9,  4,  7, 10,  9, 10, 11,  9, -1, -1, -1, -1, -1, -1, -1], // 224
    [ 0,  3,  8, 10, 11,  9, 10,  9,  7,  7,  9,  4, -1, -1, -1, -1], // 225
    [11,  1, 10, 10,  4,  7,  1,  4, 10,  1,  0,  4, -1, -1, -1, -1], // 226
    [11,  4, 10,  3,  4,  1,  1,  4, 11,  8,  4,  3, 10,  4,  7, -1], // 227
    [ 3,  2, 11,  3, 11,  4,  4, 11,  9,  7,  3,  4, -1, -1, -1, -1], // 228
    [ 2,  7,  0,  9,  7, 11, 11,  7,  2,  4,  7,  9,  0,  7,  8, -1], // 229
    [ 4, 11,  0,  3, 11,  7,  7, 11,  4,  2, 11,  3,  0, 11,  1, -1], // 230
    [ 4,  7,  8,  2, 11,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 231
    [10,  4,  7, 10,  2,  4,  2,  9,  4,  2,  1,  9, -1, -1, -1, -1], // 232
    [ 0,  3,  8,  1,  9,  2,  2,  9,  4,  2,  4, 10, 10,  4,  7, -1], // 233
    [ 7, 10,  2,  7,  2,  4,  4,  2,  0, -1, -1, -1, -1, -1, -1, -1], // 234
    [ 7, 10,  4,  4, 10,  2,  4,  2,  3,  4,  3,  8, -1, -1, -1, -1], // 235
    [ 9,  4,  7,  9,  7,  1,  1,  7,  3, -1, -1, -1, -1, -1, -1, -1], // 236
    [ 8,  0,  7,  7,  0,  1,  7,  1,  9,  7,  9,  4, -1, -1, -1, -1], // 237
    [ 4,  3,  0,  4,  7,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 238
    [ 4,  7,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 239
    [ 8, 10, 11,  8, 11,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 240
    [ 0,  3, 10,  0, 10,  9,  9, 10, 11, -1, -1, -1, -1, -1, -1, -1], // 241
    [ 1,  0,  8,  1,  8, 11, 11,  8, 10, -1, -1, -1, -1, -1, -1, -1], // 242
    [ 3, 11,  1,  3, 10, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 243
    [ 3,  2, 11,  3, 11,  8,  8, 11,  9, -1, -1, -1, -1, -1, -1, -1], // 244
    [ 2,  9,  0,  2, 11,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 245
    [ 3,  2,  8,  8,  2, 11,  8, 11,  1,  8,  1,  0, -1, -1, -1, -1], // 246
    [ 1,  2, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 247
    [ 2,  1,  9,  2,  9, 10, 10,  9,  8, -1, -1, -1, -1, -1, -1, -1], // 248
    [ 0,  3,  9,  9,  3, 10,  9, 10,  2,  9,  2,  1, -1, -1, -1, -1], // 249
    [ 0, 10,  2,  0,  8, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 250
    [ 2,  3, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 251
    [ 8,  1,  9,  8,  3,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 252
    [ 9,  0,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 253
    [ 0,  8,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 254
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 255
];

#[cfg(test)]
mod tests {
    use super::*;

    fn row_entries(code: u8) -> Vec<i8> {
        CASE_TABLE[usize::from(code)]
            .iter()
            .copied()
            .take_while(|&e| e != SENTINEL)
            .collect()
    }

    #[test]
    fn test_row_lengths_are_whole_triangles() {
        for code in 0..=255u8 {
            let n = row_entries(code).len();
            assert!(
                n % 3 == 0 && n <= MAX_TRIANGLES_PER_CELL * 3,
                "case {code} has {n} entries"
            );
            assert_eq!(triangle_count(code), n / 3);
            assert_eq!(triangle_edges(code).count(), n / 3);
        }
    }

    #[test]
    fn test_sentinel_padding_is_contiguous() {
        for (code, row) in CASE_TABLE.iter().enumerate() {
            let n = row.iter().take_while(|&&e| e != SENTINEL).count();
            assert!(
                row[n..].iter().all(|&e| e == SENTINEL),
                "case {code} has entries after its sentinel"
            );
            assert!(row[..n].iter().all(|&e| (0..12).contains(&e)));
        }
    }

    #[test]
    fn test_uniform_cases_are_empty() {
        assert!(row_entries(0).is_empty());
        assert!(row_entries(255).is_empty());
    }

    #[test]
    fn test_rows_reference_only_crossing_edges() {
        for code in 0..=255u8 {
            let mask = crossing_edges(code);
            let mut used = 0u16;
            for e in row_entries(code) {
                assert!(
                    mask & (1 << e) != 0,
                    "case {code} references edge {e} whose corners agree"
                );
                used |= 1 << e;
            }
            assert_eq!(used, mask, "case {code} leaves a crossing edge unused");
        }
    }

    #[test]
    fn test_triangles_have_distinct_edges() {
        for code in 0..=255u8 {
            for [a, b, c] in triangle_edges(code) {
                assert!(a != b && b != c && a != c, "case {code} has a degenerate triangle");
            }
        }
    }

    #[test]
    fn test_edges_match_corner_offsets() {
        for (id, e) in EDGES.iter().enumerate() {
            let a = CORNER_OFFSETS[e.from];
            let b = CORNER_OFFSETS[e.to];
            for axis in Axis::ALL {
                let i = axis.index();
                if axis == e.axis {
                    assert_eq!((a[i], b[i]), (0, 1), "edge {id} does not run along {axis}");
                } else {
                    assert_eq!(a[i], b[i], "edge {id} is not axis-aligned");
                }
            }
        }
    }

    #[test]
    fn test_single_corner_cases() {
        assert_eq!(row_entries(1), vec![0, 3, 8]);
        assert_eq!(row_entries(128), vec![11, 5, 6]);
        assert_eq!(crossing_edges(1), 0b0001_0000_1001);
    }

    #[test]
    fn test_bottom_face_case() {
        // Corners 0..=3 share y = 0; only the four y edges cross.
        assert_eq!(crossing_edges(0x0F), 0b1111_0000_0000);
        assert_eq!(triangle_count(0x0F), 2);
    }
}
