//! Triangle soup produced by the extraction sweep.

#![allow(clippy::cast_possible_truncation)]

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Three independent corner points.
///
/// Winding is not meaningful; the extractor does not orient triangles.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Triangle(pub [Vec3; 3]);

impl Triangle {
    /// Creates a triangle from three points.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self([a, b, c])
    }

    /// Returns the three points.
    #[must_use]
    pub fn points(&self) -> &[Vec3; 3] {
        &self.0
    }

    /// Returns the unnormalized face normal `(b - a) x (c - a)`.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.0;
        (b - a).cross(c - a)
    }

    /// Returns the triangle area.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.normal().length() * 0.5
    }

    /// Returns the centroid.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        (self.0[0] + self.0[1] + self.0[2]) / 3.0
    }
}

/// An ordered list of independent triangles.
///
/// Vertices are never shared: a crossing point on an edge between two cells
/// appears once per triangle that uses it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `capacity` triangles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Appends a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Moves every triangle of `other` onto the end of this mesh.
    pub fn append(&mut self, other: &mut Mesh) {
        self.triangles.append(&mut other.triangles);
    }

    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the triangles in emission order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterates over the triangles.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Returns every point; each consecutive three form one triangle.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Returns the points as packed `x, y, z` floats, nine per triangle.
    #[must_use]
    pub fn as_flat_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Returns the axis-aligned bounds of all points, or `None` for an empty mesh.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        if self.is_empty() {
            return None;
        }
        let init = (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN));
        Some(
            self.positions()
                .iter()
                .fold(init, |(min, max), &p| (min.min(p), max.max(p))),
        )
    }

    /// Returns the summed area of all triangles.
    #[must_use]
    pub fn total_area(&self) -> f32 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Converts to indexed form without welding: point `n` gets index `n`.
    #[must_use]
    pub fn to_indexed(&self) -> IndexedMesh {
        let vertices = self.positions().to_vec();
        let indices = (0..vertices.len() as u32).collect();
        IndexedMesh { vertices, indices }
    }

    /// Consumes the mesh and returns its triangles.
    #[must_use]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}

impl Extend<Triangle> for Mesh {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

/// Vertex and index buffers for renderers that take indexed geometry.
#[derive(Debug, Clone, Default)]
pub struct IndexedMesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangle indices (every 3 consecutive indices form a triangle).
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }
}
