use alloc::vec::Vec;

use crate::{Scalar, TriangulateError, Triangulator};

/// A filled polygonal region whose triangulation is cached until its boundary changes.
pub struct Region<T: Scalar> {
    vertices: Vec<[T; 2]>,
    triangles: Vec<[usize; 3]>,
    dirty: bool,
    triangulator: Triangulator<T>,
}

impl<T: Scalar> Region<T> {
    /// Creates a region from its boundary vertices. It is triangulated on first use.
    pub fn new(vertices: impl IntoIterator<Item = [T; 2]>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            triangles: Vec::new(),
            dirty: true,
            triangulator: Triangulator::new(),
        }
    }

    pub fn vertices(&self) -> &[[T; 2]] {
        &self.vertices
    }

    /// Replaces the boundary and marks the cached triangulation as stale.
    pub fn set_vertices(&mut self, vertices: impl IntoIterator<Item = [T; 2]>) {
        self.vertices.clear();
        self.vertices.extend(vertices);
        self.dirty = true;
    }

    /// Whether the next call to [`Region::triangles`] has to re-triangulate.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Index triples covering the region, re-triangulating first if the boundary changed.
    ///
    /// A failed triangulation leaves the region dirty and without triangles.
    pub fn triangles(&mut self) -> Result<&[[usize; 3]], TriangulateError> {
        if self.dirty {
            self.triangulator
                .triangulate(self.vertices.iter().copied(), &mut self.triangles)?;
            self.dirty = false;
        }
        Ok(&self.triangles)
    }

    /// The triangles covering the region, each as its three corner coordinates.
    pub fn fill(&mut self) -> Result<impl Iterator<Item = [[T; 2]; 3]> + '_, TriangulateError> {
        self.triangles()?;
        let vertices = &self.vertices;
        Ok(self
            .triangles
            .iter()
            .map(move |&[a, b, c]| [vertices[a], vertices[b], vertices[c]]))
    }
}
