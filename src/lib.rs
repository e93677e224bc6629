//! Ear-clipping triangulation of simple polygons.
//!
//! Given the boundary of a simple polygon (a single contour without holes or self-intersections),
//! produce `n - 2` triangles as index triples into the input vertices. Every triangle keeps the
//! winding of the input ring.
//!
//! ```
//! let square = [[0, 0], [10, 0], [10, 10], [0, 10]];
//! let triangles = earclip_rs::triangulate(&square).unwrap();
//! assert_eq!(triangles, vec![[3, 0, 1], [1, 2, 3]]);
//! ```

#![no_std]

extern crate alloc;

mod error;
pub mod geom;
mod region;
mod ring;

use alloc::vec::Vec;
use num_traits::float::Float;
use tracing::{debug, trace};

pub use error::{InvalidPolygon, TriangulateError};
pub use geom::{Scalar, Winding};
pub use region::Region;

use ring::{find_ear, linked_list, remove_node, update_reflex, Node};

/// Index of a vertex
pub trait Index: Copy {
    /// Largest vertex index representable by this type.
    const MAX: usize;
    fn into_usize(self) -> usize;
    fn from_usize(v: usize) -> Self;
}
impl Index for u32 {
    const MAX: usize = u32::MAX as usize;
    fn into_usize(self) -> usize {
        self as usize
    }
    fn from_usize(v: usize) -> Self {
        v as Self
    }
}
impl Index for u16 {
    const MAX: usize = u16::MAX as usize;
    fn into_usize(self) -> usize {
        self as usize
    }
    fn from_usize(v: usize) -> Self {
        v as Self
    }
}
impl Index for usize {
    const MAX: usize = usize::MAX;
    fn into_usize(self) -> usize {
        self
    }
    fn from_usize(v: usize) -> Self {
        v as Self
    }
}

/// Instance of the ear-clipping triangulator.
pub struct Triangulator<T: Scalar> {
    data: Vec<[T; 2]>,
    nodes: Vec<Node<T>>,
}

impl<T: Scalar> Default for Triangulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Triangulator<T> {
    /// Creates a new triangulator.
    ///
    /// You can reuse a single instance for multiple triangulations to reduce memory allocations.
    /// Nothing carries over from one call to the next.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Triangulates a simple polygon given by its boundary vertices in order.
    ///
    /// `triangles_out` is cleared and then receives `n - 2` index triples
    /// `[prev, ear, next]`, each wound like the input. On error it is left empty.
    pub fn triangulate<N: Index>(
        &mut self,
        data: impl IntoIterator<Item = [T; 2]>,
        triangles_out: &mut Vec<[N; 3]>,
    ) -> Result<(), TriangulateError> {
        self.data.clear();
        self.data.extend(data);
        triangles_out.clear();

        let result = self.triangulate_impl(triangles_out);
        if let Err(err) = &result {
            debug!(vertices = self.data.len(), %err, "triangulation rejected");
            triangles_out.clear();
        }
        result
    }

    fn triangulate_impl<N: Index>(
        &mut self,
        triangles_out: &mut Vec<[N; 3]>,
    ) -> Result<(), TriangulateError> {
        let winding = validate::<T, N>(&self.data)?;
        let n = self.data.len();
        triangles_out.reserve(n - 2);

        let mut start_i = linked_list(&mut self.nodes, &self.data, winding);
        let nodes = &mut self.nodes;

        // clip ears until a single triangle is left
        let mut remaining = n;
        while remaining > 3 {
            let ear_i =
                find_ear(nodes, start_i).ok_or(TriangulateError::DegeneratePolygon { remaining })?;
            let ear = &nodes[ear_i];
            triangles_out.push([
                N::from_usize(nodes[ear.prev_i].i),
                N::from_usize(ear.i),
                N::from_usize(nodes[ear.next_i].i),
            ]);
            trace!(ear = ear.i, remaining, "clipped ear");

            let (prev_i, next_i) = remove_node(nodes, ear_i);
            if ear_i == start_i {
                start_i = next_i;
            }

            // removing an ear only changes the angles of its two neighbors
            update_reflex(nodes, prev_i, winding);
            update_reflex(nodes, next_i, winding);
            remaining -= 1;
        }

        let a = &nodes[start_i];
        let b = &nodes[a.next_i];
        let c = &nodes[b.next_i];
        triangles_out.push([N::from_usize(a.i), N::from_usize(b.i), N::from_usize(c.i)]);
        Ok(())
    }
}

/// check the input contract and measure the winding of the ring
fn validate<T: Scalar, N: Index>(data: &[[T; 2]]) -> Result<Winding, TriangulateError> {
    let count = data.len();
    if count < 3 {
        return Err(InvalidPolygon::TooFewVertices { count }.into());
    }
    // `Index::from_usize` truncates, so every vertex index must fit `N` before clipping
    if count - 1 > N::MAX {
        return Err(InvalidPolygon::TooManyVertices { count, max: N::MAX }.into());
    }
    let mut prev = data[count - 1];
    for (i, &p) in data.iter().enumerate() {
        if prev == p {
            let index = if i == 0 { count - 1 } else { i - 1 };
            return Err(InvalidPolygon::DuplicateVertex { index }.into());
        }
        prev = p;
    }
    // bounds every cross product the clip loop computes; the fan sum is checked separately
    if !geom::cross_products_fit(data) {
        return Err(InvalidPolygon::CoordinateOverflow.into());
    }
    let area = geom::checked_signed_area(data).ok_or(InvalidPolygon::CoordinateOverflow)?;
    if area > T::zero() {
        Ok(Winding::CounterClockwise)
    } else if area < T::zero() {
        Ok(Winding::Clockwise)
    } else {
        Err(TriangulateError::DegeneratePolygon { remaining: count })
    }
}

/// Triangulates a simple polygon, returning index triples into `vertices`.
///
/// Shorthand for a one-off [`Triangulator::triangulate`] call.
pub fn triangulate<T: Scalar>(vertices: &[[T; 2]]) -> Result<Vec<[usize; 3]>, TriangulateError> {
    let mut triangles = Vec::new();
    Triangulator::new().triangulate(vertices.iter().copied(), &mut triangles)?;
    Ok(triangles)
}

/// Returns a percentage difference between the polygon area and its triangulation area;
/// used to verify correctness of triangulation
pub fn deviation<T: Float + Scalar, N: Index>(
    data: impl IntoIterator<Item = [T; 2]>,
    triangles: &[[N; 3]],
) -> T {
    let data = data.into_iter().collect::<Vec<[T; 2]>>();
    let polygon_area = if data.len() < 3 {
        T::zero()
    } else {
        Float::abs(geom::signed_area(&data))
    };

    let mut triangles_area = T::zero();
    for &[a, b, c] in triangles {
        let a = data[a.into_usize()];
        let b = data[b.into_usize()];
        let c = data[c.into_usize()];
        triangles_area = triangles_area + Float::abs(geom::signed_turn(a, b, c));
    }
    if polygon_area == T::zero() && triangles_area == T::zero() {
        T::zero()
    } else {
        Float::abs((polygon_area - triangles_area) / polygon_area)
    }
}
