//! Icosahedron vertex adjacency.
//!
//! The twist generators are derived from the neighbor structure of a regular
//! icosahedron: twelve vertices, each with exactly five neighbors arranged in
//! a ring. The engine consumes only the [`VertexRings`] seam; [`Icosahedron`]
//! is the canonical combinatorial model.

/// Number of vertices of the icosahedron, and of symbols being permuted.
pub const VERTICES: usize = 12;

/// Ring size around every vertex.
pub const RING: usize = 5;

/// Provider of the five neighbors of each vertex, in consistent cyclic order.
///
/// Consecutive entries of a ring (cyclically) must themselves be adjacent,
/// since the faces of the icosahedron are triangles. A provider that violates
/// this contract produces an invalid generator set, which is treated as a
/// fatal structural error downstream.
pub trait VertexRings {
    /// The neighbors of `v`, in cyclic order around `v`.
    fn neighbor_ring(&self, v: u8) -> [u8; RING];
}

/// The regular icosahedron, described combinatorially: vertex 0 at the north
/// pole, vertices 1–5 the upper ring, 6–10 the lower ring (a pentagonal
/// antiprism between the rings), vertex 11 at the south pole.
#[derive(Debug, Clone, Copy, Default)]
pub struct Icosahedron;

/// Cyclic neighbor rings of all twelve vertices.
const RINGS: [[u8; RING]; VERTICES] = [
    [1, 2, 3, 4, 5],     // 0: north pole
    [0, 2, 7, 6, 5],     // 1
    [0, 3, 8, 7, 1],     // 2
    [0, 4, 9, 8, 2],     // 3
    [0, 5, 10, 9, 3],    // 4
    [0, 1, 6, 10, 4],    // 5
    [11, 7, 1, 5, 10],   // 6
    [11, 8, 2, 1, 6],    // 7
    [11, 9, 3, 2, 7],    // 8
    [11, 10, 4, 3, 8],   // 9
    [11, 6, 5, 4, 9],    // 10
    [6, 7, 8, 9, 10],    // 11: south pole
];

impl VertexRings for Icosahedron {
    fn neighbor_ring(&self, v: u8) -> [u8; RING] {
        RINGS[v as usize]
    }
}
