//! # Icosian
//!
//! Icosian computes structural properties of the Cayley graph of the
//! alternating group A12, generated by the 48 ring rotations ("twists") of a
//! regular icosahedron's vertex neighborhoods: the group of a permutation
//! puzzle in which every twist cycles the five neighbors of one vertex.
//!
//! Given any even permutation of the twelve vertices it finds a minimal
//! sequence of twists reaching it from the solved state, via meet-in-the-
//! middle search over memoized word-length balls; an independent exhaustive
//! breadth-first search verifies the group's order (12!/2 = 239 500 800)
//! and diameter (8).

pub mod ball;
pub mod generators;
pub mod geometry;
pub mod perm;
pub mod solver;
pub mod verify;
