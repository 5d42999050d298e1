//! The 48 twist generators of the puzzle group.
//!
//! Twisting a vertex rotates its five neighbors one, two, three or four steps
//! around their ring while fixing the other seven positions. Each twist is a
//! single 5-cycle, hence even, so the generated group lies inside A12; the
//! exhaustive search in [`crate::verify`] confirms it is all of A12.

use crate::geometry::{VertexRings, RING, VERTICES};
use crate::perm::Perm12;

/// Number of generators: 12 vertices × 4 nonzero rotation amounts.
pub const GENERATORS: usize = VERTICES * (RING - 1);

/// Provenance of a generator: which vertex is twisted, and by how much.
///
/// `amount` is the signed minimal rotation: ring offsets 1, 2, 3, 4 are
/// reported as 1, 2, −2, −1, so a twist and its inverse carry opposite
/// amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Twist {
    pub vertex: u8,
    pub amount: i8,
}

/// The fixed generator set, built once from the icosahedron's neighbor rings.
///
/// Construction asserts the structural invariants (every candidate a valid
/// permutation, exactly 48 of them); a violation means the geometry provider
/// or the packing algebra is broken, and aborts.
#[derive(Debug, Clone)]
pub struct GeneratorSet {
    gens: [Perm12; GENERATORS],
    twists: [Twist; GENERATORS],
}

impl GeneratorSet {
    /// Derives the 48 twists from a ring provider.
    pub fn new(rings: &impl VertexRings) -> Self {
        let mut gens = [Perm12::IDENTITY; GENERATORS];
        let mut twists = [Twist { vertex: 0, amount: 0 }; GENERATORS];
        let mut count = 0;
        for v in 0..VERTICES as u8 {
            let ring = rings.neighbor_ring(v);
            for n in 1..RING {
                let mut g = Perm12::IDENTITY;
                for j in 0..RING {
                    g = g.with_image(ring[j] as usize, ring[(j + n) % RING]);
                }
                assert!(
                    g.is_valid(),
                    "twist of vertex {v} by {n} is not a permutation; broken ring {ring:?}"
                );
                gens[count] = g;
                twists[count] = Twist {
                    vertex: v,
                    amount: if n < 3 { n as i8 } else { n as i8 - RING as i8 },
                };
                count += 1;
            }
        }
        assert_eq!(count, GENERATORS);
        GeneratorSet { gens, twists }
    }

    /// All 48 generator permutations, in (vertex, amount) order.
    pub fn generators(&self) -> &[Perm12; GENERATORS] {
        &self.gens
    }

    /// Provenance of each generator, parallel to [`GeneratorSet::generators`].
    pub fn twists(&self) -> &[Twist; GENERATORS] {
        &self.twists
    }

    /// Whether `g` is one of the 48 generators.
    pub fn contains(&self, g: Perm12) -> bool {
        self.gens.contains(&g)
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Icosahedron;

    use super::*;

    fn gens() -> GeneratorSet {
        GeneratorSet::new(&Icosahedron)
    }

    #[test]
    fn forty_eight_distinct_generators() {
        let set = gens();
        assert_eq!(set.generators().len(), 48);
        let mut sorted = *set.generators();
        sorted.sort();
        for w in sorted.windows(2) {
            assert_ne!(w[0], w[1], "duplicate generator");
        }
    }

    #[test]
    fn every_generator_is_an_even_five_cycle() {
        for &g in gens().generators() {
            assert!(g.is_valid());
            assert_eq!(g.parity(), 1);
            let moved = (0..12).filter(|&i| g.image(i) != i as u8).count();
            assert_eq!(moved, 5, "{g} moves {moved} positions");
        }
    }

    #[test]
    fn closed_under_inversion() {
        let set = gens();
        for &g in set.generators() {
            assert!(set.contains(g.inverse()));
        }
    }

    #[test]
    fn twist_amounts_pair_up_as_inverses() {
        let set = gens();
        for (i, &g) in set.generators().iter().enumerate() {
            let t = set.twists()[i];
            assert!((1..=2).contains(&t.amount.abs()));
            // The inverse generator is the same vertex twisted by the
            // opposite amount.
            let j = set
                .generators()
                .iter()
                .position(|&h| h == g.inverse())
                .unwrap();
            let u = set.twists()[j];
            assert_eq!(u.vertex, t.vertex);
            assert_eq!(u.amount, -t.amount);
        }
    }

    #[test]
    fn twist_moves_only_the_ring() {
        let set = gens();
        for (i, &g) in set.generators().iter().enumerate() {
            let ring = Icosahedron.neighbor_ring(set.twists()[i].vertex);
            for p in 0..12u8 {
                if ring.contains(&p) {
                    assert_ne!(g.image(p as usize), p);
                } else {
                    assert_eq!(g.image(p as usize), p);
                }
            }
        }
    }
}
