//! Memoized balls of fixed word length.
//!
//! `Ball(k)` is the set of permutations expressible as a product of exactly
//! `k` generators; `Ball(0)` is the singleton identity. Each level is derived
//! from the previous one and never mutated after publication. Because the
//! generator set is closed under inversion, `Ball(k)` is a superset of
//! `Ball(k - 2)`; and since two same-ring twists compose to another twist,
//! every generator is itself a product of exactly two generators, so for
//! `k ≥ 2` the level holds every element at distance at most `k`, not only
//! those at distance exactly `k`.

use ahash::AHashSet;

use crate::generators::GeneratorSet;
use crate::perm::Perm12;

/// The memoized sequence `Ball(0), Ball(1), …`, extendable on demand.
#[derive(Debug)]
pub struct Balls {
    levels: Vec<AHashSet<Perm12>>,
}

impl Default for Balls {
    fn default() -> Self {
        Self::new()
    }
}

impl Balls {
    /// Starts with `Ball(0) = {identity}`.
    pub fn new() -> Self {
        let mut zero = AHashSet::with_capacity(1);
        zero.insert(Perm12::IDENTITY);
        Balls { levels: vec![zero] }
    }

    /// Index of the deepest ball computed so far.
    pub fn computed_to(&self) -> usize {
        self.levels.len() - 1
    }

    /// Computes every missing level up to and including `k`:
    /// `Ball(k) = { g·h : g ∈ Ball(k−1), h generator }`.
    pub fn extend_to(&mut self, k: usize, gens: &GeneratorSet) {
        while self.levels.len() <= k {
            let prev = self.levels.last().unwrap();
            let mut next = AHashSet::with_capacity(prev.len() * 8);
            for &g in prev {
                for &h in gens.generators() {
                    next.insert(g.compose(h));
                }
            }
            log::debug!(
                "ball({}) has {} elements",
                self.levels.len(),
                next.len()
            );
            self.levels.push(next);
        }
    }

    /// The already-computed `Ball(k)`.
    ///
    /// # Panics
    ///
    /// Panics if level `k` has not been computed; call
    /// [`Balls::extend_to`] first.
    pub fn get(&self, k: usize) -> &AHashSet<Perm12> {
        &self.levels[k]
    }

    /// Convenience accessor: extends as needed, then returns `Ball(k)`.
    pub fn ball(&mut self, k: usize, gens: &GeneratorSet) -> &AHashSet<Perm12> {
        self.extend_to(k, gens);
        &self.levels[k]
    }
}
