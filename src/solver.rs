//! Meet-in-the-middle shortest words.
//!
//! For a target `g` at distance `k`, some suffix of a minimal word has length
//! `⌈k/2⌉`; cancelling it against `g` lands in `Ball(⌊k/2⌋)`. The solver
//! therefore scans `m ∈ Ball(⌈k/2⌉)` for increasing `k` and tests whether
//! `g·m ∈ Ball(⌊k/2⌋)`, paying for two half-radius balls instead of one
//! full-radius one. A found midpoint is then expanded recursively into an
//! explicit generator word.

use thiserror::Error;

use crate::ball::Balls;
use crate::generators::GeneratorSet;
use crate::perm::Perm12;

/// Hard cap on the word length scan. The group's diameter under the twist
/// generators is 8 (see [`crate::verify`]); reaching this cap means the
/// generator set does not generate A12 and is a structural error.
pub const MAX_WORD_LEN: usize = 16;

/// A target outside the domain of the path search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// Odd permutations are not products of the (even) twist generators.
    #[error("target has odd parity; only even permutations are reachable")]
    OddParity,
}

/// Shortest-path engine over the twist generators.
///
/// Owns the generator set and the memoized balls; both are grown once and
/// reused across queries.
///
/// # Examples
///
/// ```
/// use icosian::geometry::Icosahedron;
/// use icosian::generators::GeneratorSet;
/// use icosian::perm::Perm12;
/// use icosian::solver::Solver;
///
/// let mut solver = Solver::new(GeneratorSet::new(&Icosahedron));
/// assert_eq!(solver.shortest_path(Perm12::IDENTITY).unwrap(), vec![]);
/// let g = solver.generators().generators()[0];
/// assert_eq!(solver.shortest_path(g).unwrap(), vec![g]);
/// ```
#[derive(Debug)]
pub struct Solver {
    gens: GeneratorSet,
    balls: Balls,
}

impl Solver {
    pub fn new(gens: GeneratorSet) -> Self {
        Solver {
            gens,
            balls: Balls::new(),
        }
    }

    pub fn generators(&self) -> &GeneratorSet {
        &self.gens
    }

    /// Finds the minimal word length `k` of `g` and a witness midpoint `h`
    /// with `d(identity, h) ≤ ⌊k/2⌋` and `d(h, g) ≤ ⌈k/2⌉`.
    ///
    /// `k` is guaranteed minimal; which witness is returned is not specified.
    /// For the identity the witness is `g` itself; for a generator it is the
    /// identity.
    pub fn midpoint(&mut self, g: Perm12) -> Result<(usize, Perm12), SolveError> {
        if g.parity() != 1 {
            return Err(SolveError::OddParity);
        }
        if g.is_identity() {
            return Ok((0, g));
        }
        if self.balls.ball(1, &self.gens).contains(&g) {
            return Ok((1, Perm12::IDENTITY));
        }
        for k in 2usize.. {
            assert!(
                k <= MAX_WORD_LEN,
                "no word of length ≤ {MAX_WORD_LEN} reaches {g}; generator set is broken"
            );
            self.balls.extend_to(k.div_ceil(2), &self.gens);
            let left = self.balls.get(k / 2);
            let right = self.balls.get(k.div_ceil(2));
            for &m in right {
                let h = g.compose(m);
                if left.contains(&h) {
                    return Ok((k, h));
                }
            }
        }
        unreachable!()
    }

    /// Expands `g` into an explicit minimal generator word.
    ///
    /// Composing the returned twists left to right (identity folded through
    /// [`Perm12::compose`]) reproduces `g`; the word length equals the `k`
    /// reported by [`Solver::midpoint`].
    pub fn shortest_path(&mut self, g: Perm12) -> Result<Vec<Perm12>, SolveError> {
        let (k, h) = self.midpoint(g)?;
        let mut path = Vec::with_capacity(k);
        match k {
            0 => {}
            1 => path.push(g),
            _ => {
                // Each half is strictly shorter than k, so this terminates.
                path.extend(self.shortest_path(h)?);
                path.extend(self.shortest_path(h.inverse().compose(g))?);
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use crate::geometry::Icosahedron;

    use super::*;

    fn solver() -> Solver {
        Solver::new(GeneratorSet::new(&Icosahedron))
    }

    fn fold(path: &[Perm12]) -> Perm12 {
        path.iter().fold(Perm12::IDENTITY, |acc, &g| acc.compose(g))
    }

    #[test]
    fn identity_has_an_empty_path() {
        let mut s = solver();
        assert_eq!(s.midpoint(Perm12::IDENTITY), Ok((0, Perm12::IDENTITY)));
        assert_eq!(s.shortest_path(Perm12::IDENTITY), Ok(vec![]));
    }

    #[test]
    fn generators_are_their_own_path() {
        let mut s = solver();
        for i in 0..48 {
            let g = s.generators().generators()[i];
            assert_eq!(s.midpoint(g), Ok((1, Perm12::IDENTITY)));
            assert_eq!(s.shortest_path(g), Ok(vec![g]));
        }
    }

    #[test]
    fn odd_targets_are_rejected() {
        let mut s = solver();
        let swap = Perm12::from_mapping(&[1, 0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]).unwrap();
        assert_eq!(s.midpoint(swap), Err(SolveError::OddParity));
        assert_eq!(s.shortest_path(swap), Err(SolveError::OddParity));
    }

    #[test]
    fn two_generator_products_have_length_two() {
        let mut s = solver();
        let a = s.generators().generators()[0];
        let b = s.generators().generators()[7];
        let g = a.compose(b);
        // a and b twist different rings here, so g is not a generator.
        let (k, h) = s.midpoint(g).unwrap();
        assert_eq!(k, 2);
        let path = s.shortest_path(g).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(fold(&path), g);
        // The witness is reachable in one step from both ends.
        assert!(h.is_identity() || s.generators().contains(h));
    }

    #[test]
    fn inverse_pairs_compose_to_identity_words() {
        let mut s = solver();
        let a = s.generators().generators()[3];
        let g = a.compose(a.inverse());
        assert_eq!(s.shortest_path(g), Ok(vec![]));
    }

    #[test]
    fn random_even_targets_round_trip() {
        let mut s = solver();
        let mut rng = SmallRng::seed_from_u64(239_500_800);
        let mut solved = 0;
        while solved < 40 {
            let mut map: [u8; 12] = std::array::from_fn(|i| i as u8);
            map.shuffle(&mut rng);
            let g = Perm12::from_mapping(&map).unwrap();
            if g.parity() != 1 {
                continue;
            }
            let (k, _) = s.midpoint(g).unwrap();
            let path = s.shortest_path(g).unwrap();
            assert_eq!(path.len(), k);
            assert_eq!(fold(&path), g);
            for &step in &path {
                assert!(s.generators().contains(step));
            }
            solved += 1;
        }
    }
}
