//! End-to-end check of the shortest-path engine against the exact
//! distance-layer distribution of the Cayley graph.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use icosian::generators::GeneratorSet;
use icosian::geometry::Icosahedron;
use icosian::perm::Perm12;
use icosian::solver::Solver;
use icosian::verify::{GROUP_ORDER, KNOWN_LAYERS};

#[test]
fn random_word_lengths_follow_the_exact_density() {
    let mut solver = Solver::new(GeneratorSet::new(&Icosahedron));
    let mut rng = SmallRng::seed_from_u64(GROUP_ORDER);

    let mut counts = [0u64; KNOWN_LAYERS.len()];
    let mut solved = 0u64;
    for _ in 0..4000 {
        let mut map: [u8; 12] = std::array::from_fn(|i| i as u8);
        map.shuffle(&mut rng);
        let g = Perm12::from_mapping(&map).unwrap();
        if g.parity() != 1 {
            continue;
        }
        let path = solver.shortest_path(g).unwrap();

        // The word really is a factorization of g into generators.
        let product = path.iter().fold(Perm12::IDENTITY, |acc, &s| acc.compose(s));
        assert_eq!(product, g);
        for &step in &path {
            assert!(solver.generators().contains(step));
        }

        assert!(path.len() < KNOWN_LAYERS.len());
        counts[path.len()] += 1;
        solved += 1;
    }

    // Roughly half of the shuffles are even.
    assert!(solved > 1500, "only {solved} even permutations drawn");

    // Word lengths of uniform random even permutations are distributed like
    // the exact layer sizes. With ~2000 samples the dominant layers (5 and 6)
    // are resolved to a couple of percent.
    let mut max_error = 0f64;
    for (d, &n) in counts.iter().enumerate() {
        let observed = n as f64 / solved as f64;
        let exact = KNOWN_LAYERS[d] as f64 / GROUP_ORDER as f64;
        max_error = max_error.max((observed - exact).abs());
    }
    assert!(max_error < 0.03, "observed density deviates by {max_error}");
}

#[test]
fn packed_words_cross_the_wire_unchanged() {
    let mut rng = SmallRng::seed_from_u64(60);
    for _ in 0..100 {
        let mut map: [u8; 12] = std::array::from_fn(|i| i as u8);
        map.shuffle(&mut rng);
        let g = Perm12::from_mapping(&map).unwrap();
        let word = g.packed();
        assert_eq!(word & 0xffff_0000_0000_0000, 0);
        assert_eq!(Perm12::from_packed(word).unwrap(), g);
    }
}
