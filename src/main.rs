use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use icosian::generators::GeneratorSet;
use icosian::geometry::Icosahedron;
use icosian::perm::Perm12;
use icosian::solver::Solver;
use icosian::verify::{DistanceTable, KNOWN_LAYERS};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "icosian",
    about = "Shortest twist sequences in the Cayley graph of A12 generated by icosahedral vertex rotations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the 48 twist generators in cycle notation.
    Generators,
    /// Find a minimal twist sequence reaching the given permutation.
    Solve {
        /// Target: 12 comma-separated images, or a packed hex word like 0xba9876543210.
        perm: String,
    },
    /// Exhaustively walk the whole group; report its order and diameter.
    Verify,
    /// Solve random even targets and compare word lengths against the exact
    /// distance-layer densities.
    Sample {
        /// Number of random permutations to draw.
        #[arg(short, long, default_value_t = 2000)]
        count: usize,
        /// RNG seed.
        #[arg(long, default_value_t = 239_500_800)]
        seed: u64,
    },
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generators => generators(),
        Command::Solve { perm } => solve(&perm),
        Command::Verify => verify(),
        Command::Sample { count, seed } => sample(count, seed),
    }
}

fn parse_perm(input: &str) -> Result<Perm12> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix("0x") {
        let word =
            u64::from_str_radix(hex, 16).with_context(|| format!("{input} is not a hex word"))?;
        return Perm12::from_packed(word).context("packed word is not a permutation");
    }
    let images: Vec<u8> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().with_context(|| format!("{s} is not an image")))
        .collect::<Result<_>>()?;
    Perm12::from_mapping(&images).context("images do not form a permutation of 0..12")
}

fn generators() -> Result<()> {
    let gens = GeneratorSet::new(&Icosahedron);
    for (g, t) in gens.generators().iter().zip(gens.twists()) {
        println!("vertex {:2} twist {:+} = {}", t.vertex, t.amount, g);
    }
    Ok(())
}

fn solve(perm: &str) -> Result<()> {
    let g = parse_perm(perm)?;
    if g.parity() != 1 {
        bail!("{g} has odd parity; it is not reachable by twists");
    }
    let mut solver = Solver::new(GeneratorSet::new(&Icosahedron));
    let path = solver.shortest_path(g)?;
    if g.is_identity() {
        println!("already solved");
        return Ok(());
    }
    println!("{} reached in {} twists", g, path.len());
    println!("{}", path.iter().map(|step| step.to_string()).join(" "));
    Ok(())
}

fn verify() -> Result<()> {
    let table = DistanceTable::explore(&GeneratorSet::new(&Icosahedron));
    println!("group order {}", table.len());
    println!("diameter    {}", table.diameter());
    for (d, n) in table.layer_sizes().iter().enumerate() {
        println!("  distance {d}: {n}");
    }
    Ok(())
}

fn sample(count: usize, seed: u64) -> Result<()> {
    ensure!(count > 0, "count must be greater than zero");
    let mut solver = Solver::new(GeneratorSet::new(&Icosahedron));
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut counts = [0u64; KNOWN_LAYERS.len()];
    let mut solved = 0u64;
    for _ in 0..count {
        let mut map: [u8; 12] = std::array::from_fn(|i| i as u8);
        map.shuffle(&mut rng);
        let g = Perm12::from_mapping(&map)?;
        if g.parity() != 1 {
            continue;
        }
        let path = solver.shortest_path(g)?;
        counts[path.len()] += 1;
        solved += 1;
    }
    let exact_total: u64 = KNOWN_LAYERS.iter().sum();
    println!("solved {solved} of {count} random permutations (the even ones)");
    println!("length   observed     exact");
    let mut max_error = 0f64;
    for (d, &n) in counts.iter().enumerate() {
        let observed = n as f64 / solved as f64;
        let exact = KNOWN_LAYERS[d] as f64 / exact_total as f64;
        max_error = max_error.max((observed - exact).abs());
        println!("{d:6} {observed:10.5} {exact:9.5}");
    }
    println!("max density error {max_error:.5}");
    Ok(())
}
