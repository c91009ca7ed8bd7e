use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use bitvec::prelude::*;
use clap::{Args, Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use segbitset::SegBitSet;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Capacity of the demo bitset.
const DEMO_BITS: usize = 1024 * 100;
/// Capacity used by `compare`.
const COMPARE_BITS: usize = 100_000;

#[derive(Parser, Debug)]
#[command(name = "segbitset", about = "Sparse bitset on a segment tree")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a small sparse bitset and walk its set bits.
    Demo,
    /// Time traversal and bulk operations against a flat bit vector.
    Compare(CompareConfig),
}

/// Workload parameters for `compare`.
#[derive(Args, Debug, Clone)]
struct CompareConfig {
    /// Fraction of bits set in each operand.
    #[arg(long, default_value_t = 0.01)]
    density: f64,
    /// Repetitions per measured operation.
    #[arg(long, default_value_t = 100)]
    rounds: u32,
    /// Seed for the random bit positions.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Compare(config) => run_compare(&config)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo() -> Result<()> {
    let mut flat = bitvec![0; DEMO_BITS];
    for pos in [1, 20, 31, 1341] {
        flat.set(pos, true);
    }
    let bits = SegBitSet::<DEMO_BITS>::from_flat(&flat).context("failed to build demo bitset")?;

    println!("bits[1] = {}", bits[1]);
    println!("bits[0] = {}", bits[0]);

    let mut cursor = bits.first();
    while let Some(pos) = cursor {
        println!("next set bit: {}", pos);
        cursor = bits.next(pos);
    }
    println!("next past the last set bit: none");

    bits.for_each(|pos| println!("pos of 1: {}", pos));
    println!("count = {}, any = {}, all = {}", bits.count(), bits.any(), bits.all());

    Ok(())
}

fn run_compare(config: &CompareConfig) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&config.density),
        "density must be within [0, 1], got {}",
        config.density
    );
    ensure!(config.rounds > 0, "rounds must be greater than zero");

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let left_flat = random_flat(&mut rng, config.density);
    let right_flat = random_flat(&mut rng, config.density);
    let left = SegBitSet::<COMPARE_BITS>::from_flat(&left_flat).context("failed to build left operand")?;
    let right = SegBitSet::<COMPARE_BITS>::from_flat(&right_flat).context("failed to build right operand")?;

    info!(
        size = COMPARE_BITS,
        density = config.density,
        left = left.count(),
        right = right.count(),
        "operands ready"
    );

    let rounds = config.rounds;
    report("segbitset first/next", time(rounds, || {
        let mut seen = 0usize;
        let mut cursor = left.first();
        while let Some(pos) = cursor {
            seen += 1;
            cursor = left.next(pos);
        }
        seen
    }));
    report("segbitset for_each", time(rounds, || {
        let mut seen = 0usize;
        left.for_each(|_| seen += 1);
        seen
    }));
    report("segbitset iter", time(rounds, || left.iter().count()));
    report("bitvec scan", time(rounds, || {
        (0..COMPARE_BITS).filter(|&pos| left_flat[pos]).count()
    }));
    report("bitvec iter_ones", time(rounds, || left_flat.iter_ones().count()));

    report("segbitset and", time(rounds, || (&left & &right).count()));
    report("bitvec and", time(rounds, || (left_flat.clone() & right_flat.as_bitslice()).count_ones()));
    report("segbitset or", time(rounds, || (&left | &right).count()));
    report("bitvec or", time(rounds, || (left_flat.clone() | right_flat.as_bitslice()).count_ones()));

    report("segbitset reset_all", time(rounds, || {
        let mut scratch = left.clone();
        scratch.reset_all();
        scratch.any()
    }));
    report("bitvec fill(false)", time(rounds, || {
        let mut scratch = left_flat.clone();
        scratch.fill(false);
        scratch.any()
    }));

    Ok(())
}

fn random_flat(rng: &mut ChaCha8Rng, density: f64) -> BitVec {
    let mut flat = bitvec![0; COMPARE_BITS];
    let ones = (COMPARE_BITS as f64 * density) as usize;
    for _ in 0..ones {
        flat.set(rng.gen_range(0..COMPARE_BITS), true);
    }
    debug!(requested = ones, actual = flat.count_ones(), "generated operand");
    flat
}

fn time<T, F: FnMut() -> T>(rounds: u32, mut op: F) -> Duration {
    let start = Instant::now();
    for _ in 0..rounds {
        black_box(op());
    }
    start.elapsed() / rounds
}

fn report(label: &str, per_round: Duration) {
    println!("{:<24}\t{:>12.3?}/op", label, per_round);
}
