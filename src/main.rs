//! tarea driver binary
//!
//! Multiplies a random matrix A with a unit or random matrix B and prints
//! every grid, which makes correctness easy to eyeball: against the unit
//! matrix the product must equal A.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tarea::{ColumnMatrix, Matrix, TaskEngine};

/// Task-parallel matrix multiplication demo
#[derive(Parser)]
#[command(name = "tarea")]
#[command(about = "Multiplies a random matrix A with a unit/random matrix B")]
#[command(version)]
struct Cli {
    /// Number of rows in matrix A
    #[arg(long, default_value_t = 5)]
    rows_a: usize,

    /// Number of columns in matrix B (also the shared inner dimension)
    #[arg(long, default_value_t = 5)]
    cols_b: usize,

    /// Fill B with random values instead of the unit matrix
    #[arg(long)]
    random_b: bool,

    /// Exclusive upper bound for random cells
    #[arg(long, default_value_t = 10_000)]
    bound: i64,

    /// Seed for the random generator (drawn from entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let a = Matrix::random(cli.rows_a, cli.cols_b, cli.bound, &mut rng);
    println!("A is:\n{a}");

    let b = if cli.random_b {
        let b = ColumnMatrix::random(cli.cols_b, cli.cols_b, cli.bound, &mut rng);
        println!("B is:\n{b}");
        b
    } else {
        ColumnMatrix::identity(cli.cols_b)
    };

    let engine = TaskEngine::new();
    match engine.multiply(&a, &b) {
        Ok(product) => println!("Multiplied matrix is:\n{product}"),
        Err(err) => {
            eprintln!("multiplication failed: {err}");
            std::process::exit(1);
        }
    }
}
