//! Command-line interface for staffgen
//!
//! # Usage Examples
//!
//! ## Summarize a generated population
//! ```bash
//! # Print the statistics summary for 50 employees aged 19-65
//! staffgen run --count 50 --min-age 19 --max-age 65
//!
//! # Deterministic output with a fixed seed, pretty-printed
//! staffgen run --count 50 --min-age 19 --max-age 65 --seed 42 --pretty
//!
//! # Read the input record from a JSON file instead of flags
//! staffgen run --input input.json
//! ```
//!
//! ## Export a population
//! ```bash
//! # Write 1000 employees as JSONL for external tooling
//! staffgen populate --count 1000 --min-age 19 --max-age 65 --seed 42 \
//!   --output population.jsonl
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use staff_core::AgeRange;
use staff_generator::EmployeeGenerator;
use staff_jsonl::JsonlExporter;
use staffgen::RunInput;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "staffgen")]
#[command(about = "Generate synthetic employee populations and compute statistics over them")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a population and print its statistics summary as JSON
    Run {
        #[command(flatten)]
        population: PopulationArgs,

        /// Read the input record from a JSON file instead of flags
        #[arg(long, value_name = "PATH", conflicts_with_all = ["count", "min_age", "max_age"])]
        input: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Generate a population and write it to a JSONL file
    Populate {
        #[command(flatten)]
        population: PopulationArgs,

        /// Output JSONL path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}

/// Population shape arguments shared by all subcommands.
#[derive(Args, Clone, Debug)]
struct PopulationArgs {
    /// Number of employees to generate
    #[arg(long, default_value = "50")]
    count: u64,

    /// Minimum age in years
    #[arg(long, default_value = "19")]
    min_age: f64,

    /// Maximum age in years
    #[arg(long, default_value = "65")]
    max_age: f64,

    /// Random seed for deterministic generation (same seed = same population)
    #[arg(long)]
    seed: Option<u64>,
}

impl PopulationArgs {
    fn age_range(&self) -> AgeRange {
        AgeRange {
            min: self.min_age,
            max: self.max_age,
        }
    }

    fn generator(&self) -> EmployeeGenerator {
        match self.seed {
            Some(seed) => EmployeeGenerator::new(seed),
            None => EmployeeGenerator::from_entropy(),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            population,
            input,
            pretty,
        } => {
            let run_input = match input {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read input record from {path:?}"))?;
                    serde_json::from_str(&raw)
                        .with_context(|| format!("Failed to parse input record from {path:?}"))?
                }
                None => RunInput {
                    count: population.count,
                    age: population.age_range(),
                },
            };

            tracing::info!(
                "Generating {} employees aged {}-{}",
                run_input.count,
                run_input.age.min,
                run_input.age.max
            );

            let summary = match population.seed {
                Some(seed) => staffgen::run_seeded(&run_input, seed)?,
                None => staffgen::run(&run_input)?,
            };

            let json = if pretty {
                serde_json::to_string_pretty(&summary)?
            } else {
                serde_json::to_string(&summary)?
            };
            println!("{json}");
        }

        Commands::Populate { population, output } => {
            tracing::info!(
                "Generating {} employees aged {}-{} for JSONL export",
                population.count,
                population.min_age,
                population.max_age
            );

            let employees = population
                .generator()
                .generate(population.count, &population.age_range())
                .context("Failed to generate employee population")?;

            let metrics = JsonlExporter::new()
                .export(&employees, &output)
                .with_context(|| format!("Failed to write JSONL to {output:?}"))?;

            tracing::info!(
                "Wrote {:?}: {} rows in {:?} ({:.2} rows/sec)",
                output,
                metrics.rows_written,
                metrics.total_duration,
                metrics.rows_per_second()
            );
        }
    }

    Ok(())
}
