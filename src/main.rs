//! Command-line interface for dummy-objects
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Three Person instances as pretty JSON on stdout
//! dummy-objects generate --schema schemas/person.yaml --type Person
//!
//! # Reproducible JSON lines
//! dummy-objects generate --schema schemas/person.yaml --type Person \
//!   --count 1000 --seed 42 --format jsonl --output people.jsonl
//!
//! # Limit nesting and show unhandled fields
//! RUST_LOG=warn dummy-objects generate --schema schemas/person.yaml \
//!   --type Person --max-depth 2
//! ```
//!
//! ## Inspect
//! ```bash
//! dummy-objects inspect --schema schemas/person.yaml
//! ```

use clap::{Parser, Subcommand};
use dummy_objects::generate::run_generate;
use dummy_objects::inspect::run_inspect;
use dummy_objects::{GenerateOpts, InspectOpts};

#[derive(Parser)]
#[command(name = "dummy-objects")]
#[command(about = "Populate data types described in a YAML schema with random dummy values")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate populated instances of a type
    Generate {
        #[command(flatten)]
        args: GenerateOpts,
    },

    /// Show how every field of every registered type is classified
    Inspect {
        #[command(flatten)]
        args: InspectOpts,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            run_generate(args)?;
        }
        Commands::Inspect { args } => {
            run_inspect(args)?;
        }
    }

    Ok(())
}
