//! Dummy Objects Library
//!
//! Populates arbitrary data types with random dummy values for tests and
//! prototypes. Types are described in a YAML schema or declared in Rust with
//! the [`dummy_object!`] and [`dummy_enum!`] macros.
//!
//! # Crates
//!
//! - `dummy_core` - Type references, descriptors and generated values
//! - `dummy_generator` - Classifier, value generators and population engine
//! - `dummy_json` - JSON conversion of generated values
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate three Person instances as pretty JSON
//! dummy-objects generate --schema schemas/person.yaml --type Person
//!
//! # Deterministic JSON lines written to a file
//! dummy-objects generate --schema schemas/person.yaml --type Person \
//!   --count 100 --seed 42 --format jsonl --output people.jsonl
//!
//! # Show how every field of every type is classified
//! dummy-objects inspect --schema schemas/person.yaml
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub mod generate;
pub mod inspect;

pub use dummy_core;
pub use dummy_generator::*;
pub use dummy_json;

/// Output format for generated instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A single pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
    /// Rust debug representation
    Debug,
}

#[derive(Parser, Clone, Debug)]
pub struct SchemaOpts {
    /// Path to the YAML type schema
    #[arg(long, env = "DUMMY_SCHEMA")]
    pub schema: PathBuf,
}

#[derive(Parser, Clone, Debug)]
pub struct GenerateOpts {
    /// Schema options
    #[command(flatten)]
    pub schema: SchemaOpts,

    /// Name of the type to populate
    #[arg(long = "type")]
    pub type_name: String,

    /// Number of instances to generate
    #[arg(long, default_value = "3")]
    pub count: usize,

    /// Seed for deterministic output (overrides the schema's seed)
    #[arg(long, env = "DUMMY_SEED")]
    pub seed: Option<u64>,

    /// Maximum nested composite depth (overrides the schema's max_depth)
    #[arg(long, env = "DUMMY_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone, Debug)]
pub struct InspectOpts {
    /// Schema options
    #[command(flatten)]
    pub schema: SchemaOpts,

    /// Output file (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}
