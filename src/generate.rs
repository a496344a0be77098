//! Generate command handler.

use crate::{GenerateOpts, OutputFormat};
use anyhow::Context;
use dummy_core::{DummyObject, TypeRegistry};
use dummy_generator::{Populator, PopulatorConfig};
use dummy_json::JsonValue;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Run the generate command.
pub fn run_generate(args: GenerateOpts) -> anyhow::Result<()> {
    let registry = TypeRegistry::from_file(&args.schema.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema.schema))?;

    let mut config = PopulatorConfig::from_registry(&registry);
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }

    match args.seed.or(registry.seed) {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            let mut populator = Populator::seeded(registry, seed).with_config(config);
            generate_with(&mut populator, &args)
        }
        None => {
            let mut populator = Populator::new(registry).with_config(config);
            generate_with(&mut populator, &args)
        }
    }
}

fn generate_with<R: Rng>(populator: &mut Populator<R>, args: &GenerateOpts) -> anyhow::Result<()> {
    tracing::info!(
        "Generating {} instances of '{}' (max depth {})",
        args.count,
        args.type_name,
        populator.config().max_depth
    );

    // Unhandled fields are logged by the engine as each instance is built
    let type_name = args.type_name.as_str();
    let instances = populator
        .instances(type_name, args.count)
        .enumerate()
        .map(|(index, instance)| {
            instance
                .with_context(|| format!("Failed to populate instance {index} of '{type_name}'"))
        });

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            write_instances(BufWriter::new(file), instances, args.format)?;
            tracing::info!("Generated: {}", path.display());
        }
        None => {
            write_instances(BufWriter::new(io::stdout().lock()), instances, args.format)?;
        }
    }

    Ok(())
}

/// Write instances in the requested format.
///
/// `jsonl` and `debug` write each instance as soon as it is produced; `json`
/// collects the whole array first so that a failed population leaves no
/// partial document.
pub fn write_instances<W, I>(mut writer: W, instances: I, format: OutputFormat) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = anyhow::Result<DummyObject>>,
{
    match format {
        OutputFormat::Json => {
            let array = instances
                .into_iter()
                .map(|instance| instance.map(|i| JsonValue::from(i).into_inner()))
                .collect::<anyhow::Result<Vec<serde_json::Value>>>()?;
            serde_json::to_writer_pretty(&mut writer, &array).context("Failed to write output")?;
            writeln!(writer).context("Failed to write output")?;
        }
        OutputFormat::Jsonl => {
            for instance in instances {
                let json = JsonValue::from(instance?);
                serde_json::to_writer(&mut writer, json.as_inner())
                    .context("Failed to write output")?;
                writeln!(writer).context("Failed to write output")?;
            }
        }
        OutputFormat::Debug => {
            for instance in instances {
                writeln!(writer, "{:#?}", instance?).context("Failed to write output")?;
            }
        }
    }
    writer.flush().context("Failed to write output")?;
    Ok(())
}
