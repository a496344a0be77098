//! Inspect command handler.

use crate::InspectOpts;
use anyhow::Context;
use dummy_core::TypeRegistry;
use dummy_core::FieldShape;
use dummy_generator::classifier::{classify, resolves};
use serde::Serialize;

/// Classification of every field of one type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeReport {
    pub name: String,
    pub constructible: bool,
    pub fields: Vec<FieldReport>,
}

/// Classification of one field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report for a whole registry.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub types: Vec<TypeReport>,
    pub enums: Vec<String>,
}

/// Classify every field of every registered type.
pub fn inspect_registry(registry: &TypeRegistry) -> InspectReport {
    let types = registry
        .types
        .iter()
        .map(|descriptor| TypeReport {
            name: descriptor.name.clone(),
            constructible: descriptor.constructible,
            fields: descriptor
                .fields
                .iter()
                .map(|field| {
                    let (shape, error) = match classify(&field.field_type, registry) {
                        // Population fails on an unregistered composite
                        Ok(FieldShape::Composite(name)) if !resolves(&field.field_type, registry) => (
                            None,
                            Some(format!(
                                "Failed to resolve type '{name}': no type registered under this name"
                            )),
                        ),
                        Ok(shape) => (Some(shape.to_string()), None),
                        Err(e) => (None, Some(e.to_string())),
                    };
                    FieldReport {
                        name: field.name.clone(),
                        field_type: field.field_type.to_string(),
                        shape,
                        error,
                    }
                })
                .collect(),
        })
        .collect();

    InspectReport {
        types,
        enums: registry.enums.iter().map(|e| e.name.clone()).collect(),
    }
}

/// Run the inspect command.
pub fn run_inspect(args: InspectOpts) -> anyhow::Result<()> {
    let registry = TypeRegistry::from_file(&args.schema.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema.schema))?;

    let report = inspect_registry(&registry);
    let yaml = serde_yaml::to_string(&report).context("Failed to serialize report")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &yaml)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Generated: {}", path.display());
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
