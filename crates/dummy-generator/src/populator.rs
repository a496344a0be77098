//! Population engine for producing dummy instances.

use crate::classifier::classify;
use crate::error::PopulateError;
use crate::generators::{self, random_enum_constant};
use crate::typed::Dummy;
use dummy_core::{DummyObject, DummyValue, FieldShape, TypeRef, TypeRegistry};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, trace, warn};

/// Number of elements generated for every collection field.
pub const COLLECTION_SIZE: usize = 3;

/// Default limit on nested composite depth.
pub const DEFAULT_MAX_DEPTH: usize = 16;

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Configuration for the population engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulatorConfig {
    /// Maximum number of composite types on a single recursion path
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for PopulatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PopulatorConfig {
    /// Build a configuration from the settings carried by a registry.
    pub fn from_registry(registry: &TypeRegistry) -> Self {
        Self {
            max_depth: registry.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        }
    }
}

/// Why a field was left at its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnhandledReason {
    /// The field's kind is recognized but has no generator
    NoGenerator,
    /// The composite type already appears on the current recursion path
    RecursionCycle,
    /// The recursion path reached the configured depth limit
    DepthLimit,
}

impl fmt::Display for UnhandledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGenerator => f.write_str("no generator for this kind"),
            Self::RecursionCycle => f.write_str("type recurses into itself"),
            Self::DepthLimit => f.write_str("maximum depth reached"),
        }
    }
}

/// A field the engine did not populate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledField {
    /// Field path from the root instance, e.g. `phones[0].extension`
    pub path: String,
    /// Declared type name of the field (or collection element)
    pub type_name: String,
    /// Reason the field was skipped
    pub reason: UnhandledReason,
}

/// A populated instance together with the fields left unpopulated.
#[derive(Debug, Clone)]
pub struct Population<T> {
    /// The populated instance
    pub instance: T,
    /// Fields left at their default value
    pub unhandled: Vec<UnhandledField>,
}

impl<T> Population<T> {
    /// Check if every reachable field was populated.
    pub fn is_complete(&self) -> bool {
        self.unhandled.is_empty()
    }
}

/// Population engine that fills instances with random values.
///
/// The engine holds no state between calls besides its random source. The
/// default source is the lazily initialised per-thread `ThreadRng`, which
/// makes `Populator<ThreadRng>` `!Send`: use one populator per thread. A
/// seeded `Populator<StdRng>` can be moved across threads.
pub struct Populator<R = ThreadRng> {
    /// Registered composite and enum types
    registry: TypeRegistry,
    /// Random source
    rng: R,
    /// Engine configuration
    config: PopulatorConfig,
}

impl Populator<ThreadRng> {
    /// Create a populator using the thread-local random source.
    pub fn new(registry: TypeRegistry) -> Self {
        Self::with_rng(registry, rand::thread_rng())
    }
}

impl Default for Populator<ThreadRng> {
    fn default() -> Self {
        Self::new(TypeRegistry::new())
    }
}

impl Populator<StdRng> {
    /// Create a populator with a seeded random source.
    pub fn seeded(registry: TypeRegistry, seed: u64) -> Self {
        Self::with_rng(registry, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Populator<R> {
    /// Create a populator with an injected random source.
    pub fn with_rng(registry: TypeRegistry, rng: R) -> Self {
        let config = PopulatorConfig::from_registry(&registry);
        Self {
            registry,
            rng,
            config,
        }
    }

    /// Replace the engine configuration.
    pub fn with_config(mut self, config: PopulatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &PopulatorConfig {
        &self.config
    }

    /// Get a reference to the registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Register a typed declaration and every type it reaches.
    pub fn register<T: crate::typed::DummyField>(&mut self) -> Result<(), PopulateError> {
        T::register(&mut self.registry)
    }

    /// Populate a single instance of the named type.
    pub fn populate(&mut self, type_name: &str) -> Result<DummyObject, PopulateError> {
        self.populate_with_report(type_name).map(|p| p.instance)
    }

    /// Populate a single instance, reporting fields left unpopulated.
    pub fn populate_with_report(
        &mut self,
        type_name: &str,
    ) -> Result<Population<DummyObject>, PopulateError> {
        let mut walker = Walker::new(&self.registry, &mut self.rng, self.config.max_depth);
        let instance = walker.populate_object(type_name)?;
        Ok(Population {
            instance,
            unhandled: walker.finish(),
        })
    }

    /// Populate `count` independent instances of the named type.
    pub fn populate_many(
        &mut self,
        type_name: &str,
        count: usize,
    ) -> Result<Vec<DummyObject>, PopulateError> {
        info!("Populating {} instances of '{}'", count, type_name);
        self.instances(type_name, count).collect()
    }

    /// Lazily populate `count` independent instances of the named type.
    pub fn instances(&mut self, type_name: &str, count: usize) -> InstanceIterator<'_, R> {
        InstanceIterator {
            populator: self,
            type_name: type_name.to_string(),
            remaining: count,
        }
    }

    /// Create a populated instance of a typed declaration.
    pub fn create<T: Dummy>(&mut self) -> Result<T, PopulateError> {
        self.create_with_report::<T>().map(|p| p.instance)
    }

    /// Create a populated typed instance, reporting fields left unpopulated.
    ///
    /// The instance is constructed first; each field is then generated and
    /// written through its setter in declaration order.
    pub fn create_with_report<T: Dummy>(&mut self) -> Result<Population<T>, PopulateError> {
        T::register(&mut self.registry)?;

        let mut instance = T::construct()
            .map_err(|reason| PopulateError::construction(T::TYPE_NAME, reason))?;

        let mut walker = Walker::new(&self.registry, &mut self.rng, self.config.max_depth);
        walker.stack.push(T::TYPE_NAME);
        for setter in T::fields() {
            walker.path.push(setter.name.to_string());
            trace!("Populating field '{}' of '{}'", walker.path_string(), T::TYPE_NAME);
            let value = walker.generate(&setter.ty)?;
            walker.path.pop();
            (setter.set)(&mut instance, value)?;
        }

        Ok(Population {
            instance,
            unhandled: walker.finish(),
        })
    }

    /// Create `count` independent populated typed instances.
    pub fn create_many<T: Dummy>(&mut self, count: usize) -> Result<Vec<T>, PopulateError> {
        info!("Creating {} instances of '{}'", count, T::TYPE_NAME);
        (0..count).map(|_| self.create::<T>()).collect()
    }
}

/// Iterator that lazily populates instances.
pub struct InstanceIterator<'p, R> {
    populator: &'p mut Populator<R>,
    type_name: String,
    remaining: usize,
}

impl<R: Rng> Iterator for InstanceIterator<'_, R> {
    type Item = Result<DummyObject, PopulateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.populator.populate(&self.type_name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for InstanceIterator<'_, R> {}

/// State of a single population pass.
struct Walker<'a, R> {
    registry: &'a TypeRegistry,
    rng: &'a mut R,
    max_depth: usize,
    /// Composite types on the current recursion path
    stack: Vec<&'a str>,
    /// Field path segments from the root
    path: Vec<String>,
    unhandled: Vec<UnhandledField>,
}

impl<'a, R: Rng> Walker<'a, R> {
    fn new(registry: &'a TypeRegistry, rng: &'a mut R, max_depth: usize) -> Self {
        Self {
            registry,
            rng,
            max_depth,
            stack: Vec::new(),
            path: Vec::new(),
            unhandled: Vec::new(),
        }
    }

    fn finish(self) -> Vec<UnhandledField> {
        for field in &self.unhandled {
            warn!(
                "Field '{}' ({}) left unpopulated: {}",
                field.path, field.type_name, field.reason
            );
        }
        self.unhandled
    }

    fn populate_object(&mut self, type_name: &str) -> Result<DummyObject, PopulateError> {
        let registry: &'a TypeRegistry = self.registry;
        let descriptor = registry.get_type(type_name).ok_or_else(|| {
            PopulateError::type_resolution(type_name, "no type registered under this name")
        })?;

        let mut instance = descriptor.instantiate().ok_or_else(|| {
            PopulateError::construction(type_name, "type has no no-argument constructor")
        })?;

        self.stack.push(&descriptor.name);
        for field in &descriptor.fields {
            if field.read_only {
                return Err(PopulateError::FieldAccess {
                    type_name: descriptor.name.clone(),
                    field: field.name.clone(),
                    reason: "field is read-only".to_string(),
                });
            }

            self.path.push(field.name.clone());
            trace!("Populating field '{}' of '{}'", self.path_string(), descriptor.name);
            let value = self.generate(&field.field_type)?;
            self.path.pop();

            instance.set(&field.name, value);
        }
        self.stack.pop();

        Ok(instance)
    }

    fn generate(&mut self, ty: &TypeRef) -> Result<DummyValue, PopulateError> {
        match classify(ty, self.registry)? {
            FieldShape::Primitive(kind) => match generators::primitive_value(&mut *self.rng, kind) {
                Some(value) => Ok(value),
                None => {
                    self.report(kind.type_name(), UnhandledReason::NoGenerator);
                    Ok(DummyValue::Null)
                }
            },
            FieldShape::BoxedScalar(kind) => match generators::scalar_value(&mut *self.rng, kind)? {
                Some(value) => Ok(value),
                None => {
                    self.report(kind.type_name(), UnhandledReason::NoGenerator);
                    Ok(DummyValue::Null)
                }
            },
            FieldShape::Enumeration(type_name) => {
                let constant = random_enum_constant(&mut *self.rng, self.registry, &type_name)?;
                Ok(DummyValue::Enum {
                    type_name,
                    constant,
                })
            }
            FieldShape::Collection(element) => self.generate_collection(&element),
            FieldShape::Composite(type_name) => match self.guard(&type_name) {
                Some(reason) => {
                    self.report(&type_name, reason);
                    Ok(DummyValue::Null)
                }
                None => Ok(DummyValue::Object(self.populate_object(&type_name)?)),
            },
        }
    }

    fn generate_collection(&mut self, element: &TypeRef) -> Result<DummyValue, PopulateError> {
        // A collection of a type already on the path is cut to an empty list
        if let FieldShape::Composite(type_name) = classify(element, self.registry)? {
            if let Some(reason) = self.guard(&type_name) {
                self.report(&type_name, reason);
                return Ok(DummyValue::List(Vec::new()));
            }
        }

        let mut items = Vec::with_capacity(COLLECTION_SIZE);
        for index in 0..COLLECTION_SIZE {
            self.path.push(format!("[{index}]"));
            items.push(self.generate(element)?);
            self.path.pop();
        }
        Ok(DummyValue::List(items))
    }

    fn guard(&self, type_name: &str) -> Option<UnhandledReason> {
        if self.stack.iter().any(|t| *t == type_name) {
            Some(UnhandledReason::RecursionCycle)
        } else if self.stack.len() >= self.max_depth {
            Some(UnhandledReason::DepthLimit)
        } else {
            None
        }
    }

    fn report(&mut self, type_name: &str, reason: UnhandledReason) {
        self.unhandled.push(UnhandledField {
            path: self.path_string(),
            type_name: type_name.to_string(),
            reason,
        });
    }

    fn path_string(&self) -> String {
        let mut path = String::new();
        for segment in &self.path {
            if !path.is_empty() && !segment.starts_with('[') {
                path.push('.');
            }
            path.push_str(segment);
        }
        path
    }
}
