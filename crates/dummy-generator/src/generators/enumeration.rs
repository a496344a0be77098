//! Enumeration constant picker.

use crate::error::PopulateError;
use dummy_core::TypeRegistry;
use rand::seq::SliceRandom;
use rand::Rng;

/// Select one constant of the named enumeration uniformly at random.
pub fn random_enum_constant<R: Rng>(
    rng: &mut R,
    registry: &TypeRegistry,
    type_name: &str,
) -> Result<String, PopulateError> {
    let descriptor = registry
        .get_enum(type_name)
        .ok_or_else(|| PopulateError::NotAnEnum(type_name.to_string()))?;

    descriptor
        .constants
        .choose(rng)
        .cloned()
        .ok_or_else(|| PopulateError::EmptyEnum(type_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dummy_core::{EnumDescriptor, FieldDescriptor, TypeDescriptor};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .register_enum(EnumDescriptor::new("Dummy", ["ONE", "TWO", "THREE"]))
            .unwrap();
        registry
            .register_enum(EnumDescriptor::new("Empty", Vec::<String>::new()))
            .unwrap();
        registry
            .register_type(TypeDescriptor::new(
                "Holder",
                vec![FieldDescriptor::new("text", "String")],
            ))
            .unwrap();
        registry
    }

    #[test]
    fn test_picks_declared_constant() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let constant = random_enum_constant(&mut rng, &registry, "Dummy").unwrap();
            assert!(["ONE", "TWO", "THREE"].contains(&constant.as_str()));
        }
    }

    #[test]
    fn test_non_enum_type() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);

        assert!(matches!(
            random_enum_constant(&mut rng, &registry, "Holder"),
            Err(PopulateError::NotAnEnum(name)) if name == "Holder"
        ));
        assert!(matches!(
            random_enum_constant(&mut rng, &registry, "String"),
            Err(PopulateError::NotAnEnum(_))
        ));
    }

    #[test]
    fn test_empty_enum() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);

        assert!(matches!(
            random_enum_constant(&mut rng, &registry, "Empty"),
            Err(PopulateError::EmptyEnum(_))
        ));
    }
}
