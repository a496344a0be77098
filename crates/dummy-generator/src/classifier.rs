//! Field type classification.
//!
//! Maps a declared [`TypeRef`] to exactly one [`FieldShape`]. Checks run in a
//! fixed order: enumeration, collection, primitive, recognized scalar, and
//! finally composite. A registered composite is never read as a collection,
//! whatever its name.

use crate::error::PopulateError;
use dummy_core::{is_collection_name, FieldShape, PrimitiveKind, ScalarKind, TypeRef, TypeRegistry};
use tracing::debug;

/// Classify a declared field type.
pub fn classify(ty: &TypeRef, registry: &TypeRegistry) -> Result<FieldShape, PopulateError> {
    // An enumeration wins regardless of its name
    if registry.is_enum(&ty.name) {
        return Ok(FieldShape::Enumeration(ty.name.clone()));
    }

    if is_collection_name(&ty.name) && registry.get_type(&ty.name).is_none() {
        debug!("Field type '{}' is a collection", ty);
        let element = ty.argument().ok_or_else(|| {
            PopulateError::type_resolution(
                ty.name.clone(),
                "raw collection without an element type",
            )
        })?;
        if !resolves(element, registry) {
            return Err(PopulateError::type_resolution(
                element.to_string(),
                format!("unknown element type of '{ty}'"),
            ));
        }
        debug!("Resolved element type '{}'", element);
        return Ok(FieldShape::Collection(element.clone()));
    }

    if let Some(kind) = PrimitiveKind::from_type_name(&ty.name) {
        return Ok(FieldShape::Primitive(kind));
    }

    // Recognized scalar names are matched before falling through to composite
    if let Some(kind) = ScalarKind::from_type_name(&ty.name) {
        return Ok(FieldShape::BoxedScalar(kind));
    }

    Ok(FieldShape::Composite(ty.name.clone()))
}

/// Check whether a type reference resolves to a known type.
///
/// Primitives, recognized scalars, registered enums and composites resolve;
/// a collection resolves when it is parameterized with a resolvable type.
pub fn resolves(ty: &TypeRef, registry: &TypeRegistry) -> bool {
    if registry.contains(&ty.name) {
        return true;
    }
    if is_collection_name(&ty.name) {
        return ty.argument().is_some_and(|arg| resolves(arg, registry));
    }
    PrimitiveKind::from_type_name(&ty.name).is_some()
        || ScalarKind::from_type_name(&ty.name).is_some()
}
