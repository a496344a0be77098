//! Individual value generators for the field kinds.
//!
//! This module provides the random value generators and the fixed ranges the
//! population engine uses for each primitive and scalar kind.

pub mod enumeration;
pub mod numeric;
pub mod string;
pub mod temporal;

pub use enumeration::random_enum_constant;
pub use numeric::{random_bool, random_decimal, random_double, random_float, random_int, random_long};
pub use string::random_string;

use crate::error::PopulateError;
use dummy_core::{DummyValue, PrimitiveKind, ScalarKind};
use rand::Rng;

/// Characters used for generated strings.
pub const ALPHABET: &str = "ABCDEFHIJKLMNOPQRSTUVWXYZ -";

/// Length of generated strings.
pub const STRING_LENGTH: usize = 10;

/// Range for 32-bit integers.
pub const INT_RANGE: (i32, i32) = (1, 10);

/// Range for 64-bit integers.
pub const LONG_RANGE: (i64, i64) = (100, 1000);

/// Range for 32-bit floats.
pub const FLOAT_RANGE: (f32, f32) = (10.0, 100.0);

/// Range for 64-bit floats.
pub const DOUBLE_RANGE: (f64, f64) = (1.0, 10.0);

/// Range for decimals (whole numbers).
pub const DECIMAL_RANGE: (i32, i32) = (10, 100);

/// Generate a value for a primitive kind.
///
/// Returns `None` for kinds without a generator.
pub fn primitive_value<R: Rng>(rng: &mut R, kind: PrimitiveKind) -> Option<DummyValue> {
    let value = match kind {
        PrimitiveKind::Int32 => DummyValue::Int32(random_int(rng, INT_RANGE.0, INT_RANGE.1)),
        PrimitiveKind::Int64 => DummyValue::Int64(random_long(rng, LONG_RANGE.0, LONG_RANGE.1)),
        PrimitiveKind::Float32 => {
            DummyValue::Float32(random_float(rng, FLOAT_RANGE.0, FLOAT_RANGE.1))
        }
        PrimitiveKind::Float64 => {
            DummyValue::Float64(random_double(rng, DOUBLE_RANGE.0, DOUBLE_RANGE.1))
        }
        PrimitiveKind::Bool => DummyValue::Bool(random_bool(rng)),
        PrimitiveKind::Int16 | PrimitiveKind::Int8 | PrimitiveKind::Char => return None,
    };
    Some(value)
}

/// Generate a value for a boxed/standard scalar kind.
///
/// Numeric kinds share the primitive ranges. Returns `Ok(None)` for kinds
/// without a generator.
pub fn scalar_value<R: Rng>(
    rng: &mut R,
    kind: ScalarKind,
) -> Result<Option<DummyValue>, PopulateError> {
    let value = match kind {
        ScalarKind::String => DummyValue::String(random_string(rng, STRING_LENGTH, ALPHABET)?),
        ScalarKind::Integer => return Ok(primitive_value(rng, PrimitiveKind::Int32)),
        ScalarKind::Long => return Ok(primitive_value(rng, PrimitiveKind::Int64)),
        ScalarKind::Float => return Ok(primitive_value(rng, PrimitiveKind::Float32)),
        ScalarKind::Double => return Ok(primitive_value(rng, PrimitiveKind::Float64)),
        ScalarKind::Boolean => return Ok(primitive_value(rng, PrimitiveKind::Bool)),
        ScalarKind::Decimal => {
            DummyValue::Decimal(random_decimal(rng, DECIMAL_RANGE.0, DECIMAL_RANGE.1))
        }
        ScalarKind::Date
        | ScalarKind::Instant
        | ScalarKind::Timestamp
        | ScalarKind::LocalDate
        | ScalarKind::LocalDateTime
        | ScalarKind::LocalTime => return Ok(temporal::now(kind)),
        ScalarKind::Short | ScalarKind::Byte | ScalarKind::Character => return Ok(None),
    };
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_primitive_ranges() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let i = primitive_value(&mut rng, PrimitiveKind::Int32).unwrap();
            assert!((1..10).contains(&i.as_i32().unwrap()));

            let l = primitive_value(&mut rng, PrimitiveKind::Int64).unwrap();
            assert!((100..1000).contains(&l.as_i64().unwrap()));

            let f = primitive_value(&mut rng, PrimitiveKind::Float32).unwrap();
            assert!((10.0..100.0).contains(&f.as_f32().unwrap()));

            let d = primitive_value(&mut rng, PrimitiveKind::Float64).unwrap();
            assert!((1.0..10.0).contains(&d.as_f64().unwrap()));

            let b = primitive_value(&mut rng, PrimitiveKind::Bool).unwrap();
            assert!(b.as_bool().is_some());
        }
    }

    #[test]
    fn test_primitive_without_generator() {
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(primitive_value(&mut rng, PrimitiveKind::Int16), None);
        assert_eq!(primitive_value(&mut rng, PrimitiveKind::Int8), None);
        assert_eq!(primitive_value(&mut rng, PrimitiveKind::Char), None);
    }

    #[test]
    fn test_scalar_string() {
        let mut rng = StdRng::seed_from_u64(42);

        let value = scalar_value(&mut rng, ScalarKind::String).unwrap().unwrap();
        let s = value.as_str().unwrap();
        assert_eq!(s.chars().count(), STRING_LENGTH);
        assert!(s.chars().all(|c| ALPHABET.contains(c)));
    }

    #[test]
    fn test_scalar_numeric_shares_primitive_ranges() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let i = scalar_value(&mut rng, ScalarKind::Integer).unwrap().unwrap();
            assert!((1..10).contains(&i.as_i32().unwrap()));

            let l = scalar_value(&mut rng, ScalarKind::Long).unwrap().unwrap();
            assert!((100..1000).contains(&l.as_i64().unwrap()));
        }
    }

    #[test]
    fn test_scalar_decimal_and_temporal() {
        let mut rng = StdRng::seed_from_u64(42);

        assert!(matches!(
            scalar_value(&mut rng, ScalarKind::Decimal).unwrap(),
            Some(DummyValue::Decimal(_))
        ));
        assert!(matches!(
            scalar_value(&mut rng, ScalarKind::Date).unwrap(),
            Some(DummyValue::DateTime(_))
        ));
        assert!(matches!(
            scalar_value(&mut rng, ScalarKind::LocalTime).unwrap(),
            Some(DummyValue::LocalTime(_))
        ));
    }

    #[test]
    fn test_scalar_without_generator() {
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(scalar_value(&mut rng, ScalarKind::Short).unwrap(), None);
        assert_eq!(scalar_value(&mut rng, ScalarKind::Character).unwrap(), None);
    }
}
