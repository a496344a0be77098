//! Numeric value generators.
//!
//! All ranges are half-open: `min` is inclusive, `max` exclusive. Passing
//! `min >= max` panics, as the underlying `rand` range sampling does.

use rand::Rng;
use rust_decimal::Decimal;

/// Generate a random i32 in `[min, max)`.
pub fn random_int<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.gen_range(min..max)
}

/// Generate a random i64 in `[min, max)`.
pub fn random_long<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..max)
}

/// Generate a random f32 in `[min, max)`.
pub fn random_float<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.gen_range(min..max)
}

/// Generate a random f64 in `[min, max)`.
pub fn random_double<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen_range(min..max)
}

/// Generate a random boolean.
pub fn random_bool<R: Rng>(rng: &mut R) -> bool {
    rng.gen()
}

/// Generate a whole-number decimal in `[min, max)`.
pub fn random_decimal<R: Rng>(rng: &mut R, min: i32, max: i32) -> Decimal {
    Decimal::from(random_int(rng, min, max))
}
