//! Date/time value generators.
//!
//! Temporal kinds are not random: every kind yields the current wall-clock
//! value, so these are NOT deterministic under a seeded RNG.

use chrono::{Local, SubsecRound, Utc};
use dummy_core::{DummyValue, ScalarKind};

/// Generate the current value for a temporal scalar kind.
///
/// `Date` and `Timestamp` carry millisecond precision, `Instant` the full
/// clock precision. Local kinds use the local time zone. Returns `None` for
/// non-temporal kinds.
pub fn now(kind: ScalarKind) -> Option<DummyValue> {
    let value = match kind {
        ScalarKind::Date | ScalarKind::Timestamp => DummyValue::DateTime(Utc::now().trunc_subsecs(3)),
        ScalarKind::Instant => DummyValue::DateTime(Utc::now()),
        ScalarKind::LocalDate => DummyValue::LocalDate(Local::now().date_naive()),
        ScalarKind::LocalDateTime => DummyValue::LocalDateTime(Local::now().naive_local()),
        ScalarKind::LocalTime => DummyValue::LocalTime(Local::now().time()),
        _ => return None,
    };
    Some(value)
}
