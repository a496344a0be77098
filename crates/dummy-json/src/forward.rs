//! Forward conversion: DummyValue → JSON value.

use dummy_core::{DummyObject, DummyValue};
use serde_json::json;

/// Wrapper for JSON values.
#[derive(Debug, Clone)]
pub struct JsonValue(pub serde_json::Value);

impl JsonValue {
    /// Get the inner JSON value.
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }

    /// Get a reference to the inner JSON value.
    pub fn as_inner(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<DummyValue> for JsonValue {
    fn from(value: DummyValue) -> Self {
        match value {
            DummyValue::Null => JsonValue(serde_json::Value::Null),
            DummyValue::Bool(b) => JsonValue(json!(b)),
            DummyValue::Int32(i) => JsonValue(json!(i)),
            DummyValue::Int64(i) => JsonValue(json!(i)),
            DummyValue::Float32(f) => JsonValue(json!(f64::from(f))),
            DummyValue::Float64(f) => JsonValue(json!(f)),
            DummyValue::String(s) => JsonValue(json!(s)),

            // Decimal - store as string to preserve precision
            DummyValue::Decimal(d) => JsonValue(json!(d.to_string())),

            // Date/time types - ISO 8601 format
            DummyValue::DateTime(dt) => JsonValue(json!(dt.to_rfc3339())),
            DummyValue::LocalDate(d) => JsonValue(json!(d.format("%Y-%m-%d").to_string())),
            DummyValue::LocalDateTime(dt) => {
                JsonValue(json!(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()))
            }
            DummyValue::LocalTime(t) => JsonValue(json!(t.format("%H:%M:%S%.f").to_string())),

            // Enum - stored as the constant name
            DummyValue::Enum { constant, .. } => JsonValue(json!(constant)),

            DummyValue::List(items) => {
                let json_arr: Vec<serde_json::Value> = items
                    .into_iter()
                    .map(|v| JsonValue::from(v).into_inner())
                    .collect();
                JsonValue(serde_json::Value::Array(json_arr))
            }
            DummyValue::Object(object) => JsonValue::from(object),
        }
    }
}

impl From<DummyObject> for JsonValue {
    fn from(object: DummyObject) -> Self {
        let map: serde_json::Map<String, serde_json::Value> = object
            .into_fields()
            .into_iter()
            .map(|(name, value)| (name, JsonValue::from(value).into_inner()))
            .collect();
        JsonValue(serde_json::Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use rust_decimal::Decimal;

    #[test]
    fn test_scalars() {
        assert_eq!(JsonValue::from(DummyValue::Null).into_inner(), json!(null));
        assert_eq!(JsonValue::from(DummyValue::Int32(7)).into_inner(), json!(7));
        assert_eq!(JsonValue::from(DummyValue::Int64(512)).into_inner(), json!(512));
        assert_eq!(JsonValue::from(DummyValue::Float64(2.5)).into_inner(), json!(2.5));
        assert_eq!(JsonValue::from(DummyValue::Float32(12.5)).into_inner(), json!(12.5));
        assert_eq!(JsonValue::from(DummyValue::Bool(true)).into_inner(), json!(true));
        assert_eq!(
            JsonValue::from(DummyValue::Decimal(Decimal::new(42, 0))).into_inner(),
            json!("42")
        );
    }

    #[test]
    fn test_temporal() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        assert_eq!(
            JsonValue::from(DummyValue::DateTime(dt)).into_inner(),
            json!("2024-06-15T10:30:00+00:00")
        );

        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(
            JsonValue::from(DummyValue::LocalDate(date)).into_inner(),
            json!("2024-06-15")
        );

        let time = NaiveTime::from_hms_opt(10, 30, 5).unwrap();
        assert_eq!(
            JsonValue::from(DummyValue::LocalTime(time)).into_inner(),
            json!("10:30:05")
        );
        assert_eq!(
            JsonValue::from(DummyValue::LocalDateTime(date.and_time(time))).into_inner(),
            json!("2024-06-15T10:30:05")
        );
    }

    #[test]
    fn test_enum_constant() {
        let value = DummyValue::Enum {
            type_name: "PhoneKind".to_string(),
            constant: "MOBILE".to_string(),
        };
        assert_eq!(JsonValue::from(value).into_inner(), json!("MOBILE"));
    }

    #[test]
    fn test_nested_object_keeps_field_order() {
        let mut phone = DummyObject::with_fields("Phone", ["number", "extension"]);
        phone.set("number", DummyValue::String("ABC".to_string()));

        let mut person = DummyObject::with_fields("Person", ["name", "phones", "age"]);
        person.set("name", DummyValue::String("JOHN".to_string()));
        person.set("phones", DummyValue::List(vec![DummyValue::Object(phone)]));
        person.set("age", DummyValue::Int32(5));

        let json = JsonValue::from(person).into_inner();
        assert_eq!(
            json,
            json!({
                "name": "JOHN",
                "phones": [{"number": "ABC", "extension": null}],
                "age": 5
            })
        );

        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "phones", "age"]);
    }
}
