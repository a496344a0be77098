//! JSON conversions for dummy-objects generated values.
//!
//! This crate converts [`DummyValue`](dummy_core::DummyValue) and
//! [`DummyObject`](dummy_core::DummyObject) into `serde_json` values.
//! Object fields keep their declaration order.
//!
//! # Example
//!
//! ```rust
//! use dummy_core::{DummyObject, DummyValue};
//! use dummy_json::JsonValue;
//!
//! let mut phone = DummyObject::with_fields("Phone", ["number"]);
//! phone.set("number", DummyValue::String("ABC".to_string()));
//!
//! let json = JsonValue::from(phone).into_inner();
//! assert_eq!(json, serde_json::json!({"number": "ABC"}));
//! ```

pub mod forward;

pub use forward::JsonValue;
