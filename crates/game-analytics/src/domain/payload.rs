//! Ordered payload mapping
//!
//! Field order is insertion order. Re-setting a key replaces its value in
//! place, so the key keeps its original position and is never duplicated.
//!
//! The infallible setters take a [`FieldValue`], which has no impl for
//! `f32`/`f64`: a NaN or infinite float has no JSON form, so floats go
//! through [`Payload::try_set_field`] (or an already-built `Value`).

use serde::Serialize;
use serde_json::{Map, Value};

use super::finite::ensure_finite;
use crate::error::GaError;

/// Value accepted by the infallible field setters.
///
/// Every implementor converts to JSON without loss.
pub trait FieldValue {
    fn into_value(self) -> Value;
}

impl FieldValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FieldValue for Map<String, Value> {
    fn into_value(self) -> Value {
        Value::Object(self)
    }
}

impl FieldValue for Vec<Value> {
    fn into_value(self) -> Value {
        Value::Array(self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn into_value(self) -> Value {
        self.map_or(Value::Null, FieldValue::into_value)
    }
}

macro_rules! field_value_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn into_value(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

field_value_via_from!(
    bool, String, &str, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize,
);

impl FieldValue for &String {
    fn into_value(self) -> Value {
        Value::String(self.clone())
    }
}

/// Key/value fields serialized into the request body of one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single field. Last write wins.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl FieldValue) {
        self.fields.insert(key.into(), value.into_value());
    }

    /// Set a single field from any serializable value.
    ///
    /// Fails before touching the payload if `value` has no JSON form: a NaN
    /// or infinite float anywhere inside it, or a map with non-string keys.
    pub fn try_set_field<T>(&mut self, key: impl Into<String>, value: &T) -> Result<(), GaError>
    where
        T: Serialize + ?Sized,
    {
        ensure_finite(value)?;
        let value = serde_json::to_value(value)?;
        self.fields.insert(key.into(), value);
        Ok(())
    }

    /// Shallow merge. Incoming keys overwrite existing ones; new keys are
    /// appended in iteration order.
    pub fn merge_fields<I, K, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        for (key, value) in fields {
            self.fields.insert(key.into(), value.into_value());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Owned JSON object copy of the current fields.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Compact JSON encoding used as the plaintext request body.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, GaError> {
        Ok(serde_json::to_vec(&self.fields)?)
    }
}

impl PartialEq<Value> for Payload {
    fn eq(&self, other: &Value) -> bool {
        matches!(other, Value::Object(map) if *map == self.fields)
    }
}
