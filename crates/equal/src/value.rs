use serde::{Deserialize, Serialize};

use crate::structural::StructurallyComparable;

/// 2^63, the first `f64` above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// 2^64, the first `f64` above every `u64`.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// A plainlang number.
///
/// Integers and reals compare by exact numeric value: `Integer(3)` equals
/// `Real(3.0)`, but an integer never equals a real that merely rounds to it.
/// `Natural` holds integers above `i64::MAX`, e.g. large JSON numbers, and
/// follows the same rule.
///
/// Non-finite reals serialize as the strings `"NaN"`, `"inf"` and `"-inf"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Natural(u64),
    Real(#[serde(with = "real")] f64),
}

impl Number {
    /// The nearest `f64` to this number.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Natural(n) => n as f64,
            Number::Real(r) => r,
        }
    }

    /// Returns the `i64` this number is exactly equal to, if any.
    pub fn as_exact_integer(self) -> Option<i64> {
        self.as_exact_wide().and_then(|w| i64::try_from(w).ok())
    }

    /// The exact integer value, wide enough for both `i64` and `u64`.
    fn as_exact_wide(self) -> Option<i128> {
        match self {
            Number::Integer(i) => Some(i.into()),
            Number::Natural(n) => Some(n.into()),
            Number::Real(r) => real_to_exact_wide(r),
        }
    }
}

fn real_to_exact_wide(r: f64) -> Option<i128> {
    // NaN and infinities fail the fract check.
    if r.fract() != 0.0 || !(-I64_BOUND..U64_BOUND).contains(&r) {
        return None;
    }
    Some(r as i128)
}

impl StructurallyComparable for Number {
    fn structurally_equals(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Real(a), Number::Real(b)) => a.structurally_equals(&b),
            (a, b) => match (a.as_exact_wide(), b.as_exact_wide()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_equals(other)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::Natural(value),
        }
    }
}

/// Serde encoding of a real that keeps non-finite values.
mod real {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Finite(f64),
        Named(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Finite(v) => Ok(v),
            Repr::Named(name) => match name.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                _ => Err(de::Error::invalid_value(
                    Unexpected::Str(&name),
                    &"a number or one of \"NaN\", \"inf\", \"-inf\"",
                )),
            },
        }
    }
}

/// A dynamically typed plainlang value.
///
/// This is the closed representation used when the static type of a value is
/// not known to the host, e.g. values produced by an interpreter or decoded
/// from JSON. Equality is always structural; see [`StructurallyComparable`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Unit,
    Bool(bool),
    Number(Number),
    Text(String),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Nothing,
    Just(Box<Value>),
    Left(Box<Value>),
    Right(Box<Value>),
    /// A user-defined constructor applied to its fields.
    Constructor { tag: String, fields: Vec<Value> },
}

impl Value {
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn just(value: impl Into<Value>) -> Self {
        Value::Just(Box::new(value.into()))
    }

    pub fn left(value: impl Into<Value>) -> Self {
        Value::Left(Box::new(value.into()))
    }

    pub fn right(value: impl Into<Value>) -> Self {
        Value::Right(Box::new(value.into()))
    }

    pub fn constructor(tag: impl Into<String>, fields: impl IntoIterator<Item = Value>) -> Self {
        Value::Constructor {
            tag: tag.into(),
            fields: fields.into_iter().collect(),
        }
    }
}

impl StructurallyComparable for Value {
    fn structurally_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) | (Value::Nothing, Value::Nothing) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.structurally_equals(b),
            (Value::Text(a), Value::Text(b)) => a == b,

            // Tuples of different arity fail the slice length check.
            (Value::Tuple(a), Value::Tuple(b)) | (Value::List(a), Value::List(b)) => {
                a.as_slice().structurally_equals(b.as_slice())
            }

            (Value::Just(a), Value::Just(b))
            | (Value::Left(a), Value::Left(b))
            | (Value::Right(a), Value::Right(b)) => a.structurally_equals(b),

            (
                Value::Constructor { tag: tag_a, fields: fields_a },
                Value::Constructor { tag: tag_b, fields: fields_b },
            ) => tag_a == tag_b && fields_a.as_slice().structurally_equals(fields_b.as_slice()),

            // Different constructors are never equal
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_equals(other)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Real(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Value::just(v),
            None => Value::Nothing,
        }
    }
}

/// Converts a JSON document into a [`Value`].
///
/// - `null` becomes `Unit`
/// - numbers representable as `i64` become `Number::Integer`, larger `u64`
///   values `Number::Natural`, all others `Number::Real`
/// - arrays become `List`
/// - objects become a constructor tagged `"object"` whose fields are
///   `(key, value)` tuples sorted by key, so key order never matters
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Unit,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Number(Number::Integer(i)),
                (None, Some(u)) => Value::Number(Number::Natural(u)),
                _ => Value::Number(Number::Real(n.as_f64().unwrap_or(f64::NAN))),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::list(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                let mut entries: Vec<(String, serde_json::Value)> = map.into_iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                Value::constructor(
                    "object",
                    entries
                        .into_iter()
                        .map(|(key, value)| Value::tuple([Value::Text(key), Value::from(value)])),
                )
            }
        }
    }
}
