//! Numeric, identifier, decimal, address and blob handlers.

use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use bigdecimal::BigDecimal;
use serde_json::{Number, Value};
use uuid::Uuid;

use super::{expect_i64, expect_str};
use crate::error::{GraphSONError, Result};
use crate::registry::{ObjectDecoder, TypeHandler};
use crate::tag::{self, typed_value};
use crate::value::GraphValue;

// ----------------------------------------------------------------
// Integers

/// Writes every integer variant as `g:Int32` or `g:Int64`.
///
/// `Int32` and `Int64` keep their tag. The untyped `Integer` (and `Int16`)
/// becomes `g:Int32` when it fits the 32-bit signed range, `g:Int64`
/// otherwise. A boolean reaching this handler is written raw.
pub struct IntegerCodec;

impl TypeHandler for IntegerCodec {
    /// The narrow tag; values outside `i32` go out as `g:Int64`.
    fn tag(&self) -> &'static str {
        tag::INT32
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::Bool(b) => Ok(Value::Bool(*b)),
            GraphValue::Int32(v) => Ok(typed_value(tag::INT32, Value::from(*v))),
            GraphValue::Int64(v) => Ok(typed_value(tag::INT64, Value::from(*v))),
            GraphValue::Int16(v) => Ok(typed_value(tag::INT32, Value::from(*v))),
            GraphValue::Integer(v) => match i32::try_from(*v) {
                Ok(small) => Ok(typed_value(tag::INT32, Value::from(small))),
                Err(_) => Ok(typed_value(tag::INT64, Value::from(*v))),
            },
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }
}

pub struct Int16Codec;

impl TypeHandler for Int16Codec {
    fn tag(&self) -> &'static str {
        tag::INT16
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let v = expect_i64(self.tag(), payload)?;
        i16::try_from(v)
            .map(GraphValue::Int16)
            .map_err(|e| GraphSONError::parse(self.tag(), payload, e))
    }
}

pub struct Int32Codec;

impl TypeHandler for Int32Codec {
    fn tag(&self) -> &'static str {
        tag::INT32
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let v = expect_i64(self.tag(), payload)?;
        i32::try_from(v)
            .map(GraphValue::Int32)
            .map_err(|e| GraphSONError::parse(self.tag(), payload, e))
    }
}

pub struct Int64Codec;

impl TypeHandler for Int64Codec {
    fn tag(&self) -> &'static str {
        tag::INT64
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        expect_i64(self.tag(), payload).map(GraphValue::Int64)
    }
}

/// `gx:BigInteger` is read into a 64-bit integer. Servers may send it as a
/// number or as a decimal string.
pub struct BigIntegerCodec;

impl TypeHandler for BigIntegerCodec {
    fn tag(&self) -> &'static str {
        tag::BIG_INTEGER
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let v = match payload {
            Value::String(s) => s
                .parse::<i64>()
                .map_err(|e| GraphSONError::parse(self.tag(), payload, e))?,
            _ => expect_i64(self.tag(), payload)?,
        };
        Ok(GraphValue::Int64(v))
    }
}

// ----------------------------------------------------------------
// Floating point

fn float_payload(v: f64) -> Value {
    match Number::from_f64(v) {
        Some(n) => Value::Number(n),
        None if v.is_nan() => Value::from("NaN"),
        None if v > 0.0 => Value::from("Infinity"),
        None => Value::from("-Infinity"),
    }
}

/// Shortest `f32` text: `0.1f32` is written `0.1`, not the widened
/// `f64` digits.
fn float32_payload(v: f32) -> Value {
    if !v.is_finite() {
        return float_payload(f64::from(v));
    }
    format!("{v:?}")
        .parse::<Number>()
        .map(Value::Number)
        .unwrap_or_else(|_| float_payload(f64::from(v)))
}

fn read_float(tag: &str, payload: &Value) -> Result<f64> {
    match payload {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| GraphSONError::parse(tag, payload, "number out of range")),
        Value::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            _ => Err(GraphSONError::parse(tag, payload, "expected a number")),
        },
        _ => Err(GraphSONError::parse(tag, payload, "expected a number")),
    }
}

pub struct FloatCodec;

impl TypeHandler for FloatCodec {
    fn tag(&self) -> &'static str {
        tag::FLOAT
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::Float(v) => Ok(typed_value(self.tag(), float32_payload(*v))),
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        read_float(self.tag(), payload).map(|v| GraphValue::Float(v as f32))
    }
}

pub struct DoubleCodec;

impl TypeHandler for DoubleCodec {
    fn tag(&self) -> &'static str {
        tag::DOUBLE
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::Double(v) => Ok(typed_value(self.tag(), float_payload(*v))),
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        read_float(self.tag(), payload).map(GraphValue::Double)
    }
}

// ----------------------------------------------------------------
// UUID

pub struct UuidCodec;

impl TypeHandler for UuidCodec {
    fn tag(&self) -> &'static str {
        tag::UUID
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::Uuid(u) => Ok(typed_value(
                self.tag(),
                Value::String(u.hyphenated().to_string()),
            )),
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let s = expect_str(self.tag(), payload)?;
        Uuid::parse_str(s)
            .map(GraphValue::Uuid)
            .map_err(|e| GraphSONError::parse(self.tag(), payload, e))
    }
}

// ----------------------------------------------------------------
// BigDecimal

pub struct BigDecimalCodec;

impl TypeHandler for BigDecimalCodec {
    fn tag(&self) -> &'static str {
        tag::BIG_DECIMAL
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::Decimal(d) => Ok(typed_value(self.tag(), Value::String(d.to_string()))),
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let text = match payload {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => {
                return Err(GraphSONError::parse(
                    self.tag(),
                    payload,
                    "expected a decimal string",
                ))
            }
        };
        BigDecimal::from_str(&text)
            .map(GraphValue::Decimal)
            .map_err(|e| GraphSONError::parse(self.tag(), payload, e))
    }
}

// ----------------------------------------------------------------
// InetAddress

/// Decode-only; the address text is passed through unvalidated.
pub struct InetAddressCodec;

impl TypeHandler for InetAddressCodec {
    fn tag(&self) -> &'static str {
        tag::INET_ADDRESS
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        expect_str(self.tag(), payload).map(GraphValue::from)
    }
}

// ----------------------------------------------------------------
// Blob

pub struct BlobCodec;

impl TypeHandler for BlobCodec {
    fn tag(&self) -> &'static str {
        tag::BLOB
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::Blob(bytes) => Ok(typed_value(self.tag(), Value::String(B64.encode(bytes)))),
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let s = expect_str(self.tag(), payload)?;
        B64.decode(s)
            .map(GraphValue::Blob)
            .map_err(|e| GraphSONError::parse(self.tag(), payload, e))
    }
}
