//! One handler per wire type.
//!
//! Every handler is a unit struct implementing
//! [`TypeHandler`](crate::registry::TypeHandler). Scalar handlers only look at
//! their payload; structural ones recurse through the
//! [`ObjectDecoder`](crate::registry::ObjectDecoder) they are given.

pub mod geometry;
pub mod scalar;
pub mod structural;
pub mod temporal;

use serde_json::Value;

use crate::error::{GraphSONError, Result};

pub(crate) fn expect_str<'a>(tag: &str, payload: &'a Value) -> Result<&'a str> {
    payload
        .as_str()
        .ok_or_else(|| GraphSONError::parse(tag, payload, "expected a string"))
}

pub(crate) fn expect_i64(tag: &str, payload: &Value) -> Result<i64> {
    payload
        .as_i64()
        .ok_or_else(|| GraphSONError::parse(tag, payload, "expected a 64-bit integer"))
}
