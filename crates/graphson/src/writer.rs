//! [`GraphValue`] → wire JSON.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{GraphSONError, Result};
use crate::options::WriterOptions;
use crate::registry::Registry;
use crate::value::GraphValue;

/// Encodes native values into tagged GraphSON records.
///
/// `Null`, `Bool`, `String`, `List` and `Map` map onto plain JSON; every other
/// kind is written by the handler registered for it. Graph elements have no
/// encoder and fail with [`GraphSONError::UnsupportedType`].
#[derive(Clone)]
pub struct GraphSONWriter {
    options: WriterOptions,
    registry: &'static Registry,
}

impl Default for GraphSONWriter {
    fn default() -> Self {
        Self::new(WriterOptions::default())
    }
}

impl GraphSONWriter {
    pub fn new(options: WriterOptions) -> Self {
        Self {
            options,
            registry: Registry::base(),
        }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn to_dict(&self, value: &GraphValue) -> Result<Value> {
        self.encode(value, 0)
            .inspect_err(|err| debug!(?err, kind = %value.kind(), "graphson encode failed"))
    }

    /// Encodes `value` and serializes it to compact JSON text.
    pub fn write_object(&self, value: &GraphValue) -> Result<String> {
        let dict = self.to_dict(value)?;
        Ok(serde_json::to_string(&dict)?)
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let limit = self.options.max_depth;
        if depth >= limit {
            return Err(GraphSONError::DepthExceeded { limit });
        }
        Ok(depth + 1)
    }

    fn encode(&self, value: &GraphValue, depth: usize) -> Result<Value> {
        match value {
            GraphValue::Null => Ok(Value::Null),
            GraphValue::Bool(b) => Ok(Value::Bool(*b)),
            GraphValue::String(s) => Ok(Value::String(s.clone())),
            GraphValue::List(items) => {
                let depth = self.enter(depth)?;
                items
                    .iter()
                    .map(|item| self.encode(item, depth))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            }
            GraphValue::Map(entries) => {
                let depth = self.enter(depth)?;
                let mut obj = Map::with_capacity(entries.len());
                for (key, item) in entries {
                    obj.insert(key.clone(), self.encode(item, depth)?);
                }
                Ok(Value::Object(obj))
            }
            other => {
                let kind = other.kind();
                let handler = self.registry.lookup_encoder(kind)?;
                trace!(%kind, depth, "encoding graphson record");
                handler.encode(other)
            }
        }
    }
}
