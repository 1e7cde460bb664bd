//! Wire JSON → [`GraphValue`].

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{GraphSONError, Result};
use crate::options::ReaderOptions;
use crate::registry::{ObjectDecoder, Registry};
use crate::tag::{TYPE_KEY, VALUE_KEY};
use crate::value::{GraphValue, Properties};

/// Decodes GraphSON with the registry selected by its [`ReaderOptions`].
///
/// Objects carrying an `@type` key are dispatched to the handler registered
/// for that tag; other objects, arrays and JSON scalars decode untyped, with
/// their children decoded recursively.
///
/// ```
/// use graphson::{GraphSONReader, GraphValue, ReaderOptions};
///
/// let reader = GraphSONReader::new(ReaderOptions::default());
/// let v = reader.read_object(r#"[{"@type":"g:Int64","@value":7}, "x"]"#).unwrap();
/// assert_eq!(v, GraphValue::List(vec![GraphValue::Int64(7), GraphValue::from("x")]));
/// ```
#[derive(Clone)]
pub struct GraphSONReader {
    options: ReaderOptions,
    registry: &'static Registry,
}

impl Default for GraphSONReader {
    fn default() -> Self {
        Self::new(ReaderOptions::default())
    }
}

impl GraphSONReader {
    pub fn new(options: ReaderOptions) -> Self {
        let registry = Registry::for_kind(options.registry);
        Self { options, registry }
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    /// Decodes an already parsed JSON value.
    pub fn to_object(&self, value: &Value) -> Result<GraphValue> {
        DecodeContext::new(self)
            .to_object(value)
            .inspect_err(|err| debug!(?err, "graphson decode failed"))
    }

    /// Parses `text` as JSON and decodes it.
    pub fn read_object(&self, text: &str) -> Result<GraphValue> {
        let value: Value = serde_json::from_str(text)
            .inspect_err(|err| debug!(?err, "graphson input is not JSON"))?;
        self.to_object(&value)
    }
}

/// The recursive decoder handed to handlers; tracks how deep it is.
pub struct DecodeContext<'r> {
    reader: &'r GraphSONReader,
    depth: usize,
}

impl<'r> DecodeContext<'r> {
    pub fn new(reader: &'r GraphSONReader) -> Self {
        Self { reader, depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn descend(&self) -> Result<DecodeContext<'r>> {
        let limit = self.reader.options.max_depth;
        if self.depth >= limit {
            return Err(GraphSONError::DepthExceeded { limit });
        }
        Ok(DecodeContext {
            reader: self.reader,
            depth: self.depth + 1,
        })
    }

    fn decode_record(&self, tag: &Value, record: &Map<String, Value>) -> Result<GraphValue> {
        let tag = tag
            .as_str()
            .ok_or_else(|| GraphSONError::parse(TYPE_KEY, tag, "type tag must be a string"))?;
        let (tag, handler) = self.reader.registry.decoder_entry(tag)?;
        let payload = record
            .get(VALUE_KEY)
            .ok_or_else(|| GraphSONError::missing(VALUE_KEY, tag))?;
        trace!(tag, depth = self.depth, "decoding graphson record");
        handler.decode(payload, &self.descend()?)
    }
}

impl ObjectDecoder for DecodeContext<'_> {
    fn to_object(&self, value: &Value) -> Result<GraphValue> {
        match value {
            Value::Object(obj) => match obj.get(TYPE_KEY) {
                Some(tag) => self.decode_record(tag, obj),
                None => {
                    let inner = self.descend()?;
                    let mut map = Properties::with_capacity(obj.len());
                    for (key, item) in obj {
                        map.insert(key.clone(), inner.to_object(item)?);
                    }
                    Ok(GraphValue::Map(map))
                }
            },
            Value::Array(items) => {
                let inner = self.descend()?;
                items
                    .iter()
                    .map(|item| inner.to_object(item))
                    .collect::<Result<Vec<_>>>()
                    .map(GraphValue::List)
            }
            scalar => Ok(GraphValue::from(scalar.clone())),
        }
    }

    fn legacy_edge_label(&self) -> bool {
        self.reader.options.legacy_edge_label
    }
}
