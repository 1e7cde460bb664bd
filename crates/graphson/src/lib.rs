//! GraphSON 2.0 codec for DSE Graph.
//!
//! Converts between [`GraphValue`], a typed native value model, and the
//! self-describing wire format in which every non-JSON value travels as
//!
//! ```text
//! {"@type": "<prefix>:<Name>", "@value": <payload>}
//! ```
//!
//! Dispatch is table driven: a [`Registry`] maps value kinds to encoders and
//! wire tags to decoders. The base table covers scalar, temporal and geospatial
//! types; the structural table adds vertices, edges, properties and paths.
//!
//! # Example
//!
//! ```
//! use graphson::{decode, encode, GraphValue};
//!
//! let wire = encode(&GraphValue::Integer(1 << 31)).unwrap();
//! assert_eq!(wire["@type"], "g:Int64");
//! assert_eq!(decode(&wire).unwrap(), GraphValue::Int64(1 << 31));
//! ```

pub mod error;
pub mod handlers;
pub mod options;
pub mod reader;
pub mod registry;
pub mod rows;
pub mod structure;
pub mod tag;
pub mod value;
pub mod writer;

pub use error::{GraphSONError, Result};
pub use graphson_geometry::{LineString, Point, Polygon, WktError};
pub use options::{ReaderOptions, RegistryKind, WriterOptions, DEFAULT_MAX_DEPTH};
pub use reader::{DecodeContext, GraphSONReader};
pub use registry::{ObjectDecoder, Registry, TypeHandler};
pub use rows::{decode_traversal_row, decode_traversal_rows, traversal_reader, Traverser};
pub use structure::{ElementKind, Edge, Path, Property, Vertex, VertexProperty};
pub use value::{GraphValue, Properties, ValueKind};
pub use writer::GraphSONWriter;

use serde_json::Value;

/// Encodes with default [`WriterOptions`].
pub fn encode(value: &GraphValue) -> Result<Value> {
    GraphSONWriter::default().to_dict(value)
}

/// Decodes with the base table and default options.
pub fn decode(value: &Value) -> Result<GraphValue> {
    GraphSONReader::default().to_object(value)
}

/// Decodes with the structural table, so graph elements are rebuilt.
pub fn decode_graph(value: &Value) -> Result<GraphValue> {
    GraphSONReader::new(ReaderOptions::structural()).to_object(value)
}

/// Crate version, as published.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
