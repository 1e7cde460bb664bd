//! Wire tags and the `{"@type": ..., "@value": ...}` record shape.

use serde_json::{Map, Value};

pub const TYPE_KEY: &str = "@type";
pub const VALUE_KEY: &str = "@value";

/// Core GraphSON namespace.
pub const PREFIX_CORE: &str = "g";
/// Extended GraphSON namespace.
pub const PREFIX_EXTENDED: &str = "gx";
/// DSE-specific namespace.
pub const PREFIX_DSE: &str = "dse";

pub const INT32: &str = "g:Int32";
pub const INT64: &str = "g:Int64";
pub const FLOAT: &str = "g:Float";
pub const DOUBLE: &str = "g:Double";
pub const UUID: &str = "g:UUID";
pub const INT16: &str = "gx:Int16";
pub const BIG_INTEGER: &str = "gx:BigInteger";
pub const BIG_DECIMAL: &str = "gx:BigDecimal";
pub const INSTANT: &str = "gx:Instant";
pub const DURATION: &str = "gx:Duration";
pub const INET_ADDRESS: &str = "gx:InetAddress";
pub const BLOB: &str = "dse:Blob";
pub const POINT: &str = "dse:Point";
pub const LINE_STRING: &str = "dse:LineString";
pub const POLYGON: &str = "dse:Polygon";

pub const VERTEX: &str = "g:Vertex";
pub const VERTEX_PROPERTY: &str = "g:VertexProperty";
pub const EDGE: &str = "g:Edge";
pub const PROPERTY: &str = "g:Property";
pub const PATH: &str = "g:Path";

/// Joins a namespace prefix and a type name into a wire tag (`"gx:Instant"`).
pub fn format_type(prefix: &str, name: &str) -> String {
    format!("{prefix}:{name}")
}

/// Wraps a payload into a tagged wire record.
pub fn typed_value(tag: &str, payload: Value) -> Value {
    let mut record = Map::with_capacity(2);
    record.insert(TYPE_KEY.to_string(), Value::String(tag.to_string()));
    record.insert(VALUE_KEY.to_string(), payload);
    Value::Object(record)
}
