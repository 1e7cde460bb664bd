//! [`GraphValue`], the native value model on the Rust side of the codec.

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use graphson_geometry::{LineString, Point, Polygon};
use indexmap::IndexMap;
use uuid::Uuid;

use crate::structure::{Edge, Path, Property, Vertex, VertexProperty};

/// Property mapping of a graph element, in wire order.
pub type Properties = IndexMap<String, GraphValue>;

/// A value that the GraphSON codec knows how to encode and/or decode.
///
/// `Integer` is an untyped native integer: the writer picks `g:Int32` or
/// `g:Int64` from its magnitude. `Int32` / `Int64` are the typed variants
/// produced by the reader and always keep their tag.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphValue {
    Null,
    Bool(bool),
    Integer(i64),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    String(String),
    List(Vec<GraphValue>),
    Map(IndexMap<String, GraphValue>),
    Uuid(Uuid),
    Decimal(BigDecimal),
    Instant(DateTime<Utc>),
    /// Date without time; written as an instant at UTC midnight.
    Date(NaiveDate),
    Duration(TimeDelta),
    Blob(Vec<u8>),
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    // ---- Graph elements (decode-only) ----
    Vertex(Box<Vertex>),
    Edge(Box<Edge>),
    VertexProperty(Box<VertexProperty>),
    Property(Box<Property>),
    Path(Box<Path>),
}

/// Discriminator of [`GraphValue`]; the key of the encode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    String,
    List,
    Map,
    Uuid,
    Decimal,
    Instant,
    Date,
    Duration,
    Blob,
    Point,
    LineString,
    Polygon,
    Vertex,
    Edge,
    VertexProperty,
    Property,
    Path,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl GraphValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            GraphValue::Null => ValueKind::Null,
            GraphValue::Bool(_) => ValueKind::Bool,
            GraphValue::Integer(_) => ValueKind::Integer,
            GraphValue::Int16(_) => ValueKind::Int16,
            GraphValue::Int32(_) => ValueKind::Int32,
            GraphValue::Int64(_) => ValueKind::Int64,
            GraphValue::Float(_) => ValueKind::Float,
            GraphValue::Double(_) => ValueKind::Double,
            GraphValue::String(_) => ValueKind::String,
            GraphValue::List(_) => ValueKind::List,
            GraphValue::Map(_) => ValueKind::Map,
            GraphValue::Uuid(_) => ValueKind::Uuid,
            GraphValue::Decimal(_) => ValueKind::Decimal,
            GraphValue::Instant(_) => ValueKind::Instant,
            GraphValue::Date(_) => ValueKind::Date,
            GraphValue::Duration(_) => ValueKind::Duration,
            GraphValue::Blob(_) => ValueKind::Blob,
            GraphValue::Point(_) => ValueKind::Point,
            GraphValue::LineString(_) => ValueKind::LineString,
            GraphValue::Polygon(_) => ValueKind::Polygon,
            GraphValue::Vertex(_) => ValueKind::Vertex,
            GraphValue::Edge(_) => ValueKind::Edge,
            GraphValue::VertexProperty(_) => ValueKind::VertexProperty,
            GraphValue::Property(_) => ValueKind::Property,
            GraphValue::Path(_) => ValueKind::Path,
        }
    }

    /// Any integer variant widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GraphValue::Integer(v) | GraphValue::Int64(v) => Some(*v),
            GraphValue::Int16(v) => Some(i64::from(*v)),
            GraphValue::Int32(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GraphValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vertex(&self) -> Option<&Vertex> {
        match self {
            GraphValue::Vertex(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            GraphValue::Edge(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_vertex_property(&self) -> Option<&VertexProperty> {
        match self {
            GraphValue::VertexProperty(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&Property> {
        match self {
            GraphValue::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            GraphValue::Path(p) => Some(p),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for GraphValue {
                fn from(v: $ty) -> Self {
                    GraphValue::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i16 => Int16,
    i32 => Int32,
    f32 => Float,
    f64 => Double,
    String => String,
    Uuid => Uuid,
    BigDecimal => Decimal,
    DateTime<Utc> => Instant,
    NaiveDate => Date,
    TimeDelta => Duration,
    Vec<u8> => Blob,
    Point => Point,
    LineString => LineString,
    Polygon => Polygon,
}

/// Plain Rust `i64` is an untyped native integer.
impl From<i64> for GraphValue {
    fn from(v: i64) -> Self {
        GraphValue::Integer(v)
    }
}

impl From<&str> for GraphValue {
    fn from(v: &str) -> Self {
        GraphValue::String(v.to_string())
    }
}

impl From<Vec<GraphValue>> for GraphValue {
    fn from(v: Vec<GraphValue>) -> Self {
        GraphValue::List(v)
    }
}

impl From<IndexMap<String, GraphValue>> for GraphValue {
    fn from(v: IndexMap<String, GraphValue>) -> Self {
        GraphValue::Map(v)
    }
}

impl From<Vertex> for GraphValue {
    fn from(v: Vertex) -> Self {
        GraphValue::Vertex(Box::new(v))
    }
}

impl From<Edge> for GraphValue {
    fn from(v: Edge) -> Self {
        GraphValue::Edge(Box::new(v))
    }
}

impl From<VertexProperty> for GraphValue {
    fn from(v: VertexProperty) -> Self {
        GraphValue::VertexProperty(Box::new(v))
    }
}

impl From<Property> for GraphValue {
    fn from(v: Property) -> Self {
        GraphValue::Property(Box::new(v))
    }
}

impl From<Path> for GraphValue {
    fn from(v: Path) -> Self {
        GraphValue::Path(Box::new(v))
    }
}

/// Untyped conversion: tagged records are kept as plain maps.
impl From<serde_json::Value> for GraphValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => GraphValue::Null,
            serde_json::Value::Bool(b) => GraphValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    GraphValue::Integer(i)
                } else {
                    GraphValue::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => GraphValue::String(s),
            serde_json::Value::Array(arr) => {
                GraphValue::List(arr.into_iter().map(GraphValue::from).collect())
            }
            serde_json::Value::Object(obj) => GraphValue::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, GraphValue::from(v)))
                    .collect(),
            ),
        }
    }
}
