//! Type registry: value kind → encoder, wire tag → decoder.
//!
//! Two process-wide tables are built once on first use and never mutated:
//! [`Registry::base`] and [`Registry::structural`]. They share the encode
//! table; the structural one additionally decodes graph elements.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;
use tracing::debug;

use crate::error::{GraphSONError, Result};
use crate::handlers::geometry::{LineStringCodec, PointCodec, PolygonCodec};
use crate::handlers::scalar::{
    BigDecimalCodec, BigIntegerCodec, BlobCodec, DoubleCodec, FloatCodec, InetAddressCodec,
    Int16Codec, Int32Codec, Int64Codec, IntegerCodec, UuidCodec,
};
use crate::handlers::structural::{
    EdgeCodec, PathCodec, PropertyCodec, VertexCodec, VertexPropertyCodec,
};
use crate::handlers::temporal::{DurationCodec, InstantCodec};
use crate::options::RegistryKind;
use crate::value::{GraphValue, ValueKind};

/// The recursive decode entry point handed to every handler.
///
/// Structural handlers resolve nested `@type`/`@value` records through it,
/// so they can be exercised with a stub in isolation.
pub trait ObjectDecoder {
    fn to_object(&self, value: &Value) -> Result<GraphValue>;

    /// Whether an edge without a label falls back to `"vertex"`.
    fn legacy_edge_label(&self) -> bool {
        false
    }
}

/// A stateless encode/decode pair for one wire type.
///
/// Both operations default to [`GraphSONError::UnsupportedType`]; decode-only
/// handlers leave `encode` alone and vice versa.
pub trait TypeHandler: Send + Sync {
    /// The wire tag this handler decodes, and the one it writes.
    fn tag(&self) -> &'static str;

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        Err(GraphSONError::UnsupportedType(value.kind().to_string()))
    }

    fn decode(&self, payload: &Value, _decoder: &dyn ObjectDecoder) -> Result<GraphValue> {
        Err(GraphSONError::UnsupportedType(format!(
            "decode of payload {payload}"
        )))
    }
}

pub struct Registry {
    kind: RegistryKind,
    encoders: HashMap<ValueKind, &'static dyn TypeHandler>,
    decoders: HashMap<&'static str, &'static dyn TypeHandler>,
}

static BASE: OnceLock<Registry> = OnceLock::new();
static STRUCTURAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Scalar, temporal and geospatial decoders.
    pub fn base() -> &'static Registry {
        BASE.get_or_init(|| Registry::build(RegistryKind::Base))
    }

    /// Base decoders plus the five graph-element decoders.
    pub fn structural() -> &'static Registry {
        STRUCTURAL.get_or_init(|| Registry::build(RegistryKind::Structural))
    }

    pub fn for_kind(kind: RegistryKind) -> &'static Registry {
        match kind {
            RegistryKind::Base => Self::base(),
            RegistryKind::Structural => Self::structural(),
        }
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn lookup_encoder(&self, kind: ValueKind) -> Result<&'static dyn TypeHandler> {
        self.encoders
            .get(&kind)
            .copied()
            .ok_or_else(|| GraphSONError::UnsupportedType(kind.to_string()))
    }

    pub fn lookup_decoder(&self, tag: &str) -> Result<&'static dyn TypeHandler> {
        self.decoders
            .get(tag)
            .copied()
            .ok_or_else(|| GraphSONError::UnsupportedType(tag.to_string()))
    }

    /// Like [`Registry::lookup_decoder`], also yielding the registered tag.
    pub(crate) fn decoder_entry(
        &self,
        tag: &str,
    ) -> Result<(&'static str, &'static dyn TypeHandler)> {
        self.decoders
            .get_key_value(tag)
            .map(|(tag, handler)| (*tag, *handler))
            .ok_or_else(|| GraphSONError::UnsupportedType(tag.to_string()))
    }

    pub fn has_decoder(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    /// Registered wire tags, sorted.
    pub fn decoder_tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.decoders.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    fn build(kind: RegistryKind) -> Registry {
        let mut encoders: HashMap<ValueKind, &'static dyn TypeHandler> = HashMap::new();
        encoders.insert(ValueKind::Integer, &IntegerCodec);
        encoders.insert(ValueKind::Int16, &IntegerCodec);
        encoders.insert(ValueKind::Int32, &IntegerCodec);
        encoders.insert(ValueKind::Int64, &IntegerCodec);
        encoders.insert(ValueKind::Float, &FloatCodec);
        encoders.insert(ValueKind::Double, &DoubleCodec);
        encoders.insert(ValueKind::Uuid, &UuidCodec);
        encoders.insert(ValueKind::Decimal, &BigDecimalCodec);
        encoders.insert(ValueKind::Instant, &InstantCodec);
        encoders.insert(ValueKind::Date, &InstantCodec);
        encoders.insert(ValueKind::Duration, &DurationCodec);
        encoders.insert(ValueKind::Blob, &BlobCodec);
        encoders.insert(ValueKind::Point, &PointCodec);
        encoders.insert(ValueKind::LineString, &LineStringCodec);
        encoders.insert(ValueKind::Polygon, &PolygonCodec);

        let mut decoders: HashMap<&'static str, &'static dyn TypeHandler> = HashMap::new();
        let base: [&'static dyn TypeHandler; 15] = [
            &Int16Codec,
            &Int32Codec,
            &Int64Codec,
            &BigIntegerCodec,
            &FloatCodec,
            &DoubleCodec,
            &UuidCodec,
            &BigDecimalCodec,
            &InstantCodec,
            &DurationCodec,
            &InetAddressCodec,
            &BlobCodec,
            &PointCodec,
            &LineStringCodec,
            &PolygonCodec,
        ];
        let structural: [&'static dyn TypeHandler; 5] = [
            &VertexCodec,
            &VertexPropertyCodec,
            &EdgeCodec,
            &PropertyCodec,
            &PathCodec,
        ];
        let extra: &[&'static dyn TypeHandler] = match kind {
            RegistryKind::Base => &[],
            RegistryKind::Structural => &structural,
        };
        for handler in base.into_iter().chain(extra.iter().copied()) {
            decoders.insert(handler.tag(), handler);
        }

        debug!(
            ?kind,
            encoders = encoders.len(),
            decoders = decoders.len(),
            "graphson registry built"
        );
        Registry {
            kind,
            encoders,
            decoders,
        }
    }
}
