//! `dse:Point`, `dse:LineString` and `dse:Polygon` as Well-Known Text.

use graphson_geometry::{LineString, Point, Polygon};
use serde_json::Value;

use super::expect_str;
use crate::error::{GraphSONError, Result};
use crate::registry::{ObjectDecoder, TypeHandler};
use crate::tag::{self, typed_value};
use crate::value::GraphValue;

pub struct PointCodec;

impl TypeHandler for PointCodec {
    fn tag(&self) -> &'static str {
        tag::POINT
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::Point(p) => Ok(typed_value(self.tag(), Value::String(p.to_string()))),
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let wkt = expect_str(self.tag(), payload)?;
        Point::from_wkt(wkt)
            .map(GraphValue::Point)
            .map_err(|e| GraphSONError::parse(self.tag(), payload, e))
    }
}

pub struct LineStringCodec;

impl TypeHandler for LineStringCodec {
    fn tag(&self) -> &'static str {
        tag::LINE_STRING
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::LineString(l) => {
                Ok(typed_value(self.tag(), Value::String(l.to_string())))
            }
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let wkt = expect_str(self.tag(), payload)?;
        LineString::from_wkt(wkt)
            .map(GraphValue::LineString)
            .map_err(|e| GraphSONError::parse(self.tag(), payload, e))
    }
}

pub struct PolygonCodec;

impl TypeHandler for PolygonCodec {
    fn tag(&self) -> &'static str {
        tag::POLYGON
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::Polygon(p) => Ok(typed_value(self.tag(), Value::String(p.to_string()))),
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let wkt = expect_str(self.tag(), payload)?;
        Polygon::from_wkt(wkt)
            .map(GraphValue::Polygon)
            .map_err(|e| GraphSONError::parse(self.tag(), payload, e))
    }
}
