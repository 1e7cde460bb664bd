//! Decoders for graph elements: vertices, edges, properties and paths.
//!
//! These handlers are decode-only. Nested fields (`id`, `value`, `properties`,
//! path objects) go back through the [`ObjectDecoder`], so an element may carry
//! any value the active registry understands.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::{GraphSONError, Result};
use crate::registry::{ObjectDecoder, TypeHandler};
use crate::structure::{
    Edge, Path, Property, Vertex, VertexProperty, DEFAULT_EDGE_LABEL, DEFAULT_VERTEX_LABEL,
};
use crate::tag;
use crate::value::{GraphValue, Properties};

fn payload_object<'a>(tag: &str, payload: &'a Value) -> Result<&'a Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| GraphSONError::parse(tag, payload, "expected an object payload"))
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    record: &'static str,
) -> Result<&'a Value> {
    obj.get(field)
        .ok_or_else(|| GraphSONError::missing(field, record))
}

fn text(record: &str, field: &Value) -> Result<String> {
    field
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| GraphSONError::parse(record, field, "expected a string"))
}

fn required_text(
    obj: &Map<String, Value>,
    field: &'static str,
    record: &'static str,
) -> Result<String> {
    text(record, required(obj, field, record)?)
}

fn optional_text(
    obj: &Map<String, Value>,
    field: &str,
    record: &str,
    default: &str,
) -> Result<String> {
    match obj.get(field) {
        Some(v) => text(record, v),
        None => Ok(default.to_string()),
    }
}

/// Decodes `properties` (default `{}`) into a property map.
fn decode_properties(
    obj: &Map<String, Value>,
    record: &str,
    decoder: &dyn ObjectDecoder,
) -> Result<Properties> {
    let Some(raw) = obj.get("properties") else {
        return Ok(Properties::new());
    };
    match decoder.to_object(raw)? {
        GraphValue::Map(map) => Ok(map),
        GraphValue::Null => Ok(Properties::new()),
        _ => Err(GraphSONError::parse(record, raw, "properties must be a mapping")),
    }
}

pub struct VertexCodec;

impl TypeHandler for VertexCodec {
    fn tag(&self) -> &'static str {
        tag::VERTEX
    }

    fn decode(&self, payload: &Value, decoder: &dyn ObjectDecoder) -> Result<GraphValue> {
        let obj = payload_object(self.tag(), payload)?;
        let id = decoder.to_object(required(obj, "id", self.tag())?)?;
        let label = optional_text(obj, "label", self.tag(), DEFAULT_VERTEX_LABEL)?;
        let properties = decode_properties(obj, self.tag(), decoder)?;
        Ok(GraphValue::from(Vertex {
            id,
            label,
            properties,
        }))
    }
}

pub struct VertexPropertyCodec;

impl TypeHandler for VertexPropertyCodec {
    fn tag(&self) -> &'static str {
        tag::VERTEX_PROPERTY
    }

    fn decode(&self, payload: &Value, decoder: &dyn ObjectDecoder) -> Result<GraphValue> {
        let obj = payload_object(self.tag(), payload)?;
        let label = required_text(obj, "label", self.tag())?;
        let value = decoder.to_object(required(obj, "value", self.tag())?)?;
        let id = obj.get("id").map(|id| decoder.to_object(id)).transpose()?;
        let properties = decode_properties(obj, self.tag(), decoder)?;
        Ok(GraphValue::from(VertexProperty {
            id,
            label,
            value,
            properties,
        }))
    }
}

/// Edge records carry the adjacent vertices as bare ids plus labels.
pub struct EdgeCodec;

impl TypeHandler for EdgeCodec {
    fn tag(&self) -> &'static str {
        tag::EDGE
    }

    fn decode(&self, payload: &Value, decoder: &dyn ObjectDecoder) -> Result<GraphValue> {
        let obj = payload_object(self.tag(), payload)?;
        let id = decoder.to_object(required(obj, "id", self.tag())?)?;
        let fallback = if decoder.legacy_edge_label() {
            DEFAULT_VERTEX_LABEL
        } else {
            DEFAULT_EDGE_LABEL
        };
        let label = optional_text(obj, "label", self.tag(), fallback)?;
        let properties = decode_properties(obj, self.tag(), decoder)?;

        let in_v_id = decoder.to_object(required(obj, "inV", self.tag())?)?;
        let in_v_label = required_text(obj, "inVLabel", self.tag())?;
        let out_v_id = decoder.to_object(required(obj, "outV", self.tag())?)?;
        let out_v_label = required_text(obj, "outVLabel", self.tag())?;

        Ok(GraphValue::from(Edge {
            id,
            label,
            properties,
            in_v: Vertex::new(in_v_id, in_v_label.clone()),
            in_v_label,
            out_v: Vertex::new(out_v_id, out_v_label.clone()),
            out_v_label,
        }))
    }
}

pub struct PropertyCodec;

impl TypeHandler for PropertyCodec {
    fn tag(&self) -> &'static str {
        tag::PROPERTY
    }

    fn decode(&self, payload: &Value, decoder: &dyn ObjectDecoder) -> Result<GraphValue> {
        let obj = payload_object(self.tag(), payload)?;
        let key = required_text(obj, "key", self.tag())?;
        let value = decoder.to_object(required(obj, "value", self.tag())?)?;
        Ok(GraphValue::from(Property::new(key, value)))
    }
}

pub struct PathCodec;

impl TypeHandler for PathCodec {
    fn tag(&self) -> &'static str {
        tag::PATH
    }

    fn decode(&self, payload: &Value, decoder: &dyn ObjectDecoder) -> Result<GraphValue> {
        let obj = payload_object(self.tag(), payload)?;
        let raw_labels = required(obj, "labels", self.tag())?;
        let raw_objects = required(obj, "objects", self.tag())?;

        let steps = raw_labels
            .as_array()
            .ok_or_else(|| GraphSONError::parse(self.tag(), raw_labels, "labels must be a list"))?;
        let mut labels = Vec::with_capacity(steps.len());
        for step in steps {
            let names = step.as_array().ok_or_else(|| {
                GraphSONError::parse(self.tag(), step, "each label entry must be a list")
            })?;
            let set = names
                .iter()
                .map(|name| text(self.tag(), name))
                .collect::<Result<BTreeSet<_>>>()?;
            labels.push(set);
        }

        let mut path = Path::new(labels, Vec::new());
        let entries = raw_objects
            .as_array()
            .ok_or_else(|| GraphSONError::parse(self.tag(), raw_objects, "objects must be a list"))?;
        path.objects.reserve(entries.len());
        for entry in entries {
            path.objects.push(decoder.to_object(entry)?);
        }
        Ok(GraphValue::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Understands `g:Int32` records and plain objects; everything else is
    /// taken untyped.
    #[derive(Default)]
    struct StubDecoder {
        legacy: bool,
    }

    impl ObjectDecoder for StubDecoder {
        fn to_object(&self, value: &Value) -> Result<GraphValue> {
            match value {
                Value::Object(obj) if obj.get(tag::TYPE_KEY) == Some(&json!(tag::INT32)) => {
                    let n = obj[tag::VALUE_KEY].as_i64().unwrap();
                    Ok(GraphValue::Int32(n as i32))
                }
                Value::Object(obj) => obj
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), self.to_object(v)?)))
                    .collect::<Result<Properties>>()
                    .map(GraphValue::Map),
                _ => Ok(GraphValue::from(value.clone())),
            }
        }

        fn legacy_edge_label(&self) -> bool {
            self.legacy
        }
    }

    fn int32(n: i32) -> Value {
        json!({"@type": "g:Int32", "@value": n})
    }

    fn edge_payload() -> Value {
        json!({
            "id": int32(13),
            "inV": int32(2),
            "inVLabel": "software",
            "outV": int32(1),
            "outVLabel": "person",
        })
    }

    #[test]
    fn vertex_defaults_label_and_properties() {
        let v = VertexCodec
            .decode(&json!({"id": int32(1)}), &StubDecoder::default())
            .unwrap();
        let v = v.as_vertex().unwrap();
        assert_eq!(v.id, GraphValue::Int32(1));
        assert_eq!(v.label, "vertex");
        assert!(v.properties.is_empty());
    }

    #[test]
    fn vertex_without_id_is_missing_field() {
        let err = VertexCodec
            .decode(&json!({"label": "person"}), &StubDecoder::default())
            .unwrap_err();
        assert!(matches!(
            err,
            GraphSONError::MissingField { field: "id", record: "g:Vertex" }
        ));
    }

    #[test]
    fn vertex_label_must_be_text() {
        let err = VertexCodec
            .decode(&json!({"id": 1, "label": 7}), &StubDecoder::default())
            .unwrap_err();
        assert!(matches!(err, GraphSONError::Parse { .. }));
    }

    #[test]
    fn non_object_payload_is_a_parse_error() {
        for handler in [
            &VertexCodec as &dyn TypeHandler,
            &VertexPropertyCodec,
            &EdgeCodec,
            &PropertyCodec,
            &PathCodec,
        ] {
            assert!(matches!(
                handler.decode(&json!([1, 2]), &StubDecoder::default()),
                Err(GraphSONError::Parse { .. })
            ));
        }
    }

    #[test]
    fn vertex_property_requires_label() {
        let err = VertexPropertyCodec
            .decode(&json!({"id": 0, "value": "marko"}), &StubDecoder::default())
            .unwrap_err();
        assert!(matches!(
            err,
            GraphSONError::MissingField { field: "label", record: "g:VertexProperty" }
        ));
    }

    #[test]
    fn vertex_property_keeps_meta_properties() {
        let vp = VertexPropertyCodec
            .decode(
                &json!({
                    "id": int32(0),
                    "label": "name",
                    "value": "marko",
                    "properties": {"since": int32(2004)},
                }),
                &StubDecoder::default(),
            )
            .unwrap();
        let vp = vp.as_vertex_property().unwrap();
        assert_eq!(vp.id, Some(GraphValue::Int32(0)));
        assert_eq!(vp.value, GraphValue::from("marko"));
        assert_eq!(vp.properties["since"], GraphValue::Int32(2004));
    }

    #[test]
    fn edge_label_defaults_to_edge() {
        let e = EdgeCodec
            .decode(&edge_payload(), &StubDecoder::default())
            .unwrap();
        let e = e.as_edge().unwrap();
        assert_eq!(e.label, "edge");
        assert_eq!(e.in_v, Vertex::new(GraphValue::Int32(2), "software"));
        assert_eq!(e.out_v.label, "person");
        assert_eq!(e.out_v_label, "person");
    }

    #[test]
    fn legacy_edge_label_falls_back_to_vertex() {
        let e = EdgeCodec
            .decode(&edge_payload(), &StubDecoder { legacy: true })
            .unwrap();
        assert_eq!(e.as_edge().unwrap().label, "vertex");
    }

    #[test]
    fn edge_requires_adjacent_vertex_labels() {
        for field in ["inV", "inVLabel", "outV", "outVLabel", "id"] {
            let mut payload = edge_payload();
            payload.as_object_mut().unwrap().remove(field);
            match EdgeCodec.decode(&payload, &StubDecoder::default()) {
                Err(GraphSONError::MissingField { field: f, record }) => {
                    assert_eq!(f, field);
                    assert_eq!(record, "g:Edge");
                }
                other => panic!("{field}: {other:?}"),
            }
        }
    }

    #[test]
    fn properties_must_decode_to_a_mapping() {
        let mut payload = edge_payload();
        payload["properties"] = json!([1, 2]);
        assert!(matches!(
            EdgeCodec.decode(&payload, &StubDecoder::default()),
            Err(GraphSONError::Parse { .. })
        ));
    }

    #[test]
    fn property_is_a_key_value_pair() {
        let p = PropertyCodec
            .decode(&json!({"key": "weight", "value": "weight"}), &StubDecoder::default())
            .unwrap();
        let p = p.as_property().unwrap();
        assert_eq!(p.key, "weight");
        assert_eq!(p.value, GraphValue::from("weight"));

        let p = PropertyCodec
            .decode(&json!({"key": "since", "value": int32(2009)}), &StubDecoder::default())
            .unwrap();
        assert_eq!(p.as_property().unwrap().value, GraphValue::Int32(2009));
    }

    #[test]
    fn path_keeps_step_order() {
        let p = PathCodec
            .decode(
                &json!({
                    "labels": [["a"], [], ["c", "b"]],
                    "objects": [int32(3), int32(1), int32(2)],
                }),
                &StubDecoder::default(),
            )
            .unwrap();
        let p = p.as_path().unwrap();
        assert_eq!(
            p.objects,
            [GraphValue::Int32(3), GraphValue::Int32(1), GraphValue::Int32(2)]
        );
        assert_eq!(p.labels[2], BTreeSet::from(["b".to_string(), "c".to_string()]));
        assert_eq!(p.get("b"), Some(&GraphValue::Int32(2)));
    }

    #[test]
    fn path_requires_labels_and_objects() {
        let err = PathCodec
            .decode(&json!({"labels": []}), &StubDecoder::default())
            .unwrap_err();
        assert!(matches!(
            err,
            GraphSONError::MissingField { field: "objects", record: "g:Path" }
        ));
        assert!(matches!(
            PathCodec.decode(&json!({"labels": [[1]], "objects": []}), &StubDecoder::default()),
            Err(GraphSONError::Parse { .. })
        ));
    }

    #[test]
    fn nested_failures_propagate_unchanged() {
        struct Failing;
        impl ObjectDecoder for Failing {
            fn to_object(&self, _: &Value) -> Result<GraphValue> {
                Err(GraphSONError::UnsupportedType("x:Bogus".to_string()))
            }
        }
        assert!(matches!(
            VertexCodec.decode(&json!({"id": 1}), &Failing),
            Err(GraphSONError::UnsupportedType(ref t)) if t == "x:Bogus"
        ));
    }
}
