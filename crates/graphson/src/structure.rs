//! Graph elements rebuilt from `g:Vertex`, `g:Edge`, `g:VertexProperty`,
//! `g:Property` and `g:Path` records.

use std::collections::BTreeSet;

use crate::value::{GraphValue, Properties};

/// Default label of a vertex record without one.
pub const DEFAULT_VERTEX_LABEL: &str = "vertex";
/// Default label of an edge record without one.
pub const DEFAULT_EDGE_LABEL: &str = "edge";

/// Kind marker carried by graph elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Vertex,
    Edge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: GraphValue,
    pub label: String,
    /// Property name → decoded value, normally a list of vertex properties.
    pub properties: Properties,
}

impl Vertex {
    pub fn new(id: GraphValue, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            properties: Properties::new(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        ElementKind::Vertex
    }

    /// The vertex properties stored under `key`.
    ///
    /// Yields nothing when the key is absent or holds untyped values.
    pub fn vertex_properties<'a>(
        &'a self,
        key: &str,
    ) -> impl Iterator<Item = &'a VertexProperty> + 'a {
        let entries: &'a [GraphValue] = match self.properties.get(key) {
            Some(GraphValue::List(items)) => items.as_slice(),
            Some(single) if matches!(single, GraphValue::VertexProperty(_)) => {
                std::slice::from_ref(single)
            }
            _ => &[],
        };
        entries.iter().filter_map(GraphValue::as_vertex_property)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: GraphValue,
    pub label: String,
    pub properties: Properties,
    pub in_v: Vertex,
    pub in_v_label: String,
    pub out_v: Vertex,
    pub out_v_label: String,
}

impl Edge {
    pub fn kind(&self) -> ElementKind {
        ElementKind::Edge
    }

    /// Value of the edge property `key`, unwrapping a `g:Property` record.
    pub fn property(&self, key: &str) -> Option<&GraphValue> {
        match self.properties.get(key)? {
            GraphValue::Property(p) => Some(&p.value),
            other => Some(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VertexProperty {
    pub id: Option<GraphValue>,
    pub label: String,
    pub value: GraphValue,
    /// Meta-properties.
    pub properties: Properties,
}

/// A key/value pair from a `g:Property` record.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: GraphValue,
}

impl Property {
    pub fn new(key: impl Into<String>, value: GraphValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A traversal path: per step, the set of labels and the visited object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub labels: Vec<BTreeSet<String>>,
    pub objects: Vec<GraphValue>,
}

impl Path {
    pub fn new(labels: Vec<BTreeSet<String>>, objects: Vec<GraphValue>) -> Self {
        Self { labels, objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The object of the first step labelled `label`.
    pub fn get(&self, label: &str) -> Option<&GraphValue> {
        self.labels
            .iter()
            .position(|set| set.contains(label))
            .and_then(|i| self.objects.get(i))
    }
}
