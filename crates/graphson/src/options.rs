//! Reader and writer configuration.
//!
//! Both option structs deserialize with `#[serde(default)]`, so a host can
//! embed a partial `graphson` section in its own config file.

use serde::Deserialize;

/// Default bound on record/list/map nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Which decode table governs a reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    /// Scalar, temporal and geospatial tags only.
    #[default]
    Base,
    /// Base tags plus `g:Vertex`, `g:Edge`, `g:VertexProperty`, `g:Property`, `g:Path`.
    Structural,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    pub registry: RegistryKind,
    pub max_depth: usize,
    /// Label an edge without one `"vertex"` instead of `"edge"`, as older
    /// consumers expect.
    pub legacy_edge_label: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            registry: RegistryKind::Base,
            max_depth: DEFAULT_MAX_DEPTH,
            legacy_edge_label: false,
        }
    }
}

impl ReaderOptions {
    pub fn structural() -> Self {
        Self {
            registry: RegistryKind::Structural,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    pub max_depth: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
