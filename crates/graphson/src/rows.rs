//! Traversal result rows.
//!
//! A graph server answers a traversal with one JSON row per result, each
//! shaped `{"result": <graphson>}`. Rows are turned into [`Traverser`]s with a
//! bulk of one.

use serde_json::Value;

use crate::error::{GraphSONError, Result};
use crate::options::ReaderOptions;
use crate::reader::GraphSONReader;
use crate::value::GraphValue;

const RESULT_KEY: &str = "result";

#[derive(Debug, Clone, PartialEq)]
pub struct Traverser {
    pub object: GraphValue,
    pub bulk: i64,
}

impl Traverser {
    pub fn new(object: GraphValue) -> Self {
        Self { object, bulk: 1 }
    }
}

/// A reader over the structural table, since traversal results carry graph
/// elements.
pub fn traversal_reader() -> GraphSONReader {
    GraphSONReader::new(ReaderOptions::structural())
}

pub fn decode_traversal_row(reader: &GraphSONReader, row: &str) -> Result<Traverser> {
    let row: Value = serde_json::from_str(row)?;
    let result = row
        .get(RESULT_KEY)
        .ok_or_else(|| GraphSONError::missing(RESULT_KEY, "row"))?;
    reader.to_object(result).map(Traverser::new)
}

/// Decodes every row, stopping at the first failure.
pub fn decode_traversal_rows<I, S>(reader: &GraphSONReader, rows: I) -> Result<Vec<Traverser>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .map(|row| decode_traversal_row(reader, row.as_ref()))
        .collect()
}
