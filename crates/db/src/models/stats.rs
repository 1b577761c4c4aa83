//! Aggregate views over the catalog.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Entity counts for the summary display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogStats {
    pub script_count: usize,
    pub item_count: usize,
}

/// A single facet bucket: category value + number of entities carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacetValue {
    pub value: String,
    pub count: usize,
}
