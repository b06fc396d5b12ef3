//! Where a fill or paste lands.

use serde::{Deserialize, Serialize};

use super::range::DiscreteRange;

/// Source and target of an autofill gesture on one sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoFillLocation {
    pub source: DiscreteRange,
    pub target: DiscreteRange,
    pub unit_id: String,
    pub sub_unit_id: String,
}

/// A (possibly discontinuous) range on a specific sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetDiscreteRangeLocation {
    pub unit_id: String,
    pub sub_unit_id: String,
    pub range: DiscreteRange,
}
