//! Cell records.
//!
//! - [`CellData`] - One cell's value, style and custom metadata, all opaque JSON
//! - [`PastedCell`] - A clipboard cell with its merge span
//!
//! Every field is tri-state: missing (`None`), an explicit JSON `null`
//! (`Some(Value::Null)`, "clear this field" when used as a patch) or a value.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CellData {
    /// Cell value.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub v: Option<Value>,
    /// Style, either inline or a style id.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub s: Option<Value>,
    /// Custom metadata attached by extensions.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub custom: Option<Value>,
}

impl CellData {
    pub fn with_value(v: Value) -> Self {
        Self {
            v: Some(v),
            ..Self::default()
        }
    }

    /// A record carrying only custom metadata.
    pub fn with_custom(custom: Value) -> Self {
        Self {
            custom: Some(custom),
            ..Self::default()
        }
    }

    /// The custom metadata, if the cell really has some. An explicit `null`
    /// counts as absent.
    pub fn custom(&self) -> Option<&Value> {
        self.custom.as_ref().filter(|custom| !custom.is_null())
    }

    pub fn is_empty(&self) -> bool {
        self.v.is_none() && self.s.is_none() && self.custom.is_none()
    }
}

/// Keep an explicit `null` as `Some(Value::Null)` instead of folding it into `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A cell as it sits on the clipboard, already aligned to paste-local coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastedCell {
    #[serde(flatten)]
    pub cell: CellData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<usize>,
}

impl From<CellData> for PastedCell {
    fn from(cell: CellData) -> Self {
        Self {
            cell,
            row_span: None,
            col_span: None,
        }
    }
}
