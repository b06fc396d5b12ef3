//! Autofill gesture tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an autofill gesture applies the source to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplyType {
    Copy,
    Series,
    OnlyFormat,
    NoFormat,
    /// Any mode a host defines that this crate doesn't model.
    #[serde(other)]
    Other,
}

impl ApplyType {
    /// Whether custom metadata travels with this kind of fill.
    pub fn copies_custom(self) -> bool {
        matches!(self, ApplyType::Copy | ApplyType::OnlyFormat | ApplyType::Series)
    }
}

impl fmt::Display for ApplyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApplyType::Copy => "COPY",
            ApplyType::Series => "SERIES",
            ApplyType::OnlyFormat => "ONLY_FORMAT",
            ApplyType::NoFormat => "NO_FORMAT",
            ApplyType::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// Direction the fill handle was dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
