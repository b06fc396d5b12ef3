//! Error types for cellmeta core.

use thiserror::Error;

/// Errors raised while reading or mutating live sheet state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unit not found: {0}")]
    UnitNotFound(String),

    #[error("Sheet {sub_unit_id} not found in unit {unit_id}")]
    SheetNotFound { unit_id: String, sub_unit_id: String },

    #[error("Unknown mutation: {0}")]
    UnknownMutation(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
