//! Spreadsheet engine API.
//!
//! This module provides the data layer shared by the autofill and paste
//! pipelines:
//!
//! - [`CellData`], [`PastedCell`] - Cell records carrying opaque custom metadata
//! - [`CellRef`] - Cell positions (row/col indices, displayed as A1 labels)
//! - [`Range`], [`DiscreteRange`] - Rectangular and discontinuous selections
//! - [`ObjectMatrix`] - Sparse row/column storage
//! - [`virtualize_discrete_ranges`] - Dense virtual coordinates over gapped ranges
//! - [`get_auto_fill_repeat_range`] - Tiling a source shape across a fill target

mod cell;
mod cell_ref;
mod fill;
mod location;
mod matrix;
mod range;
mod repeat;
mod virtualize;

pub use cell::{CellData, PastedCell};
pub use cell_ref::CellRef;
pub use fill::{ApplyType, Direction};
pub use location::{AutoFillLocation, SheetDiscreteRangeLocation};
pub use matrix::ObjectMatrix;
pub use range::{DiscreteRange, Range};
pub use repeat::{RepeatRange, get_auto_fill_repeat_range};
pub use virtualize::{VirtualizedRanges, virtualize_discrete_ranges};

pub use serde_json::Value;
