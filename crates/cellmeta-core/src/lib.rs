//! cellmeta-core - Live sheet state, range mutations and the custom-metadata hooks.

pub mod controllers;
pub mod document;
pub mod error;
pub mod hooks;

pub use controllers::{
    CellCustomAutoFillController, CellCustomCopyPasteController, CellCustomOptions,
};
pub use document::{InstanceService, MutationInfo, MutationPair, Workbook, Worksheet};
pub use error::{CoreError, Result};
pub use hooks::{AutoFillHook, AutoFillService, ClipboardHook, ClipboardService, Disposable};

pub use cellmeta_engine::engine::CellRef;
