//! cellmeta - Custom cell metadata through autofill and paste.
//!
//! The heavy lifting lives in `cellmeta-engine` (coordinates and tiling) and
//! `cellmeta-core` (live state, mutations, hooks). This crate wires the two
//! controllers into a [`SheetHost`] as plugins and loads their configuration.

pub mod config;
pub mod error;
pub mod plugin;

pub use config::{PluginConfig, load_config};
pub use error::{CellMetaError, Result};
pub use plugin::{
    AUTO_FILL_PLUGIN_NAME, CLIPBOARD_PLUGIN_NAME, CellCustomAutoFillPlugin, CellCustomPastePlugin,
    Plugin, SheetHost,
};
