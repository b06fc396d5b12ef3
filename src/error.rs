//! Error types for the cellmeta plugins

use thiserror::Error;

use cellmeta_core::CoreError;

/// Errors that can occur while configuring or running the plugins
#[derive(Error, Debug)]
pub enum CellMetaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Plugin already registered: {0}")]
    DuplicatePlugin(String),
}

pub type Result<T> = std::result::Result<T, CellMetaError>;
