//! Plugin configuration.
//!
//! Loaded from `cellmeta.toml`, either an explicit path or the per-user config
//! dir. Problems never abort startup: they come back as warnings and the
//! defaults are used instead.
//!
//! ```toml
//! [auto_fill]
//! priority = 0
//!
//! [clipboard]
//! priority = 0
//! skip_empty_paste = false
//! ```

use std::path::{Path, PathBuf};

use cellmeta_core::CellCustomOptions;
use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::Result;

const MAX_CONFIG_FILE_BYTES: u64 = 65_536; // 64 KiB
const CONFIG_FILE_NAME: &str = "cellmeta.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    pub auto_fill: AutoFillConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutoFillConfig {
    /// Hook priority; higher runs first.
    pub priority: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardConfig {
    pub priority: i32,
    /// Return no mutations at all when a paste carries no custom metadata,
    /// instead of an empty redo/undo pair.
    pub skip_empty_paste: bool,
}

impl PluginConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn options(&self) -> CellCustomOptions {
        CellCustomOptions {
            auto_fill_priority: self.auto_fill.priority,
            clipboard_priority: self.clipboard.priority,
            skip_empty_paste: self.clipboard.skip_empty_paste,
        }
    }
}

/// Load the plugin config, falling back to defaults.
///
/// A missing file at the user config location is normal and silent; a missing
/// explicitly requested file is reported.
pub fn load_config(config_file: Option<&PathBuf>) -> (PluginConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = config_file.cloned().or_else(user_config_path);
    let mut config = PluginConfig::default();

    if let Some(path) = config_path.as_ref() {
        if path.exists() {
            match std::fs::metadata(path) {
                Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
                    warnings.push(format!(
                        "Refusing to read {}: file too large ({} bytes, max {})",
                        path.display(),
                        meta.len(),
                        MAX_CONFIG_FILE_BYTES
                    ));
                }
                Ok(_) => match PluginConfig::from_path(path) {
                    Ok(parsed) => config = parsed,
                    Err(err) => {
                        warnings.push(format!("Failed to load {}: {}", path.display(), err))
                    }
                },
                Err(err) => warnings.push(format!(
                    "Failed to read metadata for {}: {}",
                    path.display(),
                    err
                )),
            }
        } else if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
    }

    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    (config, warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellmeta")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push(CONFIG_FILE_NAME);
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = PluginConfig::from_toml_str("").unwrap();
        assert_eq!(config, PluginConfig::default());
        assert_eq!(config.options(), CellCustomOptions::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = PluginConfig::from_toml_str("[clipboard]\nskip_empty_paste = true\n").unwrap();
        let options = config.options();
        assert!(options.skip_empty_paste);
        assert_eq!(options.clipboard_priority, 0);
        assert_eq!(options.auto_fill_priority, 0);
    }

    #[test]
    fn test_priorities_map_to_options() {
        let content = r#"
[auto_fill]
priority = 5

[clipboard]
priority = -3
"#;
        let options = PluginConfig::from_toml_str(content).unwrap().options();
        assert_eq!(options.auto_fill_priority, 5);
        assert_eq!(options.clipboard_priority, -3);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(PluginConfig::from_toml_str("[auto_fill]\nprioritty = 1\n").is_err());
        assert!(PluginConfig::from_toml_str("[undo]\nenabled = true\n").is_err());
    }

    #[test]
    fn test_load_config_reads_explicit_file() {
        let temp_path = std::env::temp_dir().join("cellmeta_config_test.toml");
        std::fs::write(&temp_path, "[auto_fill]\npriority = 7\n").expect("write temp config");

        let (config, warnings) = load_config(Some(&temp_path));
        assert_eq!(config.auto_fill.priority, 7);
        assert!(warnings.is_empty());

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_config_falls_back_on_parse_error() {
        let temp_path = std::env::temp_dir().join("cellmeta_config_broken.toml");
        std::fs::write(&temp_path, "[clipboard\npriority = ").expect("write broken config");

        let (config, warnings) = load_config(Some(&temp_path));
        assert_eq!(config, PluginConfig::default());
        assert!(warnings.iter().any(|w| w.contains("Failed to load")));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_config_rejects_oversized_file() {
        let temp_path = std::env::temp_dir().join("cellmeta_config_large.toml");
        let oversized = "#".repeat(MAX_CONFIG_FILE_BYTES as usize + 1);
        std::fs::write(&temp_path, oversized).expect("write oversized config");

        let (config, warnings) = load_config(Some(&temp_path));
        assert_eq!(config, PluginConfig::default());
        assert!(
            warnings
                .iter()
                .any(|w| w.contains("file too large") && w.contains("Refusing to read"))
        );

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_config_warns_on_missing_explicit_file() {
        let temp_path = std::env::temp_dir().join("cellmeta_config_does_not_exist.toml");
        let _ = std::fs::remove_file(&temp_path);

        let (config, warnings) = load_config(Some(&temp_path));
        assert_eq!(config, PluginConfig::default());
        assert!(warnings.iter().any(|w| w.contains("Config file not found")));
    }
}
