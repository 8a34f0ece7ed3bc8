//! Export configuration
//!
//! Controls column-width policy and the optional formatting passes of the
//! spreadsheet exporter. Config can come from a TOML file or be built in
//! code; every field has a default so an empty file is a valid config.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;

/// Configuration for the tabular export formatter
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Width assigned to columns without an override or category floor
    pub default_width: f64,
    /// Explicit per-column width overrides, keyed by column name
    pub column_widths: IndexMap<String, f64>,
    /// Apply value-range conditional styling to amount/frequency columns
    pub conditional_formatting: bool,
    /// Freeze the header row so it stays visible on scroll
    pub freeze_panes: bool,
    /// Directory that generated output files are placed under
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_width: 15.0,
            column_widths: IndexMap::new(),
            conditional_formatting: true,
            freeze_panes: true,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl ExportConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Width for a column: explicit override if present, else the default
    pub fn width_for(&self, column: &str) -> f64 {
        self.column_widths
            .get(column)
            .copied()
            .unwrap_or(self.default_width)
    }

    /// Timestamped output path under the configured output directory
    pub fn output_path(&self, base_name: &str, extension: &str) -> Result<PathBuf> {
        crate::export::paths::output_path(&self.output_dir, base_name, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ExportConfig::default();
        assert_eq!(cfg.default_width, 15.0);
        assert!(cfg.column_widths.is_empty());
        assert!(cfg.conditional_formatting);
        assert!(cfg.freeze_panes);
        assert_eq!(cfg.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let cfg = ExportConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.default_width, 15.0);
    }

    #[test]
    fn test_from_toml() {
        let cfg = ExportConfig::from_toml_str(
            r#"
            default_width = 18.0
            freeze_panes = false

            [column_widths]
            "交易备注" = 40.0
            "#,
        )
        .unwrap();

        assert_eq!(cfg.default_width, 18.0);
        assert!(!cfg.freeze_panes);
        assert_eq!(cfg.width_for("交易备注"), 40.0);
        assert_eq!(cfg.width_for("其他列"), 18.0);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(ExportConfig::from_toml_str("default_width = \"wide\"").is_err());
    }
}
