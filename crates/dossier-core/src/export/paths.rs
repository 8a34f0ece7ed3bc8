//! Output path generation

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

/// Build a timestamped output path `{base_name}_{YYYYMMDD_HHMMSS}.{extension}`
/// under `output_dir`, creating the directory if needed. Spaces in the name
/// become underscores.
///
/// Uniqueness relies on second-resolution timestamps: two calls within the
/// same second produce the same path. Known limitation, callers that export
/// in tight loops should pick distinct base names.
pub fn output_path(output_dir: &Path, base_name: &str, extension: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let file_name = format!("{base_name}_{timestamp}.{extension}").replace(' ', "_");

    Ok(output_dir.join(file_name))
}
