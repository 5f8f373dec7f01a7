//! Post-build flatten command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::load_config;

/// Run the flattener over the build output.
///
/// Failures are logged rather than propagated: by the time this runs the
/// bundle is already written, and it is worth more than strict cleanup.
pub fn run(config_path: &Path, output: Option<PathBuf>, pages: Option<String>) -> Result<()> {
    let file_config = load_config(config_path)?;

    let output_dir = output.unwrap_or_else(|| PathBuf::from(&file_config.build.output));
    let pages = pages.or(file_config.pages.dir);

    match pagelift_static::flatten(&output_dir, pages.as_deref()) {
        Ok(result) => {
            tracing::info!(
                "Flattened {} pages ({} directories removed) in {}",
                result.pages,
                result.dirs_removed,
                output_dir.display()
            );
        }
        Err(e) => {
            tracing::warn!("Flattening did not complete: {}", e);
        }
    }

    Ok(())
}
