//! Bundler entry point map command.

use std::path::Path;

use anyhow::Result;
use pagelift_pages::Project;

use crate::config::load_config;

/// Print the entry point map as JSON on stdout, one key per page plus the
/// root index, for pasting into a bundler's input configuration.
pub fn run(config_path: &Path, pages: Option<String>, index: Option<String>) -> Result<()> {
    let file_config = load_config(config_path)?;

    let pages = pages.or(file_config.pages.dir);
    let index = index.unwrap_or(file_config.pages.index);

    let project = Project::discover()?;
    let entries = project.entry_points(pages.as_deref(), &index)?;

    println!("{}", serde_json::to_string_pretty(&entries)?);

    Ok(())
}
