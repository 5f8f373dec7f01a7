//! Project root discovery and path resolution.

use std::env;
use std::path::{Path, PathBuf};

use crate::detect::{detect_pages_dir_under, PAGES_DIR_CANDIDATES};

/// File whose presence marks a directory as the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Errors that can occur while resolving project paths.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("could not find project root: no {} in {start} or any parent directory", MANIFEST_FILE)]
    ProjectRootNotFound { start: PathBuf },

    #[error("pages directory does not exist: {relative} (resolved to: {resolved})")]
    PagesDirMissing { relative: String, resolved: PathBuf },

    #[error("index file does not exist: {relative} (resolved to: {resolved})")]
    IndexMissing { relative: String, resolved: PathBuf },

    #[error("could not find a pages directory; searched: {}", PAGES_DIR_CANDIDATES.join(", "))]
    DetectFailed,

    #[error("failed to list pages directory {dir}: {message}")]
    ListDir { dir: PathBuf, message: String },

    #[error("failed to resolve current directory: {0}")]
    CurrentDir(String),
}

/// A project rooted at the nearest ancestor directory carrying the manifest
/// file.
///
/// Resolution happens once per invocation; the root is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Discover the project root starting from the current working directory.
    pub fn discover() -> Result<Self, ResolveError> {
        let cwd = env::current_dir().map_err(|e| ResolveError::CurrentDir(e.to_string()))?;
        Self::discover_from(cwd)
    }

    /// Discover the project root by walking up from `start` until a directory
    /// containing the manifest file is found.
    pub fn discover_from(start: impl Into<PathBuf>) -> Result<Self, ResolveError> {
        let start = start.into();
        let mut current = start.clone();

        loop {
            if current.join(MANIFEST_FILE).is_file() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(ResolveError::ProjectRootNotFound { start });
            }
        }
    }

    /// Wrap an already-known root without walking the filesystem.
    pub fn at_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a path relative to the project root.
    ///
    /// Pure path arithmetic, no existence check.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Resolve the pages directory from an explicit relative path and verify
    /// it exists on disk.
    pub fn pages_dir(&self, relative: &str) -> Result<PathBuf, ResolveError> {
        let resolved = self.resolve(relative);

        if !resolved.is_dir() {
            return Err(ResolveError::PagesDirMissing {
                relative: relative.to_string(),
                resolved,
            });
        }

        Ok(resolved)
    }

    /// Find the first existing candidate pages directory under the root.
    pub fn detect_pages_dir(&self) -> Option<&'static str> {
        detect_pages_dir_under(&self.root)
    }

    /// Locate the pages directory: validate the explicit relative path when
    /// one is given, otherwise fall back to auto-detection.
    pub fn locate_pages_dir(&self, relative: Option<&str>) -> Result<PathBuf, ResolveError> {
        match relative {
            Some(rel) => self.pages_dir(rel),
            None => {
                let detected = self.detect_pages_dir().ok_or(ResolveError::DetectFailed)?;
                tracing::info!("auto-detected pages directory: {}", detected);
                self.pages_dir(detected)
            }
        }
    }
}
