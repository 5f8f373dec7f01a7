//! Bundler entry point assembly.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use crate::project::{Project, ResolveError};

/// Default index file, relative to the project root.
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Map from logical page name to the file backing it.
///
/// Keyed lexicographically, so downstream output is stable regardless of
/// filesystem listing order.
pub type EntryPoints = BTreeMap<String, PathBuf>;

impl Project {
    /// Assemble the bundler entry point map: the root index file under the
    /// fixed `index` key, plus one entry per immediate `*.html` file in the
    /// pages directory, keyed by file stem.
    ///
    /// The pages directory comes from `pages` when given, otherwise from
    /// auto-detection. A page named `index.html` inside the pages directory
    /// replaces the seeded root index entry.
    pub fn entry_points(
        &self,
        pages: Option<&str>,
        index_file: &str,
    ) -> Result<EntryPoints, ResolveError> {
        let pages_dir = self.locate_pages_dir(pages)?;

        let index_path = self.resolve(index_file);
        if !index_path.is_file() {
            return Err(ResolveError::IndexMissing {
                relative: index_file.to_string(),
                resolved: index_path,
            });
        }

        let mut entries = EntryPoints::new();
        entries.insert("index".to_string(), index_path);

        let listing = fs::read_dir(&pages_dir).map_err(|e| ResolveError::ListDir {
            dir: pages_dir.clone(),
            message: e.to_string(),
        })?;

        for entry in listing {
            let entry = entry.map_err(|e| ResolveError::ListDir {
                dir: pages_dir.clone(),
                message: e.to_string(),
            })?;
            let path = entry.path();

            if !path.is_file() || path.extension().and_then(OsStr::to_str) != Some("html") {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
                continue;
            };

            entries.insert(stem.to_string(), path);
        }

        tracing::debug!("assembled {} entry points", entries.len());

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::MANIFEST_FILE;
    use std::path::Path;
    use tempfile::tempdir;

    fn scaffold(root: &Path, pages: &[&str]) {
        let pages_dir = root.join("src/pages");
        fs::create_dir_all(&pages_dir).unwrap();
        fs::write(root.join(MANIFEST_FILE), "{}").unwrap();
        fs::write(root.join("index.html"), "<html>index</html>").unwrap();

        for page in pages {
            fs::write(pages_dir.join(page), format!("<html>{page}</html>")).unwrap();
        }
    }

    #[test]
    fn maps_index_plus_each_discovered_page() {
        let temp = tempdir().unwrap();
        scaffold(temp.path(), &["about.html", "contact.html"]);

        let project = Project::at_root(temp.path());
        let entries = project
            .entry_points(Some("src/pages"), DEFAULT_INDEX_FILE)
            .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries["index"], temp.path().join("index.html"));
        assert_eq!(entries["about"], temp.path().join("src/pages/about.html"));
        assert_eq!(
            entries["contact"],
            temp.path().join("src/pages/contact.html")
        );
    }

    #[test]
    fn skips_non_html_entries_and_subdirectories() {
        let temp = tempdir().unwrap();
        scaffold(temp.path(), &["about.html"]);
        fs::write(temp.path().join("src/pages/notes.txt"), "notes").unwrap();
        fs::create_dir_all(temp.path().join("src/pages/nested")).unwrap();
        fs::write(
            temp.path().join("src/pages/nested/deep.html"),
            "<html></html>",
        )
        .unwrap();

        let project = Project::at_root(temp.path());
        let entries = project
            .entry_points(Some("src/pages"), DEFAULT_INDEX_FILE)
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.contains_key("index"));
        assert!(entries.contains_key("about"));
    }

    #[test]
    fn page_named_index_replaces_the_root_index() {
        let temp = tempdir().unwrap();
        scaffold(temp.path(), &["index.html"]);

        let project = Project::at_root(temp.path());
        let entries = project
            .entry_points(Some("src/pages"), DEFAULT_INDEX_FILE)
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries["index"], temp.path().join("src/pages/index.html"));
    }

    #[test]
    fn fails_when_pages_directory_is_missing() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "<html></html>").unwrap();

        let project = Project::at_root(temp.path());
        let err = project
            .entry_points(Some("src/pages"), DEFAULT_INDEX_FILE)
            .unwrap_err();

        assert!(matches!(err, ResolveError::PagesDirMissing { .. }));
    }

    #[test]
    fn fails_when_index_file_is_missing() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src/pages")).unwrap();

        let project = Project::at_root(temp.path());
        let err = project
            .entry_points(Some("src/pages"), DEFAULT_INDEX_FILE)
            .unwrap_err();

        match err {
            ResolveError::IndexMissing { relative, resolved } => {
                assert_eq!(relative, "index.html");
                assert_eq!(resolved, temp.path().join("index.html"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn auto_detects_the_pages_directory_when_unset() {
        let temp = tempdir().unwrap();
        scaffold(temp.path(), &["about.html"]);

        let project = Project::at_root(temp.path());
        let entries = project.entry_points(None, DEFAULT_INDEX_FILE).unwrap();

        assert_eq!(entries["about"], temp.path().join("src/pages/about.html"));
    }

    #[test]
    fn auto_detection_failure_is_fatal() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "<html></html>").unwrap();

        let project = Project::at_root(temp.path());
        let err = project.entry_points(None, DEFAULT_INDEX_FILE).unwrap_err();

        assert!(matches!(err, ResolveError::DetectFailed));
    }
}
