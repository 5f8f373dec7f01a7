//! Pages directory auto-detection.

use std::path::Path;

/// Candidate pages directories, in priority order.
///
/// The order is a contract: the first existing candidate wins.
pub const PAGES_DIR_CANDIDATES: [&str; 6] = [
    "src/pages",
    "src/views",
    "app/pages",
    "pages",
    "views",
    "templates",
];

/// Return the first candidate that exists as a directory under `base`.
///
/// Deterministic for a given filesystem state. Used both against the project
/// root (dev-time detection) and against the build output directory
/// (flatten-time detection).
pub fn detect_pages_dir_under(base: &Path) -> Option<&'static str> {
    PAGES_DIR_CANDIDATES
        .iter()
        .copied()
        .find(|candidate| base.join(candidate).is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn returns_first_existing_candidate() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src/views")).unwrap();
        fs::create_dir_all(temp.path().join("pages")).unwrap();

        assert_eq!(detect_pages_dir_under(temp.path()), Some("src/views"));
    }

    #[test]
    fn earlier_candidate_wins_over_later() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("templates")).unwrap();

        assert_eq!(detect_pages_dir_under(temp.path()), Some("templates"));

        fs::create_dir_all(temp.path().join("src/pages")).unwrap();

        assert_eq!(detect_pages_dir_under(temp.path()), Some("src/pages"));
    }

    #[test]
    fn returns_none_when_no_candidate_exists() {
        let temp = tempdir().unwrap();

        assert_eq!(detect_pages_dir_under(temp.path()), None);
    }

    #[test]
    fn ignores_plain_files_with_candidate_names() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pages"), "not a directory").unwrap();

        assert_eq!(detect_pages_dir_under(temp.path()), None);
    }
}
