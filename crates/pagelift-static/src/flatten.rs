//! Post-build page relocation and directory cleanup.

use std::fs;
use std::path::Path;

use pagelift_pages::detect_pages_dir_under;

/// Result of a flatten operation.
#[derive(Debug, Default)]
pub struct FlattenResult {
    /// Number of page files moved to the output root
    pub pages: usize,

    /// Number of emptied directories removed during cleanup
    pub dirs_removed: usize,
}

/// Errors that can occur during flattening.
#[derive(Debug, thiserror::Error)]
pub enum FlattenError {
    #[error("Failed to read build output: {0}")]
    ReadError(String),

    #[error("Failed to move page: {0}")]
    MoveError(String),
}

/// Move page HTML files nested under the pages subdirectory of `output_dir`
/// up to the output root, then remove the emptied directory chain.
///
/// `pages_path` is the pages directory relative to the output root; when
/// unset, the fixed candidate list is searched under `output_dir` instead.
/// A missing subtree is not an error: some builds legitimately emit no page
/// HTML, and a second run over already-flattened output is a no-op. Cleanup
/// is best-effort and stops silently at the first directory that is
/// non-empty or already gone.
pub fn flatten(output_dir: &Path, pages_path: Option<&str>) -> Result<FlattenResult, FlattenError> {
    let pages_path = match pages_path {
        Some(rel) => rel,
        None => match detect_pages_dir_under(output_dir) {
            Some(detected) => {
                tracing::info!("auto-detected pages directory for flattening: {}", detected);
                detected
            }
            None => {
                tracing::info!("no pages directory found in build output, nothing to flatten");
                return Ok(FlattenResult::default());
            }
        },
    };

    let source_dir = output_dir.join(pages_path);
    if !source_dir.is_dir() {
        tracing::info!(
            "no pages directory at {} in build output, nothing to flatten",
            pages_path
        );
        return Ok(FlattenResult::default());
    }

    let listing = fs::read_dir(&source_dir)
        .map_err(|e| FlattenError::ReadError(format!("{}: {}", source_dir.display(), e)))?;

    let mut pages = 0;
    for entry in listing {
        let entry = entry
            .map_err(|e| FlattenError::ReadError(format!("{}: {}", source_dir.display(), e)))?;
        let name = entry.file_name();

        if !name.to_string_lossy().ends_with(".html") {
            continue;
        }

        let from = entry.path();
        let to = output_dir.join(&name);

        // Destination collisions overwrite; the bundle write owns the root.
        fs::rename(&from, &to).map_err(|e| {
            FlattenError::MoveError(format!("{} -> {}: {}", from.display(), to.display(), e))
        })?;

        tracing::info!(
            "moved {} from {} to output root",
            name.to_string_lossy(),
            pages_path
        );
        pages += 1;
    }

    let dirs_removed = remove_empty_chain(&source_dir, Path::new(pages_path).components().count());

    Ok(FlattenResult { pages, dirs_removed })
}

/// Remove the directory chain bottom-up, starting at `deepest` and stepping
/// toward the output root for at most `depth` removals.
///
/// `fs::remove_dir` only succeeds on empty directories; the first failure
/// (non-empty or missing) ends the cleanup. Bounding the walk by `depth`
/// keeps it from climbing above the output root.
fn remove_empty_chain(deepest: &Path, depth: usize) -> usize {
    let mut current = deepest.to_path_buf();
    let mut removed = 0;

    for _ in 0..depth {
        if fs::remove_dir(&current).is_err() {
            break;
        }

        tracing::debug!("cleaned up empty directory {}", current.display());
        removed += 1;

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    removed
}
