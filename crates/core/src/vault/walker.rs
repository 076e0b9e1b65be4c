//! Recursive note directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("note root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk note directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A discovered note file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the walked root.
    pub relative_path: PathBuf,
}

/// Walker for discovering markdown notes under a root directory.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
}

impl VaultWalker {
    /// Create a new walker for the given root.
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(root.display().to_string()))?;
        Ok(Self { root })
    }

    /// Walk the root and return all note files, sorted by relative path.
    ///
    /// Hidden directories and common non-note directories are skipped.
    /// Symlinks are not followed, so cyclic directory structures cannot
    /// recurse. An unreadable directory fails the whole walk; callers that
    /// want partial results wrap per-root calls individually.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                VaultWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !path.is_file() || !is_note_file(path) {
                continue;
            }

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            files.push(WalkedFile { absolute_path: path.to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        // Skip hidden files and directories
        if name.starts_with('.') {
            return true;
        }

        // Skip common non-note directories
        matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv")
    }

    /// Get the walked root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Extension filter: exactly `.md` or `.markdown`, case-sensitive.
fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "md" || e == "markdown")
}
