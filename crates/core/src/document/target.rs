//! Editable note targets.
//!
//! Every mutation in this crate is applied to an explicit, caller-supplied
//! handle; the core never reaches for ambient editor state.

use std::fs;
use std::path::{Path, PathBuf};

use super::DocumentError;

/// A single text edit produced by the merge-write protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEdit {
    /// Replace exactly the given byte span with new text.
    ReplaceSpan { start: usize, end: usize, text: String },
    /// Insert text at the very top of the note.
    InsertAtTop { text: String },
}

/// Handle to an editable note.
pub trait EditTarget {
    /// Path of the underlying note (used for deny-list checks and renames).
    fn path(&self) -> &Path;

    /// Current raw text, the single source of truth for derived state.
    fn content(&self) -> Result<String, DocumentError>;

    /// Whether mutations can be applied to this target.
    fn writable(&self) -> bool {
        true
    }

    /// Apply one edit to the note text.
    fn apply(&mut self, edit: NoteEdit) -> Result<(), DocumentError>;

    /// Rename the note within its directory. Implementations must refuse to
    /// clobber an existing file unless `overwrite` is set.
    fn rename(&mut self, new_file_name: &str, overwrite: bool)
    -> Result<(), DocumentError>;
}

fn splice(raw: &str, edit: NoteEdit) -> String {
    match edit {
        NoteEdit::ReplaceSpan { start, end, text } => {
            format!("{}{}{}", &raw[..start], text, &raw[end..])
        }
        NoteEdit::InsertAtTop { text } => format!("{}{}", text, raw),
    }
}

/// File-backed target used by batch tooling and the CLI.
#[derive(Debug)]
pub struct FileTarget {
    path: PathBuf,
}

impl FileTarget {
    /// Open an existing note file. A missing file means there is nothing to
    /// mutate, which surfaces as `EditorUnavailable`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DocumentError> {
        let path = path.into();
        if !path.is_file() {
            return Err(DocumentError::EditorUnavailable(path.display().to_string()));
        }
        Ok(Self { path })
    }
}

impl EditTarget for FileTarget {
    fn path(&self) -> &Path {
        &self.path
    }

    fn content(&self) -> Result<String, DocumentError> {
        fs::read_to_string(&self.path)
            .map_err(|e| DocumentError::Read { path: self.path.clone(), source: e })
    }

    fn apply(&mut self, edit: NoteEdit) -> Result<(), DocumentError> {
        let raw = self.content()?;
        let updated = splice(&raw, edit);
        fs::write(&self.path, updated)
            .map_err(|e| DocumentError::Write { path: self.path.clone(), source: e })
    }

    fn rename(
        &mut self,
        new_file_name: &str,
        overwrite: bool,
    ) -> Result<(), DocumentError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let new_path = dir.join(new_file_name);

        if new_path == self.path {
            return Ok(());
        }
        if new_path.exists() && !overwrite {
            return Err(DocumentError::RenameTargetExists(new_path));
        }

        fs::rename(&self.path, &new_path)
            .map_err(|e| DocumentError::Rename { path: self.path.clone(), source: e })?;
        self.path = new_path;
        Ok(())
    }
}

/// In-memory target modelling a host-owned editor buffer.
///
/// Renames only adjust the recorded path; the host that owns the buffer is
/// responsible for moving any backing file.
#[derive(Debug)]
pub struct BufferTarget {
    path: PathBuf,
    text: String,
    writable: bool,
}

impl BufferTarget {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self { path: path.into(), text: text.into(), writable: true }
    }

    pub fn read_only(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self { path: path.into(), text: text.into(), writable: false }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl EditTarget for BufferTarget {
    fn path(&self) -> &Path {
        &self.path
    }

    fn content(&self) -> Result<String, DocumentError> {
        Ok(self.text.clone())
    }

    fn writable(&self) -> bool {
        self.writable
    }

    fn apply(&mut self, edit: NoteEdit) -> Result<(), DocumentError> {
        self.text = splice(&self.text, edit);
        Ok(())
    }

    fn rename(
        &mut self,
        new_file_name: &str,
        _overwrite: bool,
    ) -> Result<(), DocumentError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        self.path = dir.join(new_file_name);
        Ok(())
    }
}
