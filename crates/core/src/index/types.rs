//! Index data types.

use serde::Serialize;
use std::path::PathBuf;

use crate::frontmatter::Frontmatter;

/// One markdown note in the index.
///
/// Records are immutable after construction; derived fields are computed
/// from `raw_content` exactly once, at load time.
#[derive(Debug, Clone, Serialize)]
pub struct NoteRecord {
    /// Absolute path, the record's unique key.
    pub path: PathBuf,
    /// Full file text, source of truth for content matching.
    pub raw_content: String,
    /// Parsed frontmatter. `None` when the note has no block or the block
    /// failed to parse.
    pub frontmatter: Option<Frontmatter>,
}

impl NoteRecord {
    /// Tags from the record's frontmatter, or empty when the `tags` key is
    /// missing or not a sequence.
    pub fn tags(&self) -> Vec<String> {
        self.frontmatter.as_ref().map(Frontmatter::tags).unwrap_or_default()
    }

    /// Whether the record carries the soft-delete marker.
    pub fn is_deleted(&self) -> bool {
        self.frontmatter.as_ref().is_some_and(Frontmatter::is_deleted)
    }
}
