//! Index building orchestration.

use std::path::PathBuf;

use thiserror::Error;

use super::types::NoteRecord;
use crate::frontmatter;
use crate::util::dedup_stable;
use crate::vault::{VaultWalker, VaultWalkerError};

#[derive(Debug, Error)]
pub enum IndexBuildError {
    #[error("note walker error: {0}")]
    Walker(#[from] VaultWalkerError),
}

/// Statistics from an index build.
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    /// Number of files discovered across all roots.
    pub files_found: usize,
    /// Number of records produced.
    pub notes_indexed: usize,
    /// Number of files skipped because they could not be read.
    pub notes_skipped: usize,
}

/// Builds the in-memory note index from one or more roots.
pub struct NoteIndexBuilder {
    roots: Vec<PathBuf>,
}

impl NoteIndexBuilder {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Load every note under the configured roots into records, concatenated
    /// in multi-root traversal order.
    pub fn build_index(&self) -> Result<Vec<NoteRecord>, IndexBuildError> {
        self.build_index_with_stats().map(|(records, _)| records)
    }

    /// As [`build_index`](Self::build_index), also reporting build statistics.
    ///
    /// Per-file failures degrade instead of aborting: an unreadable file is
    /// skipped, a file whose frontmatter does not parse is recorded with no
    /// frontmatter. Either way the failure is logged once. A failed
    /// directory walk aborts the whole build.
    pub fn build_index_with_stats(
        &self,
    ) -> Result<(Vec<NoteRecord>, IndexStats), IndexBuildError> {
        let mut records = Vec::new();
        let mut stats = IndexStats::default();

        for root in &self.roots {
            let walker = VaultWalker::new(root)?;
            for file in walker.walk()? {
                stats.files_found += 1;

                let raw_content = match std::fs::read_to_string(&file.absolute_path) {
                    Ok(content) => content,
                    Err(e) => {
                        tracing::warn!(
                            "failed to read {}: {}",
                            file.absolute_path.display(),
                            e
                        );
                        stats.notes_skipped += 1;
                        continue;
                    }
                };

                let frontmatter = match frontmatter::parse(&raw_content) {
                    Ok(parsed) => parsed.frontmatter,
                    Err(e) => {
                        tracing::warn!(
                            "unparsable frontmatter in {}: {}",
                            file.absolute_path.display(),
                            e
                        );
                        None
                    }
                };

                records.push(NoteRecord {
                    path: file.absolute_path,
                    raw_content,
                    frontmatter,
                });
                stats.notes_indexed += 1;
            }
        }

        Ok((records, stats))
    }

    /// Aggregate every tag under the configured roots, deduplicated in
    /// first-seen order.
    pub fn collect_tags(&self) -> Result<Vec<String>, IndexBuildError> {
        Ok(collect_tags_from(&self.build_index()?))
    }
}

/// Flatten the `tags` of every record and deduplicate, preserving first-seen
/// order. Records without a usable `tags` sequence contribute nothing.
pub fn collect_tags_from(records: &[NoteRecord]) -> Vec<String> {
    dedup_stable(records.iter().flat_map(NoteRecord::tags))
}
