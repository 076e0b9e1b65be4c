//! Applying parsed queries to the note index.

use super::query::SearchQuery;
use crate::index::NoteRecord;

/// Whether a record satisfies a query.
///
/// Tag filtering is conjunctive: every query tag must appear in the record's
/// `tags` sequence. A record whose `tags` key is missing or not a sequence
/// fails any non-empty tag filter. Content matching is a case-sensitive
/// literal substring test against the raw text; the empty string matches
/// every record.
pub fn matches(record: &NoteRecord, query: &SearchQuery) -> bool {
    matches_tags(record, &query.tags) && record.raw_content.contains(&query.content)
}

fn matches_tags(record: &NoteRecord, query_tags: &[String]) -> bool {
    if query_tags.is_empty() {
        return true;
    }

    let note_tags = record.tags();
    query_tags.iter().all(|tag| note_tags.contains(tag))
}

/// Filter the index by a query, preserving index order.
///
/// An empty result is a valid outcome, not an error.
pub fn search<'a>(index: &'a [NoteRecord], query: &SearchQuery) -> Vec<&'a NoteRecord> {
    index.iter().filter(|record| matches(record, query)).collect()
}
