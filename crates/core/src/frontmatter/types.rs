//! Frontmatter types and data structures.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

/// Parsed YAML frontmatter of a markdown note.
///
/// Keys the core does not interpret are carried verbatim through every
/// read-modify-write cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Frontmatter {
    /// The `title` field, when present and a string.
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// String entries of the `tags` sequence, in order.
    ///
    /// A missing `tags` key or a non-sequence value yields an empty list;
    /// non-string entries are skipped here but preserved by the codec.
    pub fn tags(&self) -> Vec<String> {
        self.fields
            .get("tags")
            .and_then(Value::as_sequence)
            .map(|seq| {
                seq.iter().filter_map(|v| v.as_str().map(ToOwned::to_owned)).collect()
            })
            .unwrap_or_default()
    }

    /// Whether the note is soft-deleted (`deleted: true`). Absence means false.
    pub fn is_deleted(&self) -> bool {
        self.fields.get("deleted").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Result of splitting a note into frontmatter and body.
#[derive(Debug, Clone)]
pub struct ParsedNote {
    /// Parsed frontmatter (None when the note carries no delimited block).
    pub frontmatter: Option<Frontmatter>,
    /// The markdown body (everything after the closing delimiter).
    pub body: String,
    /// Byte range of the delimited block in the source text, from the start
    /// of the opening `---` through the end of the closing `---` (its
    /// trailing newline excluded).
    pub block_span: Option<(usize, usize)>,
}

impl ParsedNote {
    /// A note with no frontmatter: the whole text is body.
    pub fn body_only(text: &str) -> Self {
        Self { frontmatter: None, body: text.to_string(), block_span: None }
    }
}
