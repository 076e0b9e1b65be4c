//! Free-text query parsing.

use std::sync::LazyLock;

use regex::Regex;

// Matches #tag tokens: a `#` followed by one or more word characters.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());

/// A structured search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Tags extracted from `#word` tokens, `#` stripped, in order of first
    /// appearance. Case-sensitive.
    pub tags: Vec<String>,
    /// Residual free text after tag tokens are removed, trimmed. Used as a
    /// literal content substring filter; empty matches everything.
    pub content: String,
}

/// Parse a query string into tags and residual content.
pub fn parse_query(query: &str) -> SearchQuery {
    let tags = TAG_RE
        .captures_iter(query)
        .map(|caps| caps[1].to_string())
        .collect();
    let content = TAG_RE.replace_all(query, "").trim().to_string();

    SearchQuery { tags, content }
}
