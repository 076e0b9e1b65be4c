//! Frontmatter parsing from markdown documents.

use super::types::{Frontmatter, ParsedNote};
use thiserror::Error;

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` lines at the start of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
///
/// A document without a well-formed block (no opening delimiter, or an
/// opening delimiter that is never closed) is a valid document with no
/// frontmatter, not an error. Malformed YAML inside a well-formed block is
/// an error.
pub fn parse(content: &str) -> Result<ParsedNote, FrontmatterParseError> {
    let Some(block) = locate_block(content) else {
        return Ok(ParsedNote::body_only(content));
    };

    let yaml = &content[block.yaml_start..block.yaml_end];
    let frontmatter: Frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok(ParsedNote {
        frontmatter: Some(frontmatter),
        body: content[block.body_start..].to_string(),
        block_span: Some((block.start, block.end)),
    })
}

/// Byte range of the delimited frontmatter block, independent of whether
/// the YAML inside it parses.
pub fn block_span(content: &str) -> Option<(usize, usize)> {
    locate_block(content).map(|b| (b.start, b.end))
}

struct BlockBounds {
    /// Start of the opening `---` line.
    start: usize,
    /// End of the closing `---` (trailing newline excluded).
    end: usize,
    yaml_start: usize,
    yaml_end: usize,
    /// First byte after the closing delimiter line.
    body_start: usize,
}

/// Scan for the delimited block, tracking byte offsets.
///
/// Both delimiters must be full lines consisting solely of `---` (a trailing
/// `\r` is tolerated). Whitespace-only lines may precede the block; any other
/// content before the opening delimiter disqualifies it. A `---` inside the
/// body is never a delimiter because scanning stops at the first closing line.
fn locate_block(content: &str) -> Option<BlockBounds> {
    let mut offset = 0;
    let mut opened: Option<(usize, usize)> = None;

    for raw in content.split_inclusive('\n') {
        let line_start = offset;
        offset += raw.len();

        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match opened {
            None => {
                if line.trim().is_empty() {
                    continue;
                }
                if line == "---" {
                    opened = Some((line_start, offset));
                } else {
                    return None;
                }
            }
            Some((start, yaml_start)) => {
                if line == "---" {
                    return Some(BlockBounds {
                        start,
                        end: line_start + 3,
                        yaml_start,
                        yaml_end: line_start,
                        body_start: offset,
                    });
                }
            }
        }
    }

    None
}
