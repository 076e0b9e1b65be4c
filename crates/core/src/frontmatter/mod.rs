//! Frontmatter parsing, serialization, and in-place replacement.
//!
//! This module provides functionality to:
//! - Parse YAML frontmatter from markdown documents
//! - Serialize frontmatter back to a delimited block
//! - Splice updated frontmatter over exactly the original block span

pub mod parser;
pub mod serializer;
pub mod types;

pub use parser::{FrontmatterParseError, block_span, parse};
pub use serializer::{encode, frontmatter_to_yaml, replace};
pub use types::{Frontmatter, ParsedNote};
