//! Query parsing and note matching.
//!
//! Queries mix `#tag` tokens with free text: `#rust #cli serde` filters to
//! notes tagged both `rust` and `cli` whose raw text contains `serde`.

pub mod matcher;
pub mod query;

pub use matcher::{matches, search};
pub use query::{SearchQuery, parse_query};
