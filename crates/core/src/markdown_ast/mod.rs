//! Markdown structure parsing for title lookup.

pub mod comrak;

pub use comrak::extract_title;
