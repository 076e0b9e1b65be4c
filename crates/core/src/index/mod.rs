//! In-memory note index.
//!
//! The index is rebuilt from the filesystem on demand and never persisted:
//! one [`NoteRecord`] per discovered file, concatenated across roots in
//! traversal order.

pub mod builder;
pub mod types;

pub use builder::{IndexBuildError, IndexStats, NoteIndexBuilder, collect_tags_from};
pub use types::NoteRecord;
