//! Note file discovery.

pub mod walker;

pub use walker::{VaultWalker, VaultWalkerError, WalkedFile};
