//! Subcommand implementations.

pub mod delete;
pub mod doctor;
pub mod init;
pub mod new;
pub mod save;
pub mod search;
pub mod tag;
pub mod tags;

use std::path::{Path, PathBuf};

use notemark_core::config::loader::{ConfigError, ConfigLoader};
use notemark_core::config::types::ResolvedConfig;

/// Config for index commands: explicit `--root` flags win, otherwise the
/// config file is required.
pub fn resolve_config(config: Option<&Path>, roots: &[PathBuf]) -> ResolvedConfig {
    if !roots.is_empty() {
        return ResolvedConfig::with_roots(roots.to_vec());
    }

    match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            eprintln!("Hint: pass --root <dir> or create a config file.");
            std::process::exit(1);
        }
    }
}

/// Config for single-note commands: a missing config file just means default
/// save behavior; any other config problem is still fatal.
pub fn resolve_save_config(config: Option<&Path>) -> ResolvedConfig {
    match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(ConfigError::NotFound(_)) if config.is_none() => {
            ResolvedConfig::with_roots(Vec::new())
        }
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    }
}
