use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Directory roots crawled for notes.
    pub roots: Vec<String>,
    #[serde(default)]
    pub save: SaveBehavior,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Save-time behavior switches consumed by note documents.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveBehavior {
    /// Master switch for all frontmatter writes (default: true).
    #[serde(default = "default_update_front_matter")]
    pub update_front_matter: bool,
    /// Rename the file from its title after save (default: false).
    #[serde(default)]
    pub rename_file: bool,
    /// File basenames fully exempt from save-time processing.
    #[serde(default)]
    pub deny_list: Vec<String>,
}

impl Default for SaveBehavior {
    fn default() -> Self {
        Self {
            update_front_matter: default_update_front_matter(),
            rename_file: false,
            deny_list: Vec::new(),
        }
    }
}

fn default_update_front_matter() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Note roots, tilde-expanded.
    pub roots: Vec<PathBuf>,
    pub save: SaveBehavior,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// A config not backed by a file, for callers that supply roots directly.
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            save: SaveBehavior::default(),
            logging: LoggingConfig::default(),
        }
    }
}
