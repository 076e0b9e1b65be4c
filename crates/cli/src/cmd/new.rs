//! New command: create a note seeded with default frontmatter.

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};

pub fn run(output: &Path) {
    if output.exists() {
        eprintln!("Error: {} already exists", output.display());
        std::process::exit(1);
    }

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let content = format!(
        "---\ntitle: Undefined\ntags: []\ncreated: '{now}'\nmodified: '{now}'\n---\n\n# Undefined\n\n"
    );

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error creating {}: {}", parent.display(), e);
                std::process::exit(1);
            }
        }
    }

    match fs::write(output, content) {
        Ok(()) => println!("Created {}", output.display()),
        Err(e) => {
            eprintln!("Error writing {}: {}", output.display(), e);
            std::process::exit(1);
        }
    }
}
