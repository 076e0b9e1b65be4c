//! Init command: populate frontmatter for a note that has none.

use std::path::Path;

use notemark_core::config::types::ResolvedConfig;
use notemark_core::document::{FileTarget, InitOutcome, NoteDocument};

pub fn run(rc: &ResolvedConfig, file: &Path) {
    let target = match FileTarget::open(file) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut doc = NoteDocument::new(target, rc.save.clone());
    match doc.initialize_frontmatter(None) {
        Ok(InitOutcome::Initialized) => {
            println!("{}: frontmatter created", file.display());
        }
        Ok(InitOutcome::AlreadyPresent) => {
            println!("Nothing to do. The file already has frontmatter.");
        }
        Err(e) => {
            eprintln!("Error initializing frontmatter: {e}");
            std::process::exit(1);
        }
    }
}
