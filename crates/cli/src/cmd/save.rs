//! Save command: run save-time processing for a note.

use std::path::Path;

use notemark_core::config::types::ResolvedConfig;
use notemark_core::document::{EditTarget, FileTarget, NoteDocument, SaveOutcome};

pub fn run(rc: &ResolvedConfig, file: &Path) {
    let target = match FileTarget::open(file) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut doc = NoteDocument::new(target, rc.save.clone());
    match doc.on_save() {
        Ok(SaveOutcome::DenyListed) => {
            println!("{}: on deny list, skipped", file.display());
        }
        Ok(SaveOutcome::Saved { renamed }) => {
            if renamed {
                println!(
                    "{}: saved, renamed to {}",
                    file.display(),
                    doc.target().path().display()
                );
            } else {
                println!("{}: saved", file.display());
            }
        }
        Err(e) => {
            eprintln!("Error saving: {e}");
            std::process::exit(1);
        }
    }
}
