//! Delete command: toggle the soft-delete marker of a note.

use std::path::Path;

use notemark_core::config::types::ResolvedConfig;
use notemark_core::document::{FileTarget, NoteDocument};

pub fn run(rc: &ResolvedConfig, file: &Path) {
    let target = match FileTarget::open(file) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut doc = NoteDocument::new(target, rc.save.clone());
    if let Err(e) = doc.toggle_soft_delete() {
        eprintln!("Error toggling delete marker: {e}");
        std::process::exit(1);
    }

    match doc.is_soft_deleted() {
        Ok(true) => println!("{}: marked deleted", file.display()),
        Ok(false) => println!("{}: delete marker removed", file.display()),
        Err(e) => {
            eprintln!("Error re-reading note: {e}");
            std::process::exit(1);
        }
    }
}
