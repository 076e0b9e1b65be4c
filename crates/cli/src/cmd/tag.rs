//! Tag command: replace the tags of a note.

use notemark_core::config::types::ResolvedConfig;
use notemark_core::document::{FileTarget, NoteDocument};

use crate::TagArgs;

pub fn run(rc: &ResolvedConfig, args: &TagArgs) {
    let tags: Vec<String> = args
        .tags
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let target = match FileTarget::open(&args.file) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut doc = NoteDocument::new(target, rc.save.clone());
    match doc.set_tags(&tags) {
        Ok(()) => {
            let applied = doc.tags().unwrap_or_default();
            let applied: Vec<String> = applied.iter().map(|t| format!("#{t}")).collect();
            println!("{}: {}", args.file.display(), applied.join(", "));
        }
        Err(e) => {
            eprintln!("Error updating tags: {e}");
            std::process::exit(1);
        }
    }
}
