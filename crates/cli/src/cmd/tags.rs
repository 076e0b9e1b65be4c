//! Tags command: aggregate every tag under the note roots.

use notemark_core::config::types::ResolvedConfig;
use notemark_core::index::{NoteIndexBuilder, collect_tags_from};

use crate::OutputArgs;

pub fn run(rc: &ResolvedConfig, args: &OutputArgs) {
    let builder = NoteIndexBuilder::new(rc.roots.clone());
    let (records, stats) = match builder.build_index_with_stats() {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Error building index: {e}");
            std::process::exit(1);
        }
    };
    if stats.notes_skipped > 0 {
        tracing::warn!("{} notes skipped during indexing", stats.notes_skipped);
    }

    let tags = collect_tags_from(&records);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tags).unwrap_or_default());
        return;
    }

    if tags.is_empty() {
        println!("(no tags found)");
        return;
    }

    for tag in &tags {
        println!("#{tag}");
    }
    println!();
    println!("-- {} tags --", tags.len());
}
