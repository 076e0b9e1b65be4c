//! Search command: query notes by #tag tokens and content substring.

use notemark_core::config::types::ResolvedConfig;
use notemark_core::index::{NoteIndexBuilder, NoteRecord};
use notemark_core::search::{parse_query, search};
use serde::Serialize;

use crate::SearchArgs;

/// Search result for JSON output.
#[derive(Debug, Serialize)]
struct SearchResultOutput {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    tags: Vec<String>,
}

impl From<&NoteRecord> for SearchResultOutput {
    fn from(record: &NoteRecord) -> Self {
        Self {
            path: record.path.to_string_lossy().to_string(),
            title: record
                .frontmatter
                .as_ref()
                .and_then(|fm| fm.title().map(ToOwned::to_owned)),
            tags: record.tags(),
        }
    }
}

pub fn run(rc: &ResolvedConfig, args: &SearchArgs) {
    let query = parse_query(&args.query.join(" "));

    let builder = NoteIndexBuilder::new(rc.roots.clone());
    let index = match builder.build_index() {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error building index: {e}");
            std::process::exit(1);
        }
    };

    tracing::debug!("indexed {} notes across {} roots", index.len(), rc.roots.len());
    let results = search(&index, &query);

    if args.json {
        let output: Vec<SearchResultOutput> =
            results.iter().map(|record| SearchResultOutput::from(*record)).collect();
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return;
    }

    if args.quiet {
        for record in &results {
            println!("{}", record.path.display());
        }
        return;
    }

    // An empty result set is a valid outcome, not a failure.
    if results.is_empty() {
        println!("(no results found)");
        return;
    }

    for record in &results {
        let tags = record.tags();
        if tags.is_empty() {
            println!("{}", record.path.display());
        } else {
            let tags: Vec<String> = tags.iter().map(|t| format!("#{t}")).collect();
            println!("{}  {}", record.path.display(), tags.join(", "));
        }
    }
    println!();
    println!("-- {} results --", results.len());
}
