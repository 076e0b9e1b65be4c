use comrak::nodes::NodeValue;
use comrak::{Arena, Options, parse_document};

/// Extract the note title from markdown body text.
///
/// The title is the first level-1 heading, and only the `# title` form
/// counts: a heading written with setext underlines (`===`) is structurally
/// depth 1 but yields no title. The `# ` prefix is stripped from the raw
/// source line.
pub fn extract_title(body: &str) -> Option<String> {
    let arena = Arena::new();
    let options = default_options();
    let root = parse_document(&arena, body, &options);

    for node in root.descendants() {
        let data = node.data.borrow();
        if let NodeValue::Heading(ref heading) = data.value {
            if heading.level != 1 {
                continue;
            }
            let raw = raw_source(body, data.sourcepos.start.line, data.sourcepos.start.column);
            return raw.strip_prefix("# ").map(|rest| rest.trim_end().to_string());
        }
    }

    None
}

/// Recover the raw source of a node's first line from its sourcepos.
fn raw_source(input: &str, line: usize, column: usize) -> &str {
    let full_line = input.lines().nth(line.saturating_sub(1)).unwrap_or("");
    full_line.get(column.saturating_sub(1)..).unwrap_or(full_line)
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    // Enable GFM extensions for compatibility
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    options.parse.smart = false; // Don't convert quotes/dashes
    options.render.unsafe_ = true; // Allow raw HTML passthrough

    options
}
