//! Filename derivation from note titles.

/// Turn an arbitrary title into a filesystem-safe file stem.
///
/// Control characters and zero-width/non-breaking spaces are dropped,
/// characters illegal on common filesystems are mapped to `-`, and
/// surrounding whitespace and dots are trimmed. A title that sanitizes to
/// nothing falls back to `"untitled"`.
pub fn sanitize(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !c.is_control() && *c != '\u{00A0}' && *c != '\u{FEFF}')
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            _ => c,
        })
        .collect();

    let trimmed = cleaned.trim().trim_matches('.').trim();
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}
