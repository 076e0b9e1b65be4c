//! Frontmatter serialization and in-place replacement.

use super::parser::block_span;
use super::types::Frontmatter;
use serde_yaml::Value;
use std::collections::HashMap;

/// Keys the core interprets, in their output order. Everything else follows
/// alphabetically.
const FIELD_ORDER: [&str; 5] = ["title", "tags", "created", "modified", "deleted"];

/// Serialize frontmatter to a delimited block: `---\n<yaml>---`.
///
/// No trailing newline: the block splices over a span that excludes the
/// closing delimiter's newline.
pub fn encode(fm: &Frontmatter) -> String {
    format!("---\n{}---", frontmatter_to_yaml(fm))
}

/// Serialize frontmatter fields to a YAML string (without delimiters).
pub fn frontmatter_to_yaml(fm: &Frontmatter) -> String {
    if fm.fields.is_empty() {
        return String::new();
    }
    serialize_fields(&fm.fields)
}

fn serialize_fields(fields: &HashMap<String, Value>) -> String {
    let mut mapping = serde_yaml::Mapping::new();

    for key in FIELD_ORDER {
        if let Some(value) = fields.get(key) {
            mapping.insert(Value::String(key.to_string()), value.clone());
        }
    }

    let mut remaining: Vec<_> = fields
        .keys()
        .filter(|k| !FIELD_ORDER.contains(&k.as_str()))
        .collect();
    remaining.sort();

    for key in remaining {
        if let Some(value) = fields.get(key) {
            mapping.insert(Value::String(key.clone()), value.clone());
        }
    }

    serde_yaml::to_string(&mapping).unwrap_or_default()
}

/// Splice `encode(fm)` over the existing frontmatter block of `raw`, or
/// prepend it (followed by a blank line) when the document has none.
///
/// Only the delimited span is touched; every other byte of the document is
/// carried through unchanged. Replacing twice with the same data yields the
/// same text as replacing once.
pub fn replace(raw: &str, fm: &Frontmatter) -> String {
    let encoded = encode(fm);
    match block_span(raw) {
        Some((start, end)) => {
            format!("{}{}{}", &raw[..start], encoded, &raw[end..])
        }
        None => format!("{}\n\n{}", encoded, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parser::parse;

    fn fm_with(pairs: &[(&str, Value)]) -> Frontmatter {
        let fields =
            pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        Frontmatter { fields }
    }

    #[test]
    fn encode_orders_known_keys_first() {
        let fm = fm_with(&[
            ("modified", Value::String("2024-01-15".into())),
            ("author", Value::String("someone".into())),
            ("title", Value::String("Hello".into())),
        ]);
        let encoded = encode(&fm);
        let title_pos = encoded.find("title:").unwrap();
        let modified_pos = encoded.find("modified:").unwrap();
        let author_pos = encoded.find("author:").unwrap();
        assert!(title_pos < modified_pos);
        assert!(modified_pos < author_pos);
    }

    #[test]
    fn encode_empty_frontmatter() {
        assert_eq!(encode(&Frontmatter::default()), "---\n---");
    }

    #[test]
    fn roundtrip_through_parse() {
        let fm = fm_with(&[
            ("title", Value::String("Hello".into())),
            (
                "tags",
                Value::Sequence(vec![
                    Value::String("a".into()),
                    Value::String("b".into()),
                ]),
            ),
            ("count", Value::Number(42.into())),
        ]);
        let doc = format!("{}\n\n# Body", encode(&fm));
        let reparsed = parse(&doc).unwrap();
        assert_eq!(reparsed.frontmatter.unwrap(), fm);
        assert!(reparsed.body.contains("# Body"));
    }

    #[test]
    fn replace_splices_over_existing_block() {
        let raw = "---\ntitle: Old\n---\n\n# Body\n\ntext ---- not a delimiter\n";
        let fm = fm_with(&[("title", Value::String("New".into()))]);
        let replaced = replace(raw, &fm);
        assert!(replaced.starts_with("---\ntitle: New\n---\n"));
        assert!(replaced.ends_with("# Body\n\ntext ---- not a delimiter\n"));
        assert!(!replaced.contains("Old"));
    }

    #[test]
    fn replace_prepends_when_no_block() {
        let raw = "# Body only\n";
        let fm = fm_with(&[("title", Value::String("New".into()))]);
        let replaced = replace(raw, &fm);
        assert_eq!(replaced, "---\ntitle: New\n---\n\n# Body only\n");
    }

    #[test]
    fn replace_is_idempotent() {
        let fm = fm_with(&[
            ("title", Value::String("T".into())),
            ("tags", Value::Sequence(vec![Value::String("x".into())])),
        ]);

        let without_block = "# Body\n";
        let once = replace(without_block, &fm);
        assert_eq!(replace(&once, &fm), once);

        let with_block = "---\nold: value\n---\n# Body\n";
        let once = replace(with_block, &fm);
        assert_eq!(replace(&once, &fm), once);
    }

    #[test]
    fn replace_works_on_malformed_yaml() {
        // The old block doesn't parse, but its span is still well-formed.
        let raw = "---\ntitle: [unclosed\n---\nbody\n";
        let fm = fm_with(&[("title", Value::String("Fixed".into()))]);
        let replaced = replace(raw, &fm);
        assert_eq!(replaced, "---\ntitle: Fixed\n---\nbody\n");
    }
}
