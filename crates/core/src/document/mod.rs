//! Single-note read/merge/write cycle.
//!
//! A [`NoteDocument`] wraps an [`EditTarget`] and owns every metadata
//! mutation for that note: tag edits, the soft-delete marker, frontmatter
//! bootstrap, and save-time processing. Mutations touch only the delimited
//! frontmatter span (or a single insertion point at the top), leaving the
//! rest of the note byte-for-byte intact.

pub mod filename;
pub mod target;

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_yaml::Value;
use thiserror::Error;

use crate::config::SaveBehavior;
use crate::frontmatter::{self, Frontmatter, FrontmatterParseError, ParsedNote};
use crate::markdown_ast;
use crate::util::dedup_stable;

pub use target::{BufferTarget, EditTarget, FileTarget, NoteEdit};

/// Errors from note document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A mutation was requested with no active writable target.
    #[error("no writable target for {0}")]
    EditorUnavailable(String),

    #[error(transparent)]
    Frontmatter(#[from] FrontmatterParseError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to overwrite existing file {0}")]
    RenameTargetExists(PathBuf),

    #[error("failed to rename {path}: {source}")]
    Rename {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of [`NoteDocument::initialize_frontmatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Frontmatter was created.
    Initialized,
    /// The note already carries frontmatter; nothing was written. Callers
    /// usually surface this as a notice.
    AlreadyPresent,
}

/// Result of [`NoteDocument::on_save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The note's basename is on the deny list; nothing was touched.
    DenyListed,
    /// Metadata was refreshed. `renamed` reports whether the file moved.
    Saved { renamed: bool },
}

/// A note document bound to an explicit edit target.
pub struct NoteDocument<T: EditTarget> {
    target: T,
    behavior: SaveBehavior,
    /// Derived state, recomputed from the target's raw content on first
    /// access after every write.
    cache: Option<ParsedNote>,
}

impl<T: EditTarget> NoteDocument<T> {
    pub fn new(target: T, behavior: SaveBehavior) -> Self {
        Self { target, behavior, cache: None }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Tags from the note's frontmatter, or empty.
    pub fn tags(&mut self) -> Result<Vec<String>, DocumentError> {
        Ok(self.parsed()?.frontmatter.as_ref().map(Frontmatter::tags).unwrap_or_default())
    }

    /// Whether the note currently carries the soft-delete marker.
    pub fn is_soft_deleted(&mut self) -> Result<bool, DocumentError> {
        Ok(self.parsed()?.frontmatter.as_ref().is_some_and(Frontmatter::is_deleted))
    }

    /// Replace the note's tags, deduplicated in first-occurrence order.
    pub fn set_tags(&mut self, tags: &[String]) -> Result<(), DocumentError> {
        let tags = dedup_stable(tags.iter().cloned());
        let value = Value::Sequence(tags.into_iter().map(Value::String).collect());
        self.merge_write(HashMap::from([("tags".to_string(), value)]))
    }

    /// Flip the soft-delete marker: set `deleted: true` when absent or
    /// false, remove the key when set.
    pub fn toggle_soft_delete(&mut self) -> Result<(), DocumentError> {
        let (mut fields, span) = self.decode_for_write()?;

        if fields.get("deleted").and_then(Value::as_bool) == Some(true) {
            fields.remove("deleted");
        } else {
            fields.insert("deleted".to_string(), Value::Bool(true));
        }

        self.write_fields(fields, span)
    }

    /// Populate frontmatter on a note that has none.
    ///
    /// The title comes from the first `# ` heading, falling back to the
    /// literal `"Undefined"`. Existing frontmatter is never overwritten:
    /// the call reports [`InitOutcome::AlreadyPresent`] and writes nothing.
    pub fn initialize_frontmatter(
        &mut self,
        created: Option<DateTime<Utc>>,
    ) -> Result<InitOutcome, DocumentError> {
        let (existing, span) = self.decode_for_write()?;
        if !existing.is_empty() {
            return Ok(InitOutcome::AlreadyPresent);
        }

        let title =
            self.current_title()?.unwrap_or_else(|| "Undefined".to_string());

        let mut fields = HashMap::new();
        fields.insert("title".to_string(), Value::String(title));
        fields.insert("tags".to_string(), Value::Sequence(Vec::new()));
        fields.insert(
            "created".to_string(),
            Value::String(iso_timestamp(created.unwrap_or_else(Utc::now))),
        );
        fields.insert("modified".to_string(), Value::String(iso_timestamp(Utc::now())));

        self.write_fields(fields, span)?;
        Ok(InitOutcome::Initialized)
    }

    /// Save-time processing: refresh title and `modified`, then optionally
    /// rename the file from its title.
    pub fn on_save(&mut self) -> Result<SaveOutcome, DocumentError> {
        if self.is_deny_listed() {
            tracing::debug!(
                "{} is deny-listed, skipping save processing",
                self.target.path().display()
            );
            return Ok(SaveOutcome::DenyListed);
        }

        let title = self.current_title()?;

        let mut patch = HashMap::new();
        if let Some(ref title) = title {
            patch.insert("title".to_string(), Value::String(title.clone()));
        }
        patch.insert("modified".to_string(), Value::String(iso_timestamp(Utc::now())));
        self.merge_write(patch)?;

        let mut renamed = false;
        if self.behavior.rename_file {
            if let Some(title) = title {
                renamed = self.rename_from_title(&title)?;
            }
        } else {
            tracing::debug!("rename on save disabled by configuration");
        }

        Ok(SaveOutcome::Saved { renamed })
    }

    /// Title from the first `# ` heading of the body, falling back to the
    /// frontmatter `title` field.
    pub fn current_title(&mut self) -> Result<Option<String>, DocumentError> {
        let parsed = self.parsed()?;
        if let Some(title) = markdown_ast::extract_title(&parsed.body) {
            return Ok(Some(title));
        }
        Ok(parsed.frontmatter.as_ref().and_then(|fm| fm.title().map(ToOwned::to_owned)))
    }

    fn is_deny_listed(&self) -> bool {
        let Some(name) = self.target.path().file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.behavior.deny_list.iter().any(|denied| denied == name)
    }

    fn rename_from_title(&mut self, title: &str) -> Result<bool, DocumentError> {
        let stem = filename::sanitize(title);
        let extension = self
            .target
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let new_name = format!("{stem}{extension}");

        if self.target.path().file_name().and_then(|n| n.to_str())
            == Some(new_name.as_str())
        {
            return Ok(false);
        }

        self.target.rename(&new_name, true)?;
        Ok(true)
    }

    /// Lenient read of derived state: malformed YAML reads as "no
    /// frontmatter" until corrected.
    fn parsed(&mut self) -> Result<&ParsedNote, DocumentError> {
        if self.cache.is_none() {
            let raw = self.target.content()?;
            let parsed = match frontmatter::parse(&raw) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(
                        "unparsable frontmatter in {}: {}",
                        self.target.path().display(),
                        e
                    );
                    ParsedNote {
                        frontmatter: None,
                        body: raw.clone(),
                        block_span: frontmatter::block_span(&raw),
                    }
                }
            };
            self.cache = Some(parsed);
        }
        Ok(self.cache.as_ref().unwrap())
    }

    /// Strict decode for the write path: malformed YAML aborts the mutation.
    fn decode_for_write(
        &mut self,
    ) -> Result<(HashMap<String, Value>, Option<(usize, usize)>), DocumentError> {
        let raw = self.target.content()?;
        let parsed = frontmatter::parse(&raw)?;
        Ok((
            parsed.frontmatter.map(|fm| fm.fields).unwrap_or_default(),
            parsed.block_span,
        ))
    }

    /// Shallow-merge a patch over the current fields and write. Patch keys win.
    fn merge_write(
        &mut self,
        patch: HashMap<String, Value>,
    ) -> Result<(), DocumentError> {
        let (mut fields, span) = self.decode_for_write()?;
        fields.extend(patch);
        self.write_fields(fields, span)
    }

    fn write_fields(
        &mut self,
        fields: HashMap<String, Value>,
        span: Option<(usize, usize)>,
    ) -> Result<(), DocumentError> {
        if !self.behavior.update_front_matter {
            tracing::debug!("frontmatter updates disabled by configuration, skipping");
            return Ok(());
        }
        if !self.target.writable() {
            return Err(DocumentError::EditorUnavailable(
                self.target.path().display().to_string(),
            ));
        }

        let encoded = frontmatter::encode(&Frontmatter { fields });
        let edit = match span {
            Some((start, end)) => NoteEdit::ReplaceSpan { start, end, text: encoded },
            None => NoteEdit::InsertAtTop { text: format!("{encoded}\n\n") },
        };

        self.target.apply(edit)?;
        self.cache = None;
        Ok(())
    }
}

fn iso_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> NoteDocument<BufferTarget> {
        NoteDocument::new(BufferTarget::new("note.md", text), SaveBehavior::default())
    }

    fn doc_with(text: &str, behavior: SaveBehavior) -> NoteDocument<BufferTarget> {
        NoteDocument::new(BufferTarget::new("note.md", text), behavior)
    }

    #[test]
    fn tags_of_note_without_frontmatter() {
        let mut d = doc("# Hello\n");
        assert!(d.tags().unwrap().is_empty());
    }

    #[test]
    fn set_tags_dedups_preserving_order() {
        let mut d = doc("---\ntitle: T\n---\n# Hello\n");
        let tags: Vec<String> =
            ["b", "a", "b", "c"].iter().map(|s| s.to_string()).collect();
        d.set_tags(&tags).unwrap();
        assert_eq!(d.tags().unwrap(), vec!["b", "a", "c"]);
    }

    #[test]
    fn set_tags_preserves_unrelated_keys() {
        let mut d = doc("---\ntitle: T\nauthor: someone\n---\nbody\n");
        d.set_tags(&["x".to_string()]).unwrap();

        let text = d.target().text().to_string();
        assert!(text.contains("author: someone"));
        assert!(text.contains("title: T"));
        assert!(text.ends_with("body\n"));
    }

    #[test]
    fn toggle_soft_delete_roundtrip() {
        let mut d = doc("---\ntitle: T\n---\nbody\n");

        d.toggle_soft_delete().unwrap();
        assert!(d.target().text().contains("deleted: true"));

        d.toggle_soft_delete().unwrap();
        assert!(!d.target().text().contains("deleted"));
        assert!(d.target().text().contains("title: T"));
    }

    #[test]
    fn initialize_populates_empty_note() {
        let mut d = doc("# My Note\n\ntext\n");
        let outcome = d.initialize_frontmatter(None).unwrap();
        assert_eq!(outcome, InitOutcome::Initialized);

        let text = d.target().text().to_string();
        assert!(text.starts_with("---\n"));
        assert!(text.contains("title: My Note"));
        assert!(text.contains("tags: []"));
        assert!(text.contains("created:"));
        assert!(text.contains("modified:"));
        assert!(text.contains("# My Note"));
    }

    #[test]
    fn initialize_without_heading_uses_undefined() {
        let mut d = doc("plain text\n");
        d.initialize_frontmatter(None).unwrap();
        assert!(d.target().text().contains("title: Undefined"));
    }

    #[test]
    fn initialize_is_noop_when_frontmatter_exists() {
        let original = "---\ntitle: A\n---\nbody\n";
        let mut d = doc(original);
        let outcome = d.initialize_frontmatter(None).unwrap();
        assert_eq!(outcome, InitOutcome::AlreadyPresent);
        assert_eq!(d.target().text(), original);
    }

    #[test]
    fn on_save_refreshes_title_and_modified() {
        let mut d = doc("---\ntitle: Stale\nauthor: me\n---\n# Fresh Title\n");
        let outcome = d.on_save().unwrap();
        assert_eq!(outcome, SaveOutcome::Saved { renamed: false });

        let text = d.target().text().to_string();
        assert!(text.contains("title: Fresh Title"));
        assert!(text.contains("modified:"));
        assert!(text.contains("author: me"));
        assert!(!text.contains("Stale"));
    }

    #[test]
    fn on_save_falls_back_to_frontmatter_title() {
        let mut d = doc("---\ntitle: Kept\n---\nno heading here\n");
        d.on_save().unwrap();
        assert!(d.target().text().contains("title: Kept"));
    }

    #[test]
    fn on_save_respects_deny_list() {
        let behavior = SaveBehavior {
            deny_list: vec!["note.md".to_string()],
            ..SaveBehavior::default()
        };
        let original = "---\ntitle: T\n---\n# Other\n";
        let mut d = doc_with(original, behavior);

        assert_eq!(d.on_save().unwrap(), SaveOutcome::DenyListed);
        assert_eq!(d.target().text(), original);
    }

    #[test]
    fn master_switch_disables_all_writes() {
        let behavior =
            SaveBehavior { update_front_matter: false, ..SaveBehavior::default() };
        let original = "---\ntitle: T\n---\nbody\n";
        let mut d = doc_with(original, behavior);

        d.set_tags(&["x".to_string()]).unwrap();
        d.toggle_soft_delete().unwrap();
        assert_eq!(d.target().text(), original);
    }

    #[test]
    fn readonly_target_fails_with_editor_unavailable() {
        let target = BufferTarget::read_only("note.md", "---\ntitle: T\n---\nbody\n");
        let mut d = NoteDocument::new(target, SaveBehavior::default());

        let err = d.set_tags(&["x".to_string()]).unwrap_err();
        assert!(matches!(err, DocumentError::EditorUnavailable(_)));
    }

    #[test]
    fn mutation_on_malformed_yaml_fails() {
        let mut d = doc("---\ntitle: [unclosed\n---\nbody\n");
        let err = d.set_tags(&["x".to_string()]).unwrap_err();
        assert!(matches!(err, DocumentError::Frontmatter(_)));
    }

    #[test]
    fn read_on_malformed_yaml_degrades_to_no_frontmatter() {
        let mut d = doc("---\ntitle: [unclosed\n---\nbody\n");
        assert!(d.tags().unwrap().is_empty());
    }

    #[test]
    fn mutation_inserts_block_when_note_has_none() {
        let mut d = doc("# Heading\n\nbody\n");
        d.set_tags(&["x".to_string()]).unwrap();

        let text = d.target().text().to_string();
        assert!(text.starts_with("---\ntags:\n- x\n---\n\n# Heading\n"));
    }

    #[test]
    fn rename_on_save_derives_name_from_title() {
        let behavior = SaveBehavior { rename_file: true, ..SaveBehavior::default() };
        let target = BufferTarget::new("old name.md", "# Fresh: Title\n");
        let mut d = NoteDocument::new(target, behavior);

        let outcome = d.on_save().unwrap();
        assert_eq!(outcome, SaveOutcome::Saved { renamed: true });
        assert_eq!(
            d.target().path().file_name().and_then(|n| n.to_str()),
            Some("Fresh- Title.md")
        );
    }

    #[test]
    fn rename_skipped_when_name_already_matches() {
        let behavior = SaveBehavior { rename_file: true, ..SaveBehavior::default() };
        let target = BufferTarget::new("Same.md", "# Same\n");
        let mut d = NoteDocument::new(target, behavior);

        assert_eq!(d.on_save().unwrap(), SaveOutcome::Saved { renamed: false });
    }
}
