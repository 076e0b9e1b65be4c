use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn write(dir: &std::path::Path, rel: &str, content: impl AsRef<str>) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content.as_ref()).unwrap();
}

fn nmk() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("nmk"))
}

#[test]
fn new_scaffolds_default_frontmatter() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("fresh.md");

    nmk().arg("new").arg(&note).assert().success();

    let content = fs::read_to_string(&note).unwrap();
    assert!(content.starts_with("---\ntitle: Undefined\ntags: []\n"));
    assert!(content.contains("created: '"));
    assert!(content.contains("modified: '"));
    assert!(content.contains("# Undefined"));

    // Refuses to clobber.
    nmk()
        .arg("new")
        .arg(&note)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn tag_replaces_and_dedups() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("note.md");
    write(tmp.path(), "note.md", "---\ntitle: T\nauthor: me\n---\nbody\n");

    nmk()
        .arg("tag")
        .arg(&note)
        .arg("rust, cli, rust")
        .assert()
        .success()
        .stdout(predicate::str::contains("#rust, #cli"));

    let content = fs::read_to_string(&note).unwrap();
    assert!(content.contains("tags:\n- rust\n- cli\n"));
    // Unrelated keys survive the merge-write.
    assert!(content.contains("author: me"));
    assert!(content.ends_with("body\n"));
}

#[test]
fn delete_toggles_marker() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("note.md");
    write(tmp.path(), "note.md", "---\ntitle: T\n---\nbody\n");

    nmk()
        .arg("delete")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("marked deleted"));
    assert!(fs::read_to_string(&note).unwrap().contains("deleted: true"));

    nmk()
        .arg("delete")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("delete marker removed"));
    assert!(!fs::read_to_string(&note).unwrap().contains("deleted"));
}

#[test]
fn init_populates_and_then_declines() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("note.md");
    write(tmp.path(), "note.md", "# Found Title\n\ntext\n");

    nmk()
        .arg("init")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("frontmatter created"));

    let content = fs::read_to_string(&note).unwrap();
    assert!(content.contains("title: Found Title"));

    nmk()
        .arg("init")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"));
}

#[test]
fn save_renames_from_title_when_configured() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("draft.md");
    write(tmp.path(), "draft.md", "---\ntitle: Old\n---\n# Final Name\n");
    write(
        tmp.path(),
        "config.toml",
        format!(
            "version = 1\nroots = [\"{}\"]\n\n[save]\nrename_file = true\n",
            tmp.path().display()
        ),
    );

    nmk()
        .arg("--config")
        .arg(tmp.path().join("config.toml"))
        .arg("save")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed to"));

    let renamed = tmp.path().join("Final Name.md");
    assert!(renamed.is_file());
    assert!(!note.exists());

    let content = fs::read_to_string(&renamed).unwrap();
    assert!(content.contains("title: Final Name"));
    assert!(content.contains("modified:"));
}

#[test]
fn save_respects_deny_list() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("README.md");
    let original = "---\ntitle: Readme\n---\n# Different\n";
    write(tmp.path(), "README.md", original);
    write(
        tmp.path(),
        "config.toml",
        format!(
            "version = 1\nroots = [\"{}\"]\n\n[save]\ndeny_list = [\"README.md\"]\n",
            tmp.path().display()
        ),
    );

    nmk()
        .arg("--config")
        .arg(tmp.path().join("config.toml"))
        .arg("save")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("deny list"));

    assert_eq!(fs::read_to_string(&note).unwrap(), original);
}

#[test]
fn save_on_missing_file_fails() {
    let tmp = tempdir().unwrap();

    nmk()
        .arg("save")
        .arg(tmp.path().join("absent.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no writable target"));
}
