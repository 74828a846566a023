//! Integration tests for the `jot` CLI.
//!
//! Each test creates a temp data directory, runs `jot` as a subprocess,
//! and verifies stdout and/or file contents.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `jot` binary.
fn jot_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("jot");
    path
}

fn jot(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(jot_bin())
        .arg("-C")
        .arg(dir.path())
        .args(args)
        .output()
        .expect("failed to run jot")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn add_note(dir: &TempDir, title: &str, content: &str) -> String {
    let out = jot(dir, &["add", title, "--content", content, "--json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    json["id"].as_str().unwrap().to_string()
}

#[test]
fn add_creates_the_store_file() {
    let dir = TempDir::new().unwrap();
    let out = jot(&dir, &["add", "First"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("added "));
    assert!(dir.path().join("notes.json").exists());
}

#[test]
fn add_without_title_uses_default() {
    let dir = TempDir::new().unwrap();
    let out = jot(&dir, &["add", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["title"], "Untitled Note");
}

#[test]
fn list_shows_rows_pinned_first() {
    let dir = TempDir::new().unwrap();
    add_note(&dir, "Plain", "body");
    let pinned = add_note(&dir, "Starred", "body");
    jot(&dir, &["pin", &pinned]);

    let out = stdout(&jot(&dir, &["list"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('*'), "pinned row first: {}", lines[0]);
    assert!(lines[0].contains("Starred"));
    assert!(lines[1].contains("Plain"));
}

#[test]
fn list_json_has_previews_without_markup() {
    let dir = TempDir::new().unwrap();
    add_note(&dir, "Fmt", "<b>bold</b> text<br>rest");

    let out = stdout(&jot(&dir, &["list", "--json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["notes"][0]["preview"], "bold text");
    assert!(json["notes"][0].get("content").is_none());
}

#[test]
fn show_strips_markup_unless_raw() {
    let dir = TempDir::new().unwrap();
    let id = add_note(&dir, "Styles", "say <i>hi</i>");

    let plain = stdout(&jot(&dir, &["show", &id]));
    assert!(plain.contains("say hi"));
    assert!(!plain.contains("<i>"));

    let raw = stdout(&jot(&dir, &["show", &id, "--raw"]));
    assert!(raw.contains("say <i>hi</i>"));
}

#[test]
fn search_matches_title_and_body_case_insensitively() {
    let dir = TempDir::new().unwrap();
    add_note(&dir, "Travel Plans", "pack bags");
    add_note(&dir, "Recipes", "travel mug cocoa");
    add_note(&dir, "Other", "nothing here");

    let out = stdout(&jot(&dir, &["search", "TRAVEL"]));
    assert_eq!(out.lines().count(), 2);

    let none = stdout(&jot(&dir, &["search", "zzz"]));
    assert!(none.contains("no matches"));
}

#[test]
fn search_ignores_markup_tag_text() {
    let dir = TempDir::new().unwrap();
    add_note(&dir, "Styled", "<b>words</b>");

    // "<b>" is markup, not content
    let out = stdout(&jot(&dir, &["search", "<b>", "--json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["notes"].as_array().unwrap().len(), 0);
}

#[test]
fn pin_toggles() {
    let dir = TempDir::new().unwrap();
    let id = add_note(&dir, "Togglable", "");

    let out = stdout(&jot(&dir, &["pin", &id]));
    assert!(out.starts_with("pinned"));
    let out = stdout(&jot(&dir, &["pin", &id]));
    assert!(out.starts_with("unpinned"));
}

#[test]
fn title_renames_and_empty_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let id = add_note(&dir, "Old Name", "");

    jot(&dir, &["title", &id, "New Name"]);
    let json: serde_json::Value =
        serde_json::from_str(&stdout(&jot(&dir, &["show", &id, "--json"]))).unwrap();
    assert_eq!(json["title"], "New Name");

    jot(&dir, &["title", &id, "   "]);
    let json: serde_json::Value =
        serde_json::from_str(&stdout(&jot(&dir, &["show", &id, "--json"]))).unwrap();
    assert_eq!(json["title"], "Untitled Note");
}

#[test]
fn delete_removes_the_note() {
    let dir = TempDir::new().unwrap();
    let id = add_note(&dir, "Doomed", "");

    let out = jot(&dir, &["delete", &id]);
    assert!(out.status.success());
    assert!(stdout(&jot(&dir, &["list"])).contains("no notes"));
}

#[test]
fn unknown_id_fails_with_error() {
    let dir = TempDir::new().unwrap();
    let out = jot(&dir, &["show", "12345"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no note with id"));
}

#[test]
fn export_writes_a_pdf_file() {
    let dir = TempDir::new().unwrap();
    let id = add_note(&dir, "Report", "<b>findings</b>\ndetails");

    let pdf = dir.path().join("report.pdf");
    let out = jot(&dir, &["export", &id, "-o", pdf.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let bytes = std::fs::read(&pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn updates_bump_updated_at() {
    let dir = TempDir::new().unwrap();
    let id = add_note(&dir, "Stamped", "v1");

    let before: serde_json::Value =
        serde_json::from_str(&stdout(&jot(&dir, &["show", &id, "--json"]))).unwrap();
    jot(&dir, &["title", &id, "Stamped v2"]);
    let after: serde_json::Value =
        serde_json::from_str(&stdout(&jot(&dir, &["show", &id, "--json"]))).unwrap();

    let t0 = chrono::DateTime::parse_from_rfc3339(before["updated_at"].as_str().unwrap()).unwrap();
    let t1 = chrono::DateTime::parse_from_rfc3339(after["updated_at"].as_str().unwrap()).unwrap();
    assert!(t1 > t0, "updated_at should advance: {} -> {}", t0, t1);
    assert_eq!(before["created_at"], after["created_at"]);
}
