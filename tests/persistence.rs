//! Integration tests for on-disk persistence through the library API.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use jot::io::store_io::{STORE_FILE, load_store, save_store};
use jot::model::note::NotePatch;
use jot::model::store::NoteStore;
use jot::ops::note_ops::{create_note, toggle_pin, update_note};
use jot::ops::search::visible_notes;

#[test]
fn full_round_trip_preserves_every_field() {
    let tmp = TempDir::new().unwrap();
    let mut store = NoteStore::new();

    let a = create_note(&mut store);
    update_note(&mut store, &a, NotePatch::title("Groceries"));
    update_note(&mut store, &a, NotePatch::content("milk\n<b>eggs</b>\nbread"));
    toggle_pin(&mut store, &a);

    let b = create_note(&mut store);
    update_note(&mut store, &b, NotePatch::content("unicode café \u{1F980}"));

    save_store(tmp.path(), &store).unwrap();
    let loaded = load_store(tmp.path()).unwrap();

    assert_eq!(loaded.notes, store.notes);
    // Timestamps survive serialization exactly
    let orig = store.get(&a).unwrap();
    let back = loaded.get(&a).unwrap();
    assert_eq!(back.created_at, orig.created_at);
    assert_eq!(back.updated_at, orig.updated_at);
}

#[test]
fn display_order_survives_reload() {
    let tmp = TempDir::new().unwrap();
    let mut store = NoteStore::new();

    let older = create_note(&mut store);
    let newer = create_note(&mut store);
    let pinned = create_note(&mut store);
    toggle_pin(&mut store, &pinned);

    save_store(tmp.path(), &store).unwrap();
    let loaded = load_store(tmp.path()).unwrap();

    let order: Vec<&str> = visible_notes(&loaded, "")
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(order, vec![pinned.as_str(), newer.as_str(), older.as_str()]);
}

#[test]
fn repeated_saves_keep_latest_state() {
    let tmp = TempDir::new().unwrap();
    let mut store = NoteStore::new();
    let id = create_note(&mut store);

    for i in 0..5 {
        update_note(&mut store, &id, NotePatch::content(format!("draft {}", i)));
        save_store(tmp.path(), &store).unwrap();
    }

    let loaded = load_store(tmp.path()).unwrap();
    assert_eq!(loaded.get(&id).unwrap().content, "draft 4");
}

#[test]
fn corrupt_store_is_renamed_not_clobbered() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(STORE_FILE), "{ definitely not notes").unwrap();

    assert!(load_store(tmp.path()).is_err());
    assert!(tmp.path().join("notes.json.corrupt").exists());

    // A fresh store can now be saved and read back normally
    let mut store = NoteStore::new();
    create_note(&mut store);
    save_store(tmp.path(), &store).unwrap();
    assert_eq!(load_store(tmp.path()).unwrap().len(), 1);
}

#[test]
fn store_file_is_human_readable_json() {
    let tmp = TempDir::new().unwrap();
    let mut store = NoteStore::new();
    let id = create_note(&mut store);
    update_note(&mut store, &id, NotePatch::title("Readable"));
    save_store(tmp.path(), &store).unwrap();

    let text = std::fs::read_to_string(tmp.path().join(STORE_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["title"], "Readable");
    assert!(text.contains('\n'), "expected pretty-printed output");
}
