//! Mutations over the note store. Every write path refreshes `updated_at`;
//! an unknown id is silently a no-op (reported via the `bool` return).

use crate::model::note::{DEFAULT_TITLE, Note, NotePatch};
use crate::model::store::NoteStore;

/// Create a new default note, prepended to the collection. Returns its id.
pub fn create_note(store: &mut NoteStore) -> String {
    let note = Note::new(store.next_id());
    let id = note.id.clone();
    store.notes.insert(0, note);
    id
}

/// Merge a partial patch into the note matching `id`.
/// A title patched to whitespace falls back to the default title.
pub fn update_note(store: &mut NoteStore, id: &str, patch: NotePatch) -> bool {
    let Some(note) = store.get_mut(id) else {
        return false;
    };
    if let Some(title) = patch.title {
        note.title = if title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        };
    }
    if let Some(content) = patch.content {
        note.content = content;
    }
    if let Some(pinned) = patch.pinned {
        note.pinned = pinned;
    }
    note.touch();
    true
}

/// Remove the note matching `id`
pub fn delete_note(store: &mut NoteStore, id: &str) -> bool {
    let before = store.notes.len();
    store.notes.retain(|n| n.id != id);
    store.notes.len() != before
}

/// Flip the pinned flag on the note matching `id`
pub fn toggle_pin(store: &mut NoteStore, id: &str) -> bool {
    let Some(pinned) = store.get(id).map(|n| n.pinned) else {
        return false;
    };
    update_note(store, id, NotePatch::pinned(!pinned))
}
