//! The derived display view: filter by search term, order pinned-first then
//! most recently updated. Recomputed from current state, never persisted.

use crate::markup::strip_markup;
use crate::model::note::Note;
use crate::model::store::NoteStore;

/// Case-insensitive substring match against the title or the
/// markup-stripped content. An empty query matches everything.
pub fn matches_query(note: &Note, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    note.title.to_lowercase().contains(&needle)
        || strip_markup(&note.content).to_lowercase().contains(&needle)
}

/// Order: pinned before unpinned, ties broken by descending `updated_at`
pub fn display_order(a: &Note, b: &Note) -> std::cmp::Ordering {
    b.pinned
        .cmp(&a.pinned)
        .then_with(|| b.updated_at.cmp(&a.updated_at))
}

/// The filtered, ordered view of the store for display
pub fn visible_notes<'a>(store: &'a NoteStore, query: &str) -> Vec<&'a Note> {
    let mut notes: Vec<&Note> = store
        .notes
        .iter()
        .filter(|n| matches_query(n, query))
        .collect();
    notes.sort_by(|a, b| display_order(a, b));
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::note::NotePatch;
    use crate::ops::note_ops::{create_note, toggle_pin, update_note};

    fn store_with(titles: &[&str]) -> (NoteStore, Vec<String>) {
        let mut store = NoteStore::new();
        let mut ids = Vec::new();
        for title in titles {
            let id = create_note(&mut store);
            update_note(&mut store, &id, NotePatch::title(*title));
            ids.push(id);
        }
        (store, ids)
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let (store, _) = store_with(&["Groceries", "Meeting Notes"]);
        let hits = visible_notes(&store, "groc");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Groceries");
    }

    #[test]
    fn search_matches_stripped_content() {
        let (mut store, ids) = store_with(&["A", "B"]);
        update_note(&mut store, &ids[0], NotePatch::content("buy <b>Milk</b>"));
        let hits = visible_notes(&store, "milk");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ids[0]);
        // The tag text itself is not searchable
        assert!(visible_notes(&store, "<b>").is_empty());
    }

    #[test]
    fn empty_query_matches_all() {
        let (store, _) = store_with(&["A", "B", "C"]);
        assert_eq!(visible_notes(&store, "").len(), 3);
    }

    #[test]
    fn recency_orders_within_equal_pin_state() {
        let (mut store, ids) = store_with(&["First", "Second"]);
        // "Second" was created later, so it is most recent
        let view = visible_notes(&store, "");
        assert_eq!(view[0].id, ids[1]);
        // Touching "First" floats it to the top
        update_note(&mut store, &ids[0], NotePatch::content("x"));
        let view = visible_notes(&store, "");
        assert_eq!(view[0].id, ids[0]);
    }

    #[test]
    fn pinned_sorts_first_regardless_of_recency() {
        // Create A, then B (B is now first); pin A → [A, B]
        let mut store = NoteStore::new();
        let a = create_note(&mut store);
        update_note(&mut store, &a, NotePatch::title("A"));
        let b = create_note(&mut store);
        update_note(&mut store, &b, NotePatch::title("B"));
        assert_eq!(visible_notes(&store, "")[0].id, b);

        toggle_pin(&mut store, &a);
        let view = visible_notes(&store, "");
        assert_eq!(view[0].id, a);
        assert_eq!(view[1].id, b);

        // Updating B does not displace the pinned note
        update_note(&mut store, &b, NotePatch::content("newer"));
        assert_eq!(visible_notes(&store, "")[0].id, a);
    }
}
