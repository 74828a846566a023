use chrono::Utc;

use crate::model::note::Note;

/// The in-memory note collection. Order is insertion order (newest first);
/// display order is computed separately by `ops::search`.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    pub notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        NoteStore { notes: Vec::new() }
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        NoteStore { notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// Generate a fresh time-based id, bumping past any collision
    pub fn next_id(&self) -> String {
        let mut ms = Utc::now().timestamp_millis();
        while self.notes.iter().any(|n| n.id == ms.to_string()) {
            ms += 1;
        }
        ms.to_string()
    }
}
