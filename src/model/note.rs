use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Title given to a note created (or committed) with no title text
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// A single note record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Time-based identifier (milliseconds since the Unix epoch, decimal).
    /// Immutable and unique within the collection.
    pub id: String,
    pub title: String,
    /// Rich-text content with opaque inline markup (`<b>…</b>`, `<i>…</i>`)
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a fresh note with the default title and empty content
    pub fn new(id: String) -> Self {
        let now = Utc::now();
        Note {
            id,
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            pinned: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. Strictly monotonic: two mutations within the
    /// same clock millisecond still produce distinct, ordered timestamps.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::milliseconds(1)
        };
    }
}

/// A partial update: `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub pinned: Option<bool>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        NotePatch {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        NotePatch {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn pinned(pinned: bool) -> Self {
        NotePatch {
            pinned: Some(pinned),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_has_defaults() {
        let note = Note::new("1714000000000".into());
        assert_eq!(note.title, DEFAULT_TITLE);
        assert!(note.content.is_empty());
        assert!(!note.pinned);
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn touch_is_strictly_monotonic() {
        let mut note = Note::new("1".into());
        let before = note.updated_at;
        note.touch();
        let first = note.updated_at;
        note.touch();
        let second = note.updated_at;
        assert!(first > before);
        assert!(second > first);
    }

    #[test]
    fn timestamps_survive_json_round_trip() {
        let mut note = Note::new("1714000000000".into());
        note.touch();
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }
}
