use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::markup::strip_markup;
use crate::model::note::Note;
use crate::util::wrap::truncate_to_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct NoteJson {
    pub id: String,
    pub title: String,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub preview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct NoteListJson {
    pub notes: Vec<NoteJson>,
}

impl NoteJson {
    /// Summary form (list/search): preview only, no full content
    pub fn summary(note: &Note) -> Self {
        NoteJson {
            id: note.id.clone(),
            title: note.title.clone(),
            pinned: note.pinned,
            created_at: note.created_at,
            updated_at: note.updated_at,
            preview: preview_text(note),
            content: None,
        }
    }

    /// Full form (show): includes the raw content
    pub fn full(note: &Note) -> Self {
        let mut json = Self::summary(note);
        json.content = Some(note.content.clone());
        json
    }
}

/// One-line plain-text preview of a note's content
pub fn preview_text(note: &Note) -> String {
    let stripped = strip_markup(&note.content);
    let first = stripped.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    truncate_to_width(first.trim(), 60)
}

/// Human list row: pin marker, id, title, updated stamp
pub fn format_note_row(note: &Note) -> String {
    let marker = if note.pinned { '*' } else { ' ' };
    format!(
        "{} {}  {:<30}  updated {}",
        marker,
        note.id,
        truncate_to_width(&note.title, 30),
        note.updated_at.format("%Y-%m-%d %H:%M"),
    )
}
