use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::note_ops;
use crate::tui::app::{App, Mode};

/// Delete confirmation: `y`/Enter deletes, anything else cancels
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    let Some(id) = app.pending_delete.take() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if note_ops::delete_note(&mut app.store, &id) {
                if app.selected.as_deref() == Some(id.as_str()) {
                    app.selected = None;
                }
                app.mark_dirty();
                app.set_status("note deleted");
            }
            app.mode = Mode::Navigate;
            app.select_at_cursor();
        }
        _ => {
            app.mode = Mode::Navigate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;
    use crate::model::store::NoteStore;
    use crate::ops::note_ops::create_note;
    use crate::tui::input::handle_key;
    use std::path::PathBuf;

    fn app_confirming() -> (App, String) {
        let mut store = NoteStore::new();
        let id = create_note(&mut store);
        let mut app = App::new(store, AppConfig::default(), PathBuf::from("/nonexistent"));
        app.selected = Some(id.clone());
        app.pending_delete = Some(id.clone());
        app.mode = Mode::Confirm;
        (app, id)
    }

    #[test]
    fn y_deletes_and_clears_selection() {
        let (mut app, id) = app_confirming();
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('y')));
        assert!(app.store.get(&id).is_none());
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.selected.is_none());
        assert!(app.autosave.is_pending());
    }

    #[test]
    fn anything_else_cancels() {
        let (mut app, id) = app_confirming();
        handle_key(&mut app, KeyEvent::from(KeyCode::Esc));
        assert!(app.store.get(&id).is_some());
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.pending_delete.is_none());
        assert!(!app.autosave.is_pending());
    }

    #[test]
    fn deleting_the_last_match_falls_back_gracefully() {
        let (mut app, _) = app_confirming();
        let other = create_note(&mut app.store);
        handle_key(&mut app, KeyEvent::from(KeyCode::Enter));
        // Selection falls to the remaining note
        assert_eq!(app.selected, Some(other));
    }
}
