use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::export;
use crate::ops::note_ops;
use crate::tui::app::{App, Mode};

use super::edit;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts its own keys
    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                app.show_help = false;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                app.help_scroll = app.help_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            _ => {}
        }
        return;
    }

    // Clear any transient toast on keypress
    app.status = None;

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') if !ctrl => app.should_quit = true,
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => app.should_quit = true,

        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_ids().len();
            if len > 0 {
                app.cursor = (app.cursor + 1).min(len - 1);
                app.select_at_cursor();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
            app.select_at_cursor();
        }
        KeyCode::Char('g') => {
            app.cursor = 0;
            app.select_at_cursor();
        }
        KeyCode::Char('G') => {
            app.cursor = app.visible_ids().len().saturating_sub(1);
            app.select_at_cursor();
        }

        KeyCode::Char('n') => create_and_edit(app),

        KeyCode::Enter | KeyCode::Char('i') => {
            if let Some(note) = app.selected_note() {
                let end = note.content.len();
                let (line, col) = edit::offset_to_pos(&note.content, end);
                app.editor.line = line;
                app.editor.col = col;
                app.editor.anchor = None;
                app.mode = Mode::EditContent;
            }
        }
        KeyCode::Char('t') => {
            if let Some(note) = app.selected_note() {
                app.title_input = note.title.clone();
                app.title_cursor = app.title_input.chars().count();
                app.mode = Mode::EditTitle;
            }
        }
        KeyCode::Char('p') => {
            if let Some(id) = app.selected.clone() {
                note_ops::toggle_pin(&mut app.store, &id);
                app.mark_dirty();
                app.sync_cursor();
            }
        }
        KeyCode::Char('d') => {
            if app.selected.is_some() {
                app.pending_delete = app.selected.clone();
                app.mode = Mode::Confirm;
            }
        }
        KeyCode::Char('e') => export_selected(app),

        KeyCode::Char('/') => {
            app.search_input = app.active_query.clone().unwrap_or_default();
            app.mode = Mode::Search;
        }
        KeyCode::Char('s') if ctrl => app.save_now(true),
        KeyCode::Char('?') => {
            app.show_help = true;
            app.help_scroll = 0;
        }

        KeyCode::Esc => {
            // Drop the committed search filter
            if app.active_query.take().is_some() {
                app.sync_cursor();
            }
        }
        _ => {}
    }
}

/// `n`: create a note, select it, and go straight to title editing
fn create_and_edit(app: &mut App) {
    let id = note_ops::create_note(&mut app.store);
    app.mark_dirty();
    // A fresh note can be hidden by an active filter; drop it so the
    // note is visible and selected
    app.active_query = None;
    app.selected = Some(id);
    app.sync_cursor();
    app.title_input = String::new();
    app.title_cursor = 0;
    app.mode = Mode::EditTitle;
}

/// `e`: export the selected note to `<title>.pdf` in the working directory
fn export_selected(app: &mut App) {
    let Some(note) = app.selected_note() else {
        return;
    };
    let path = std::path::PathBuf::from(export::export_file_name(note));
    match export::export_note(note, &path) {
        Ok(()) => app.set_status(format!("exported to {}", path.display())),
        Err(e) => app.set_error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::note::DEFAULT_TITLE;
    use crate::model::store::NoteStore;
    use crate::model::{config::AppConfig, note::NotePatch};
    use crate::ops::note_ops::{create_note, update_note};
    use crossterm::event::{KeyCode, KeyEvent};
    use std::path::PathBuf;

    fn app_with_notes(n: usize) -> App {
        let mut store = NoteStore::new();
        for i in 0..n {
            let id = create_note(&mut store);
            update_note(&mut store, &id, NotePatch::title(format!("Note {}", i)));
        }
        App::new(store, AppConfig::default(), PathBuf::from("/nonexistent"))
    }

    fn press(app: &mut App, code: KeyCode) {
        crate::tui::input::handle_key(app, KeyEvent::from(code));
    }

    #[test]
    fn n_creates_selects_and_enters_title_edit() {
        let mut app = app_with_notes(1);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::EditTitle);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.cursor, 0);
        let note = app.selected_note().unwrap();
        assert_eq!(note.title, DEFAULT_TITLE);
        assert!(note.content.is_empty());
    }

    #[test]
    fn j_and_k_move_the_list_cursor() {
        let mut app = app_with_notes(3);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 1);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 2); // clamped
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn p_pins_and_reorders() {
        let mut app = app_with_notes(3);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        let id = app.selected.clone().unwrap();
        press(&mut app, KeyCode::Char('p'));
        assert!(app.store.get(&id).unwrap().pinned);
        // Pinned note moved to the top, cursor followed
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected, Some(id));
        assert!(app.autosave.is_pending());
    }

    #[test]
    fn d_asks_for_confirmation() {
        let mut app = app_with_notes(1);
        let id = app.selected.clone();
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(app.pending_delete, id);
        assert_eq!(app.store.len(), 1); // nothing deleted yet
    }

    #[test]
    fn esc_clears_the_active_filter() {
        let mut app = app_with_notes(2);
        app.active_query = Some("Note 0".into());
        app.sync_cursor();
        assert_eq!(app.visible_ids().len(), 1);
        press(&mut app, KeyCode::Esc);
        assert!(app.active_query.is_none());
        assert_eq!(app.visible_ids().len(), 2);
    }

    #[test]
    fn q_quits() {
        let mut app = app_with_notes(0);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
