use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Discard the input; any previously committed filter stays
            app.search_input.clear();
            app.mode = Mode::Navigate;
            app.sync_cursor();
        }
        KeyCode::Enter => {
            let input = app.search_input.trim().to_string();
            app.active_query = if input.is_empty() { None } else { Some(input) };
            app.mode = Mode::Navigate;
            app.sync_cursor();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            reset_to_first_match(app);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.clear();
            reset_to_first_match(app);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.push(c);
            reset_to_first_match(app);
        }
        _ => {}
    }
}

/// Live filtering: as the query narrows, keep the cursor on the best
/// (first) match
fn reset_to_first_match(app: &mut App) {
    app.cursor = 0;
    app.select_at_cursor();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;
    use crate::model::note::NotePatch;
    use crate::model::store::NoteStore;
    use crate::ops::note_ops::{create_note, update_note};
    use crate::tui::input::handle_key;
    use crossterm::event::KeyEvent;
    use std::path::PathBuf;

    fn app() -> App {
        let mut store = NoteStore::new();
        for title in ["Groceries", "Meeting Notes", "Travel"] {
            let id = create_note(&mut store);
            update_note(&mut store, &id, NotePatch::title(title));
        }
        let mut app = App::new(store, AppConfig::default(), PathBuf::from("/nonexistent"));
        app.mode = Mode::Search;
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_filters_live_and_selects_first_match() {
        let mut app = app();
        type_str(&mut app, "groc");
        assert_eq!(app.visible_ids().len(), 1);
        assert_eq!(app.selected_note().unwrap().title, "Groceries");
    }

    #[test]
    fn enter_commits_the_filter() {
        let mut app = app();
        type_str(&mut app, "meet");
        handle_key(&mut app, KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.active_query.as_deref(), Some("meet"));
        assert_eq!(app.visible_ids().len(), 1);
    }

    #[test]
    fn esc_cancels_but_keeps_prior_filter() {
        let mut app = app();
        app.active_query = Some("travel".into());
        type_str(&mut app, "zzz");
        assert!(app.visible_ids().is_empty());
        handle_key(&mut app, KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.active_query.as_deref(), Some("travel"));
        assert_eq!(app.visible_ids().len(), 1);
    }

    #[test]
    fn enter_on_empty_input_clears_the_filter() {
        let mut app = app();
        app.active_query = Some("travel".into());
        handle_key(&mut app, KeyEvent::from(KeyCode::Enter));
        assert!(app.active_query.is_none());
        assert_eq!(app.visible_ids().len(), 3);
    }

    #[test]
    fn backspace_widens_the_match_set() {
        let mut app = app();
        type_str(&mut app, "travelx");
        assert!(app.visible_ids().is_empty());
        handle_key(&mut app, KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.visible_ids().len(), 1);
    }
}
