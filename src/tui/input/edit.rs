//! Title and content editing. The content editor works on the raw content
//! string (markup tags visible, dimmed by the renderer) with a line/column
//! cursor and an optional selection anchor. Every edit is committed to the
//! note immediately and arms the autosave debounce.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::markup::{toggle_wrap, word_range_at};
use crate::model::note::NotePatch;
use crate::ops::note_ops;
use crate::tui::app::{App, Mode};

// ---------------------------------------------------------------------------
// Buffer position helpers (line/col in chars ↔ byte offset)
// ---------------------------------------------------------------------------

pub(crate) fn pos_to_offset(text: &str, line: usize, col: usize) -> usize {
    let mut base = 0;
    for (i, l) in text.split('\n').enumerate() {
        if i == line {
            for (taken, (bi, _)) in l.char_indices().enumerate() {
                if taken == col {
                    return base + bi;
                }
            }
            return base + l.len();
        }
        base += l.len() + 1;
    }
    text.len()
}

pub(crate) fn offset_to_pos(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let mut base = 0;
    for (i, l) in text.split('\n').enumerate() {
        let end = base + l.len();
        if offset <= end {
            return (i, l[..offset - base].chars().count());
        }
        base = end + 1;
    }
    (0, 0)
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

fn line_chars(text: &str, line: usize) -> usize {
    text.split('\n').nth(line).map_or(0, |l| l.chars().count())
}

/// Ordered byte range of the current selection, if non-empty
pub(crate) fn selection_range(app: &App, text: &str) -> Option<(usize, usize)> {
    let (al, ac) = app.editor.anchor?;
    let a = pos_to_offset(text, al, ac);
    let c = pos_to_offset(text, app.editor.line, app.editor.col);
    if a == c {
        return None;
    }
    Some((a.min(c), a.max(c)))
}

// ---------------------------------------------------------------------------
// Content editing
// ---------------------------------------------------------------------------

pub(super) fn handle_edit_content(app: &mut App, key: KeyEvent) {
    let Some(note) = app.selected_note() else {
        app.mode = Mode::Navigate;
        return;
    };
    let text = note.content.clone();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Esc => {
            app.editor.anchor = None;
            app.mode = Mode::Navigate;
            app.sync_cursor();
        }
        KeyCode::Char('s') if ctrl => app.save_now(true),
        KeyCode::Char('b') if ctrl => toggle_format(app, &text, "<b>", "</b>"),
        KeyCode::Char('i') if ctrl => toggle_format(app, &text, "<i>", "</i>"),

        KeyCode::Left => {
            update_anchor(app, shift);
            if app.editor.col > 0 {
                app.editor.col -= 1;
            } else if app.editor.line > 0 {
                app.editor.line -= 1;
                app.editor.col = line_chars(&text, app.editor.line);
            }
        }
        KeyCode::Right => {
            update_anchor(app, shift);
            if app.editor.col < line_chars(&text, app.editor.line) {
                app.editor.col += 1;
            } else if app.editor.line + 1 < line_count(&text) {
                app.editor.line += 1;
                app.editor.col = 0;
            }
        }
        KeyCode::Up => {
            update_anchor(app, shift);
            if app.editor.line > 0 {
                app.editor.line -= 1;
                app.editor.col = app.editor.col.min(line_chars(&text, app.editor.line));
            } else {
                app.editor.col = 0;
            }
        }
        KeyCode::Down => {
            update_anchor(app, shift);
            if app.editor.line + 1 < line_count(&text) {
                app.editor.line += 1;
                app.editor.col = app.editor.col.min(line_chars(&text, app.editor.line));
            } else {
                app.editor.col = line_chars(&text, app.editor.line);
            }
        }
        KeyCode::Home => {
            update_anchor(app, shift);
            app.editor.col = 0;
        }
        KeyCode::End => {
            update_anchor(app, shift);
            app.editor.col = line_chars(&text, app.editor.line);
        }

        KeyCode::Enter => insert_text(app, &text, "\n"),
        KeyCode::Tab => insert_text(app, &text, "    "),
        KeyCode::Backspace => backspace(app, &text),
        KeyCode::Delete => delete_forward(app, &text),
        KeyCode::Char(c) if !ctrl => insert_text(app, &text, &c.to_string()),
        _ => {}
    }
}

/// Shift extends a selection; a plain movement drops it
fn update_anchor(app: &mut App, shift: bool) {
    if shift {
        if app.editor.anchor.is_none() {
            app.editor.anchor = Some((app.editor.line, app.editor.col));
        }
    } else {
        app.editor.anchor = None;
    }
}

fn set_cursor_to_offset(app: &mut App, text: &str, offset: usize) {
    let (line, col) = offset_to_pos(text, offset);
    app.editor.line = line;
    app.editor.col = col;
}

fn commit_content(app: &mut App, content: String) {
    if let Some(id) = app.selected.clone() {
        note_ops::update_note(&mut app.store, &id, NotePatch::content(content));
        app.mark_dirty();
    }
}

fn insert_text(app: &mut App, text: &str, insert: &str) {
    let (mut new_text, start) = match selection_range(app, text) {
        Some((s, e)) => {
            let mut t = String::with_capacity(text.len());
            t.push_str(&text[..s]);
            t.push_str(&text[e..]);
            (t, s)
        }
        None => (
            text.to_string(),
            pos_to_offset(text, app.editor.line, app.editor.col),
        ),
    };
    new_text.insert_str(start, insert);
    set_cursor_to_offset(app, &new_text, start + insert.len());
    app.editor.anchor = None;
    commit_content(app, new_text);
}

fn backspace(app: &mut App, text: &str) {
    if let Some((s, e)) = selection_range(app, text) {
        delete_range(app, text, s, e);
        return;
    }
    let offset = pos_to_offset(text, app.editor.line, app.editor.col);
    let Some((prev, _)) = text[..offset].char_indices().next_back() else {
        return;
    };
    delete_range(app, text, prev, offset);
}

fn delete_forward(app: &mut App, text: &str) {
    if let Some((s, e)) = selection_range(app, text) {
        delete_range(app, text, s, e);
        return;
    }
    let offset = pos_to_offset(text, app.editor.line, app.editor.col);
    let Some(c) = text[offset..].chars().next() else {
        return;
    };
    delete_range(app, text, offset, offset + c.len_utf8());
}

fn delete_range(app: &mut App, text: &str, start: usize, end: usize) {
    let mut new_text = String::with_capacity(text.len());
    new_text.push_str(&text[..start]);
    new_text.push_str(&text[end..]);
    set_cursor_to_offset(app, &new_text, start);
    app.editor.anchor = None;
    commit_content(app, new_text);
}

/// Ctrl+B / Ctrl+I: wrap or unwrap the selection (or the word under the
/// cursor) in a tag pair. With nothing to wrap, insert an empty pair and
/// leave the cursor inside it.
fn toggle_format(app: &mut App, text: &str, open: &str, close: &str) {
    let (start, end) = match selection_range(app, text) {
        Some(range) => range,
        None => {
            let at = pos_to_offset(text, app.editor.line, app.editor.col);
            match word_range_at(text, at) {
                Some(range) => (range.start, range.end),
                None => (at, at),
            }
        }
    };

    let (new_text, s, e) = toggle_wrap(text, start, end, open, close);
    app.editor.anchor = if s == e {
        None
    } else {
        Some(offset_to_pos(&new_text, s))
    };
    set_cursor_to_offset(app, &new_text, e);
    commit_content(app, new_text);
}

// ---------------------------------------------------------------------------
// Title editing (single line, live-committed)
// ---------------------------------------------------------------------------

pub(super) fn handle_edit_title(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            commit_title(app);
            app.mode = Mode::Navigate;
            app.sync_cursor();
        }
        KeyCode::Char('s') if ctrl => app.save_now(true),
        KeyCode::Left => app.title_cursor = app.title_cursor.saturating_sub(1),
        KeyCode::Right => {
            app.title_cursor = (app.title_cursor + 1).min(app.title_input.chars().count());
        }
        KeyCode::Home => app.title_cursor = 0,
        KeyCode::End => app.title_cursor = app.title_input.chars().count(),
        KeyCode::Backspace => {
            if app.title_cursor > 0 {
                let idx = byte_at(&app.title_input, app.title_cursor - 1);
                app.title_input.remove(idx);
                app.title_cursor -= 1;
                commit_title(app);
            }
        }
        KeyCode::Delete => {
            if app.title_cursor < app.title_input.chars().count() {
                let idx = byte_at(&app.title_input, app.title_cursor);
                app.title_input.remove(idx);
                commit_title(app);
            }
        }
        KeyCode::Char(c) if !ctrl => {
            let idx = byte_at(&app.title_input, app.title_cursor);
            app.title_input.insert(idx, c);
            app.title_cursor += 1;
            commit_title(app);
        }
        _ => {}
    }
}

/// Reflect the title buffer into the note (an empty buffer becomes the
/// default title via `update_note`)
fn commit_title(app: &mut App) {
    if let Some(id) = app.selected.clone() {
        note_ops::update_note(&mut app.store, &id, NotePatch::title(app.title_input.clone()));
        app.mark_dirty();
    }
}

fn byte_at(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}
