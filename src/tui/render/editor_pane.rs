use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::markup::{line_segments, tag_ranges};
use crate::model::note::Note;
use crate::tui::app::{App, Mode};
use crate::tui::input::selection_range;

/// Render the editor (right pane): title, metadata, body
pub fn render_editor_pane(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    let Some(note) = app.selected_note().cloned() else {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  no note selected",
                    Style::default().fg(app.theme.dim).bg(bg),
                )),
                Line::from(Span::styled(
                    "  press n to create one",
                    Style::default().fg(app.theme.dim).bg(bg),
                )),
            ])
            .style(Style::default().bg(bg)),
            area,
        );
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    // Title row (edit buffer with cursor while renaming)
    if app.mode == Mode::EditTitle {
        let chars: Vec<char> = app.title_input.chars().collect();
        let before: String = chars[..app.title_cursor.min(chars.len())].iter().collect();
        let after: String = chars[app.title_cursor.min(chars.len())..].iter().collect();
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                before,
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(
                after,
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                note.title.clone(),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    // Metadata row
    let meta = format!(
        "  created {}   updated {}",
        note.created_at.format("%Y-%m-%d %H:%M"),
        note.updated_at.format("%Y-%m-%d %H:%M"),
    );
    lines.push(Line::from(Span::styled(
        meta,
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));

    let body_height = (area.height as usize).saturating_sub(lines.len()).max(1);

    if app.mode == Mode::EditContent {
        // Keep the cursor line in view
        if app.editor.line < app.editor.scroll {
            app.editor.scroll = app.editor.line;
        } else if app.editor.line >= app.editor.scroll + body_height {
            app.editor.scroll = app.editor.line + 1 - body_height;
        }
        render_raw_body(app, &note, &mut lines, body_height);
    } else {
        render_styled_body(app, &note, &mut lines, body_height);
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

/// Editing view: raw markup with tags dimmed, selection and cursor visible
fn render_raw_body<'a>(app: &App, note: &Note, lines: &mut Vec<Line<'a>>, body_height: usize) {
    let bg = app.theme.background;
    let content = note.content.clone();
    let selection = selection_range(app, &content);

    let mut base = 0;
    for (li, line) in content.split('\n').enumerate() {
        let line_len = line.len();
        if li >= app.editor.scroll && li < app.editor.scroll + body_height {
            let tags = tag_ranges(line);
            let mut spans = vec![Span::styled("  ", Style::default().bg(bg))];

            for (ci, (bi, c)) in line.char_indices().enumerate() {
                let in_tag = tags.iter().any(|r| r.contains(&bi));
                let in_sel = selection.is_some_and(|(s, e)| (s..e).contains(&(base + bi)));
                let is_cursor = li == app.editor.line && ci == app.editor.col;

                let mut style = Style::default()
                    .fg(if in_tag { app.theme.dim } else { app.theme.text })
                    .bg(if in_sel { app.theme.selection_bg } else { bg });
                if is_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(c.to_string(), style));
            }

            // Cursor past the last char of its line
            if li == app.editor.line && app.editor.col >= line.chars().count() {
                spans.push(Span::styled(
                    " ",
                    Style::default().bg(bg).add_modifier(Modifier::REVERSED),
                ));
            }
            lines.push(Line::from(spans));
        }
        base += line_len + 1;
    }
}

/// Reading view: markup applied as bold/italic, tags hidden
fn render_styled_body<'a>(app: &App, note: &Note, lines: &mut Vec<Line<'a>>, body_height: usize) {
    let bg = app.theme.background;
    let search_re = app.active_search_re();

    for line in note.content.split('\n').take(body_height) {
        let mut spans = vec![Span::styled("  ", Style::default().bg(bg))];
        for segment in line_segments(line) {
            let mut style = Style::default().fg(app.theme.text).bg(bg);
            if segment.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            if segment.italic {
                style = style.add_modifier(Modifier::ITALIC);
            }
            super::push_highlighted_spans(
                &mut spans,
                &segment.text,
                style,
                Style::default()
                    .fg(app.theme.search_match_fg)
                    .bg(app.theme.search_match_bg),
                search_re.as_ref(),
            );
        }
        lines.push(Line::from(spans));
    }
}
