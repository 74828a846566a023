use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::markup::strip_markup;
use crate::ops::search::visible_notes;
use crate::tui::app::App;
use crate::util::wrap::truncate_to_width;

use super::push_highlighted_spans;

/// Rows each note occupies in the list: title row + preview row
const ROWS_PER_NOTE: usize = 2;

/// Render the note list (left pane)
pub fn render_list_pane(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let visible_count = (area.height as usize / ROWS_PER_NOTE).max(1);

    let notes: Vec<_> = visible_notes(&app.store, app.query())
        .into_iter()
        .cloned()
        .collect();

    if notes.is_empty() {
        let msg = if app.query().is_empty() {
            "no notes yet"
        } else {
            "no matches"
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", msg),
                Style::default().fg(app.theme.dim).bg(bg),
            ))),
            area,
        );
        return;
    }

    // Keep the selected note in view
    let selected_idx = app
        .selected
        .as_ref()
        .and_then(|id| notes.iter().position(|n| &n.id == id));
    if let Some(idx) = selected_idx {
        if idx < app.list_scroll {
            app.list_scroll = idx;
        } else if idx >= app.list_scroll + visible_count {
            app.list_scroll = idx + 1 - visible_count;
        }
    }
    app.list_scroll = app.list_scroll.min(notes.len().saturating_sub(1));

    let search_re = app.active_search_re();
    let mut lines: Vec<Line> = Vec::new();

    for (idx, note) in notes.iter().enumerate().skip(app.list_scroll) {
        if lines.len() + ROWS_PER_NOTE > area.height as usize {
            break;
        }
        let is_selected = selected_idx == Some(idx);
        let row_bg = if is_selected { app.theme.selection_bg } else { bg };

        let title_style = Style::default()
            .fg(if is_selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        let match_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);

        // Title row: pin marker + highlighted title
        let marker = if note.pinned { "* " } else { "  " };
        let mut spans = vec![Span::styled(
            marker,
            Style::default().fg(app.theme.yellow).bg(row_bg),
        )];
        let title = truncate_to_width(&note.title, width.saturating_sub(2));
        push_highlighted_spans(&mut spans, &title, title_style, match_style, search_re.as_ref());
        pad_to_width(&mut spans, width, row_bg);
        if note.pinned && !is_selected {
            for span in &mut spans {
                span.style = span.style.add_modifier(Modifier::BOLD);
            }
        }
        lines.push(Line::from(spans));

        // Preview row: first non-blank body line, markup stripped, dimmed
        let preview = strip_markup(&note.content);
        let preview = preview
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("");
        let mut spans = vec![Span::styled("  ", Style::default().bg(row_bg))];
        push_highlighted_spans(
            &mut spans,
            &truncate_to_width(preview, width.saturating_sub(2)),
            Style::default().fg(app.theme.dim).bg(row_bg),
            match_style,
            search_re.as_ref(),
        );
        pad_to_width(&mut spans, width, row_bg);
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn pad_to_width(spans: &mut Vec<Span>, width: usize, bg: ratatui::style::Color) {
    let used: usize = spans
        .iter()
        .map(|s| crate::util::wrap::display_width(&s.content))
        .sum();
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }
}
