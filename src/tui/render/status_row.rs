use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    // Toasts win over mode hints
    if let Some(status) = &app.status {
        let fg = if status.is_error {
            app.theme.red
        } else {
            app.theme.green
        };
        let line = Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(fg).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(query) = &app.active_query {
                with_hint(
                    app,
                    width,
                    vec![Span::styled(
                        format!("/{}", query),
                        Style::default().fg(app.theme.dim).bg(bg),
                    )],
                    "Esc clear filter",
                )
            } else {
                with_hint(
                    app,
                    width,
                    vec![],
                    "n new  Enter edit  / search  ? help  q quit",
                )
            }
        }
        Mode::Search => {
            // Search prompt: /pattern▌
            with_hint(
                app,
                width,
                vec![
                    Span::styled(
                        format!("/{}", app.search_input),
                        Style::default().fg(app.theme.text_bright).bg(bg),
                    ),
                    Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
                ],
                "Enter keep filter  Esc cancel",
            )
        }
        Mode::EditTitle => with_hint(
            app,
            width,
            vec![Span::styled(
                " renaming",
                Style::default().fg(app.theme.yellow).bg(bg),
            )],
            "Enter done  Esc done",
        ),
        Mode::EditContent => with_hint(
            app,
            width,
            vec![Span::styled(
                " editing",
                Style::default().fg(app.theme.yellow).bg(bg),
            )],
            "Ctrl+B bold  Ctrl+I italic  Ctrl+S save  Esc done",
        ),
        Mode::Confirm => {
            let title = app
                .pending_delete
                .as_deref()
                .and_then(|id| app.store.get(id))
                .map(|n| n.title.clone())
                .unwrap_or_default();
            Line::from(Span::styled(
                format!(" delete \"{}\"?  y confirm  n cancel", title),
                Style::default().fg(app.theme.red).bg(bg),
            ))
        }
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

/// Left-aligned spans with a dimmed right-aligned hint
fn with_hint<'a>(app: &App, width: usize, mut spans: Vec<Span<'a>>, hint: &'a str) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
