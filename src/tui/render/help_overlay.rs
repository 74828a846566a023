use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Notes", header_style)));
    add_binding(&mut lines, " n", "New note (title first)", key_style, desc_style);
    add_binding(&mut lines, " Enter/i", "Edit note body", key_style, desc_style);
    add_binding(&mut lines, " t", "Rename note", key_style, desc_style);
    add_binding(&mut lines, " p", "Pin / unpin", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete (with confirmation)", key_style, desc_style);
    add_binding(&mut lines, " e", "Export to PDF", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Navigation", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move between notes", key_style, desc_style);
    add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
    add_binding(&mut lines, " /", "Search (live filter)", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Clear filter / close", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Editing", header_style)));
    add_binding(&mut lines, " Ctrl+B", "Bold selection or word", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+I", "Italic selection or word", key_style, desc_style);
    add_binding(&mut lines, " Shift+arrows", "Extend selection", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Back to the list", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Other", header_style)));
    add_binding(&mut lines, " Ctrl+S", "Save now", key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit (saves pending edits)", key_style, desc_style);

    // Scroll window
    let inner_height = overlay_area.height.saturating_sub(2) as usize;
    let shown: Vec<Line> = lines
        .into_iter()
        .skip(app.help_scroll)
        .take(inner_height)
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help (j/k scroll, Esc close) ")
        .style(Style::default().bg(bg).fg(app.theme.text));

    frame.render_widget(
        Paragraph::new(shown).block(block).style(Style::default().bg(bg)),
        overlay_area,
    );
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let padded = format!("{:<14}", key);
    lines.push(Line::from(vec![
        Span::styled(padded, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Rect centered in `area`, sized as a percentage of it
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
