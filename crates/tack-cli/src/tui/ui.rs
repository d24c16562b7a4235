//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use tack_core::{Draft, NoteColor};

use super::app::{App, EditorFocus};
use crate::output::format_millis;

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    // Vertical layout with a status bar at the bottom
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    // Split the main area into list and detail panes
    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(outer_chunks[0]);

    draw_notes_pane(frame, app, pane_chunks[0]);
    draw_detail_pane(frame, app, pane_chunks[1]);
    draw_status_bar(frame, app, outer_chunks[1]);

    // The editor is a modal overlay
    if let Some(draft) = app.session.draft() {
        draw_editor_overlay(frame, app, draft);
    }

    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the notes list (left pane)
fn draw_notes_pane(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .notes
        .iter()
        .map(|note| {
            let line = Line::from(vec![
                Span::styled("■ ", Style::default().fg(swatch_color(note.color))),
                Span::raw(truncate(&note.title, area.width.saturating_sub(6) as usize)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Notes ({}) ", app.notes.len()))
        .borders(Borders::ALL);

    if app.notes.is_empty() {
        let empty = Paragraph::new("No notes yet.\n\nPress 'n' to create your first note!")
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the detail preview (right pane)
fn draw_detail_pane(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Preview ").borders(Borders::ALL);

    let Some(note) = app.selected_note() else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            note.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} · created {} · updated {}",
                note.color,
                format_millis(note.created_at),
                format_millis(note.updated_at)
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    for content_line in note.content.lines() {
        lines.push(Line::from(content_line.to_string()));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Draw the bottom status bar
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref message) = app.status_message {
        message.clone()
    } else if app.session.is_open() {
        " Tab: switch field | Ctrl+S: save | Ctrl+P: color | Ctrl+D: delete | Esc: discard"
            .to_string()
    } else {
        " n: new | Enter: edit | d: delete | j/k: move | ?: help | q: quit".to_string()
    };

    let bar = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

/// Draw the modal note editor
fn draw_editor_overlay(frame: &mut Frame, app: &App, draft: &Draft) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let accent = swatch_color(draft.color);
    let block = Block::default()
        .title(format!(" {} ", if draft.id.is_some() { "Edit Note" } else { "New Note" }))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    // Title field
    let title_focused = app.focus == EditorFocus::Title;
    let title_text = field_text(&draft.title, title_focused, "Title");
    let title = Paragraph::new(title_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_border(title_focused)),
    );
    frame.render_widget(title, chunks[0]);

    // Content field
    let content_focused = app.focus == EditorFocus::Content;
    let content_text = field_text(&draft.content, content_focused, "Take a note...");
    let content = Paragraph::new(content_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(content_focused)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(content, chunks[1]);

    // Color palette row
    let mut spans = vec![Span::raw(" ")];
    for color in NoteColor::PALETTE {
        let style = if color == draft.color {
            Style::default()
                .fg(swatch_color(color))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(swatch_color(color))
        };
        spans.push(Span::styled(format!(" {} ", color.name()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);
}

/// Draw the help overlay
fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from("  j/k or ↑/↓   Move selection"),
        Line::from("  n            New note"),
        Line::from("  Enter / e    Edit selected note"),
        Line::from("  d            Delete selected note"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from("  In the editor:"),
        Line::from("  Tab          Switch title/content"),
        Line::from("  Ctrl+S       Save and close"),
        Line::from("  Ctrl+P       Cycle color"),
        Line::from("  Ctrl+D       Delete note"),
        Line::from("  Esc          Discard and close"),
        Line::from(""),
        Line::from("  Press any key to close"),
    ];

    let help = Paragraph::new(lines).block(Block::default().title(" Help ").borders(Borders::ALL));
    frame.render_widget(help, area);
}

/// Text for an editor field, with placeholder and cursor marker
fn field_text(value: &str, focused: bool, placeholder: &str) -> Vec<Line<'static>> {
    if value.is_empty() && !focused {
        return vec![Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines: Vec<Line> = value
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    if value.ends_with('\n') || lines.is_empty() {
        lines.push(Line::from(String::new()));
    }

    if focused {
        // Cursor marker at the end of the last line
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(
                "▏",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
    }

    lines
}

fn field_border(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Terminal color for a note swatch
fn swatch_color(color: NoteColor) -> Color {
    match color {
        NoteColor::White => Color::Rgb(255, 255, 255),
        NoteColor::Red => Color::Rgb(254, 202, 202),
        NoteColor::Orange => Color::Rgb(254, 215, 170),
        NoteColor::Yellow => Color::Rgb(254, 240, 138),
        NoteColor::Lime => Color::Rgb(217, 249, 157),
        NoteColor::Blue => Color::Rgb(191, 219, 254),
    }
}

/// Truncate a string for a list row
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Centered rect helper for overlays
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
