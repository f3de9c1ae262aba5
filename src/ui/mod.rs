//! UI module for rendering the TUI

mod components;
pub mod forms;

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FormMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    forms::draw(frame, chunks[0], app);
    draw_status_bar(frame, chunks[1], app);
}

/// Key hints for the current focus and mode
fn get_hints(app: &App) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key_style),
        Span::raw(": next  "),
    ];

    if app.focus.is_buttons_row_active() {
        spans.push(Span::styled("←/→", key_style));
        spans.push(Span::raw(": choose  "));
        spans.push(Span::styled("Enter", key_style));
        spans.push(Span::raw(": press  "));
    }

    spans.push(Span::styled(SUBMIT_SHORTCUT, key_style));
    spans.push(Span::raw(": submit  "));
    spans.push(Span::styled(RESET_SHORTCUT, key_style));
    spans.push(Span::raw(": reset  "));

    if app.form.mode() == FormMode::Submitted {
        spans.push(Span::styled(COPY_SHORTCUT, key_style));
        spans.push(Span::raw(": copy  "));
    }
    spans
}

/// Draw the status bar
fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    spans.extend(get_hints(app));

    // Status message
    if let Some(msg) = &app.status_message {
        let color = if app.form.errors().is_empty() {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let hint_area = Rect {
            x: area.x + area.width - hint_width,
            y: area.y,
            width: hint_width,
            height: 1,
        };
        let hint = Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(hint, hint_area);
    }
}
