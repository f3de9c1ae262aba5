//! Whole-form rendering: fields, buttons and the submitted data panel

use super::field_renderer::{widget_for, WidgetProps, FIELD_HEIGHT};
use crate::app::App;
use crate::state::FormButton;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the form, with the submitted data beside it once submitted
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.form.submitted().is_none() {
        draw_form(frame, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Form
            Constraint::Percentage(40), // Submitted data
        ])
        .split(area);

    draw_form(frame, chunks[0], app);
    draw_submitted(frame, chunks[1], app);
}

/// Draw the title block, one widget per field, then the buttons row
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let schema = app.form.schema();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", schema.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = schema
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in schema.fields.iter().enumerate() {
        let focused = app.focus.focused_field() == Some(idx);
        let props = WidgetProps::for_field(field, &app.form, focused);
        widget_for(field.field_type).render(frame, chunks[idx], &props);
    }

    draw_buttons(frame, chunks[schema.fields.len()], app);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Submit
            Constraint::Length(1),  // Gap
            Constraint::Length(11), // Reset
            Constraint::Min(0),
        ])
        .split(area);

    let on_buttons = app.focus.is_buttons_row_active();
    render_button(
        frame,
        chunks[0],
        "Submit",
        on_buttons && app.focus.selected_button == FormButton::Submit,
        Color::Green,
    );
    render_button(
        frame,
        chunks[2],
        "Reset",
        on_buttons && app.focus.selected_button == FormButton::Reset,
        Color::Gray,
    );
}

fn draw_submitted(frame: &mut Frame, area: Rect, app: &App) {
    let Some(data) = app.form.submitted() else {
        return;
    };
    let json = app.form.submitted_json().unwrap_or_default();

    let mut block = Block::default()
        .title(Span::styled(
            " Submitted Data ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    if app.show_submitted_at {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", data.submitted_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let lines: Vec<Line> = json.lines().map(|l| Line::from(l.to_string())).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
