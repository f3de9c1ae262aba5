//! Single-line text and number inputs

use super::field_renderer::{cursor_span, field_block, FieldWidget, WidgetProps};
use crate::state::ChangeEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Free-form text input
pub struct TextInput;

/// Numeric input; the value stays textual until validation
pub struct NumberInput;

impl FieldWidget for TextInput {
    fn render(&self, frame: &mut Frame, area: Rect, props: &WidgetProps) {
        draw_text_field(frame, area, props, &format!("Enter {}", props.label.to_lowercase()));
    }

    fn handle_key(&self, key: KeyEvent, props: &WidgetProps) -> Option<ChangeEvent> {
        edit_text(key, props, |_| true)
    }
}

impl FieldWidget for NumberInput {
    fn render(&self, frame: &mut Frame, area: Rect, props: &WidgetProps) {
        draw_text_field(frame, area, props, "0");
    }

    fn handle_key(&self, key: KeyEvent, props: &WidgetProps) -> Option<ChangeEvent> {
        edit_text(key, props, is_number_char)
    }
}

/// Characters a numeric input accepts: digits, sign, point and exponent
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}

/// Apply a typing key to the current text
fn edit_text(
    key: KeyEvent,
    props: &WidgetProps,
    accepts: impl Fn(char) -> bool,
) -> Option<ChangeEvent> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let mut text = props.text().to_string();
    match key.code {
        KeyCode::Char(c) if accepts(c) => text.push(c),
        KeyCode::Backspace => {
            text.pop()?;
        }
        _ => return None,
    }
    Some(props.value_changed(text))
}

fn draw_text_field(frame: &mut Frame, area: Rect, props: &WidgetProps, placeholder: &str) {
    let value = props.text();
    let content = if value.is_empty() && !props.focused {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let style = if props.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(value.to_string(), style),
            cursor_span(props.focused),
        ])
    };

    frame.render_widget(Paragraph::new(content).block(field_block(props, true)), area);
}
