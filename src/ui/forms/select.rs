//! Select input cycling through a fixed option list

use super::field_renderer::{cursor_span, field_block, FieldWidget, WidgetProps};
use crate::state::ChangeEvent;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Shown until an option is chosen; it cannot be chosen again afterwards
const PLACEHOLDER: &str = "-- Select --";

pub struct SelectInput;

impl SelectInput {
    /// Index of the option matching the current value
    fn selected_index(props: &WidgetProps) -> Option<usize> {
        let current = props.text();
        props.options.iter().position(|o| o.value == current)
    }
}

impl FieldWidget for SelectInput {
    fn render(&self, frame: &mut Frame, area: Rect, props: &WidgetProps) {
        let arrow_style = if props.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let choice = match Self::selected_index(props) {
            Some(idx) => Span::styled(
                props.options[idx].label.clone(),
                Style::default().fg(Color::White),
            ),
            None => Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        };

        let line = Line::from(vec![
            Span::styled("◀ ", arrow_style),
            choice,
            Span::styled(" ▶", arrow_style),
            cursor_span(props.focused),
        ]);
        frame.render_widget(Paragraph::new(line).block(field_block(props, true)), area);
    }

    fn handle_key(&self, key: KeyEvent, props: &WidgetProps) -> Option<ChangeEvent> {
        let count = props.options.len();
        if count == 0 {
            return None;
        }

        let current = Self::selected_index(props);
        let next = match key.code {
            KeyCode::Right | KeyCode::Char(' ') => current.map_or(0, |i| (i + 1) % count),
            KeyCode::Left => current.map_or(count - 1, |i| (i + count - 1) % count),
            _ => return None,
        };
        Some(props.value_changed(props.options[next].value.clone()))
    }
}
