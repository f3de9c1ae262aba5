//! Checkbox input

use super::field_renderer::{field_block, FieldWidget, WidgetProps};
use crate::state::ChangeEvent;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub struct CheckboxInput;

impl FieldWidget for CheckboxInput {
    fn render(&self, frame: &mut Frame, area: Rect, props: &WidgetProps) {
        let checked = props.value.is_some_and(|v| v.is_checked());
        let checkbox = if checked { "[x]" } else { "[ ]" };
        let display = format!("{} {}", checkbox, props.label);

        let style = if props.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };

        // The label sits beside the box, so the border carries no title
        let paragraph = Paragraph::new(display)
            .style(style)
            .block(field_block(props, false));
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&self, key: KeyEvent, props: &WidgetProps) -> Option<ChangeEvent> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(ChangeEvent::Checked {
                name: props.name.to_string(),
                checked: !props.value.is_some_and(|v| v.is_checked()),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldValue;
    use crossterm::event::KeyModifiers;

    fn props<'a>(value: Option<&'a FieldValue>) -> WidgetProps<'a> {
        WidgetProps {
            name: "subscribe",
            label: "Subscribe",
            value,
            required: false,
            error: None,
            options: &[],
            focused: true,
        }
    }

    #[test]
    fn test_space_toggles_on() {
        let value = FieldValue::Bool(false);
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(
            CheckboxInput.handle_key(key, &props(Some(&value))),
            Some(ChangeEvent::Checked {
                name: "subscribe".to_string(),
                checked: true,
            })
        );
    }

    #[test]
    fn test_enter_toggles_off() {
        let value = FieldValue::Bool(true);
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            CheckboxInput.handle_key(key, &props(Some(&value))),
            Some(ChangeEvent::Checked {
                name: "subscribe".to_string(),
                checked: false,
            })
        );
    }

    #[test]
    fn test_unset_value_toggles_on() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(matches!(
            CheckboxInput.handle_key(key, &props(None)),
            Some(ChangeEvent::Checked { checked: true, .. })
        ));
    }
}
