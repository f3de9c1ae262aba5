//! Field widget contract and type dispatch

use super::checkbox::CheckboxInput;
use super::select::SelectInput;
use super::text_input::{NumberInput, TextInput};
use crate::state::{ChangeEvent, FieldDescriptor, FieldType, FieldValue, FormController, SelectOption};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

/// Rows used by one rendered field (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Everything a widget needs to draw one field and report edits
#[derive(Debug, Clone, Copy)]
pub struct WidgetProps<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub value: Option<&'a FieldValue>,
    pub required: bool,
    pub error: Option<&'a str>,
    /// Empty for everything but select fields
    pub options: &'a [SelectOption],
    pub focused: bool,
}

impl<'a> WidgetProps<'a> {
    /// Props for one schema field bound to the controller's current state
    pub fn for_field(field: &'a FieldDescriptor, form: &'a FormController, focused: bool) -> Self {
        Self {
            name: &field.name,
            label: &field.label,
            value: form.value_for(&field.name),
            required: field.required,
            error: form.error_for(&field.name),
            options: &field.options,
            focused,
        }
    }

    /// Current text, empty when unset or not textual
    pub fn text(&self) -> &str {
        self.value.map(FieldValue::as_text).unwrap_or("")
    }

    /// Build a text change notification for this field
    pub fn value_changed(&self, value: String) -> ChangeEvent {
        ChangeEvent::Value {
            name: self.name.to_string(),
            value,
        }
    }
}

/// Capability every field type's input control provides
pub trait FieldWidget {
    /// Draw the control into `area`
    fn render(&self, frame: &mut Frame, area: Rect, props: &WidgetProps);

    /// Translate a key press into a change notification, if it edits the value
    fn handle_key(&self, key: KeyEvent, props: &WidgetProps) -> Option<ChangeEvent>;
}

/// Pick the widget for a field type
pub fn widget_for(field_type: FieldType) -> &'static dyn FieldWidget {
    match field_type {
        FieldType::Text => &TextInput,
        FieldType::Number => &NumberInput,
        FieldType::Checkbox => &CheckboxInput,
        FieldType::Select => &SelectInput,
    }
}

/// Bordered block shared by all widgets
///
/// The label (with a red `*` when required) sits in the top border and the
/// error message, if any, in the bottom border.
pub fn field_block<'a>(props: &WidgetProps<'a>, show_label: bool) -> Block<'a> {
    let border_style = if props.error.is_some() {
        Style::default().fg(Color::Red)
    } else if props.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    if show_label {
        let mut title = vec![Span::styled(
            format!(" {}", props.label),
            Style::default().fg(Color::White),
        )];
        if props.required {
            title.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        title.push(Span::raw(" "));
        block = block.title(Line::from(title));
    }

    if let Some(error) = props.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    block
}

/// Cursor glyph appended to the focused field's content
pub fn cursor_span(focused: bool) -> Span<'static> {
    let cursor = if focused { "▌" } else { "" };
    Span::styled(cursor, Style::default().fg(Color::Cyan))
}
