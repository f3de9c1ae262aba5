//! Form state management and focus tracking

use super::field::{ChangeEvent, FieldValue, FormErrors, FormValues};
use crate::state::{FieldType, Schema};

/// Derive the initial values for a schema
///
/// Checkbox fields start `false`, every other field starts as `""`.
pub fn initialize(schema: &Schema) -> FormValues {
    schema
        .fields
        .iter()
        .map(|field| {
            let value = match field.field_type {
                FieldType::Checkbox => FieldValue::Bool(false),
                FieldType::Text | FieldType::Number | FieldType::Select => FieldValue::default(),
            };
            (field.name.clone(), value)
        })
        .collect()
}

/// Owns the current values and error messages of one form instance
#[derive(Debug, Clone, Default)]
pub struct FormStateManager {
    values: FormValues,
    errors: FormErrors,
}

impl FormStateManager {
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Apply a widget change notification
    ///
    /// Only the named entry changes. The previous mapping is replaced as a
    /// whole, never edited in place.
    pub fn handle_change(&mut self, event: ChangeEvent) {
        let (name, value) = event.into_value();
        self.values = self.values.with(&name, value);
    }

    pub fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub fn set_form_values(&mut self, values: FormValues) {
        self.values = values;
    }
}

/// Trait for keyboard focus movement across a form
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons shown below the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

/// Focus position over the schema's fields plus the buttons row
#[derive(Debug, Clone)]
pub struct FormFocus {
    schema_fields: usize,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl FormFocus {
    pub fn new(schema_fields: usize) -> Self {
        Self {
            schema_fields,
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.schema_fields
    }

    /// Index of the focused schema field, if focus is on a field
    pub fn focused_field(&self) -> Option<usize> {
        (!self.is_buttons_row_active()).then_some(self.active_field_index)
    }

    /// Move to the other button (there are only two)
    pub fn toggle_button(&mut self) {
        self.selected_button = match self.selected_button {
            FormButton::Submit => FormButton::Reset,
            FormButton::Reset => FormButton::Submit,
        };
    }
}

impl Form for FormFocus {
    fn field_count(&self) -> usize {
        self.schema_fields + 1 // fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.schema_fields);
    }
}
