//! Submit/reset orchestration for one form instance

use super::field::{ChangeEvent, FieldValue, FormErrors, FormValues};
use super::form_state::{initialize, FormStateManager};
use super::validator::{RuleValidator, Validator};
use crate::state::Schema;
use chrono::{DateTime, Local};

/// Whether the form is being edited or showing a submitted snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Editing,
    Submitted,
}

/// Values captured by the last successful submit
#[derive(Debug, Clone)]
pub struct SubmittedData {
    pub values: FormValues,
    pub submitted_at: DateTime<Local>,
}

/// Owns a schema, its state and the validator used on submit
pub struct FormController {
    schema: Schema,
    state: FormStateManager,
    validator: Box<dyn Validator>,
    submitted: Option<SubmittedData>,
}

impl FormController {
    /// Controller with the built-in rules and default initial values
    pub fn new(schema: Schema) -> Self {
        Self::with_parts(schema, Box::new(RuleValidator), initialize)
    }

    /// Controller with an injected validator and initial-state factory
    pub fn with_parts(
        schema: Schema,
        validator: Box<dyn Validator>,
        initial_state: impl FnOnce(&Schema) -> FormValues,
    ) -> Self {
        let mut state = FormStateManager::default();
        state.set_form_values(initial_state(&schema));
        Self {
            schema,
            state,
            validator,
            submitted: None,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        self.state.values()
    }

    pub fn errors(&self) -> &FormErrors {
        self.state.errors()
    }

    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.state.errors().get(name)
    }

    pub fn value_for(&self, name: &str) -> Option<&FieldValue> {
        self.values().get(name)
    }

    pub fn submitted(&self) -> Option<&SubmittedData> {
        self.submitted.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        if self.submitted.is_some() {
            FormMode::Submitted
        } else {
            FormMode::Editing
        }
    }

    pub fn handle_change(&mut self, event: ChangeEvent) {
        self.state.handle_change(event);
    }

    /// Validate the current values and commit them if they pass
    ///
    /// Errors are always replaced, so a clean run clears stale messages.
    /// A failing run leaves any earlier snapshot in place.
    pub fn submit(&mut self) -> FormMode {
        let errors = self.validator.validate(&self.schema, self.values());
        let passed = errors.is_empty();
        tracing::debug!("Submit of '{}': {} error(s)", self.schema.title, errors.len());
        self.state.set_errors(errors);

        if passed {
            self.submitted = Some(SubmittedData {
                values: self.values().clone(),
                submitted_at: Local::now(),
            });
            tracing::info!("Form '{}' submitted", self.schema.title);
        }
        self.mode()
    }

    /// Discard the submitted snapshot and all error messages
    ///
    /// Field values are kept as they are.
    pub fn reset(&mut self) {
        self.submitted = None;
        self.state.set_errors(FormErrors::default());
        tracing::debug!("Form '{}' reset", self.schema.title);
    }

    /// The submitted snapshot as pretty JSON, keys in schema order
    pub fn submitted_json(&self) -> Option<String> {
        let data = self.submitted.as_ref()?;
        let mut object = serde_json::Map::new();
        for field in &self.schema.fields {
            if let Some(value) = data.values.get(&field.name) {
                object.insert(field.name.clone(), serde_json::to_value(value).ok()?);
            }
        }
        let mut extra: Vec<_> = data
            .values
            .iter()
            .filter(|(name, _)| !object.contains_key(name.as_str()))
            .collect();
        extra.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in extra {
            object.insert(name.clone(), serde_json::to_value(value).ok()?);
        }
        serde_json::to_string_pretty(&serde_json::Value::Object(object)).ok()
    }
}
