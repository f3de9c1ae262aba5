//! Declarative form schema
//!
//! A [`Schema`] is supplied by the host (a JSON file or the built-in demo)
//! and is immutable once handed to a form controller. Field order is render
//! order only; it has no effect on which fields validate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or checking a schema
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate field name: {0}")]
    DuplicateName(String),

    #[error("select field '{0}' has no options")]
    MissingOptions(String),
}

/// The closed set of field types a schema may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Checkbox,
    Select,
}

/// One selectable entry of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSelectOption")]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Options may be written as plain strings or as `{label, value}` objects
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelectOption {
    Plain(String),
    Labeled { label: String, value: String },
}

impl From<RawSelectOption> for SelectOption {
    fn from(raw: RawSelectOption) -> Self {
        match raw {
            RawSelectOption::Plain(s) => SelectOption::new(s.clone(), s),
            RawSelectOption::Labeled { label, value } => SelectOption::new(label, value),
        }
    }
}

impl From<&str> for SelectOption {
    fn from(s: &str) -> Self {
        SelectOption::new(s, s)
    }
}

/// Metadata for a single form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// State key, unique within a schema
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Only meaningful for select fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FieldDescriptor {
    fn new(name: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            required: false,
            options: Vec::new(),
        }
    }

    /// Create a text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    /// Create a number field
    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Number)
    }

    /// Create a checkbox field
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Checkbox)
    }

    /// Create a select field with the given options
    pub fn select<O: Into<SelectOption>>(
        name: &str,
        label: &str,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Self::new(name, label, FieldType::Select)
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A form title plus its ordered fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub title: String,
    pub fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new(title: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }

    /// Parse a schema from JSON and check it
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Schema = serde_json::from_str(json)?;
        schema.check()?;
        Ok(schema)
    }

    /// Load a schema from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schema = Self::from_json(&content)?;
        tracing::info!(
            "Loaded schema '{}' with {} fields from {}",
            schema.title,
            schema.fields.len(),
            path.display()
        );
        Ok(schema)
    }

    /// Reject schemas the form engine cannot key state by
    pub fn check(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyName { index });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }
            if field.field_type == FieldType::Select && field.options.is_empty() {
                return Err(SchemaError::MissingOptions(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Demo schema used when the host supplies none
    pub fn user_registration() -> Self {
        Self::new(
            "User Registration",
            vec![
                FieldDescriptor::text("name", "Name").required(),
                FieldDescriptor::number("age", "Age"),
                FieldDescriptor::checkbox("subscribe", "Subscribe"),
                FieldDescriptor::select("gender", "Gender", ["Male", "Female", "Other"]),
            ],
        )
    }
}
