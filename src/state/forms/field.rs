//! Form value objects

use serde::Serialize;
use std::collections::HashMap;

/// A single field's current value
///
/// Checkbox fields hold `Bool`; every other type holds its raw text
/// (numbers stay textual until validation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for checkbox values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Bool(_) => "",
        }
    }

    /// Whether a checkbox should render as checked
    pub fn is_checked(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => !s.is_empty(),
        }
    }

    /// True only for an empty string; `false` is a value, not emptiness
    pub fn is_empty_text(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Current in-progress values keyed by field name
///
/// Updates go through [`FormValues::with`], which builds a new mapping and
/// leaves the receiver untouched for anyone still holding it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues(HashMap<String, FieldValue>);

impl FormValues {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Copy of this mapping with one entry replaced
    pub fn with(&self, name: &str, value: FieldValue) -> FormValues {
        let mut next = self.0.clone();
        next.insert(name.to_string(), value);
        FormValues(next)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormValues(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Validation messages keyed by field name; empty means no errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(HashMap<String, String>);

impl FormErrors {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Set the message for a field, replacing any earlier one
    pub fn insert(&mut self, name: &str, message: String) {
        self.0.insert(name.to_string(), message);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormErrors(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Change notification emitted by a field widget on every edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// Text, number and select edits carry the new textual value
    Value { name: String, value: String },
    /// Checkbox toggles carry the checked state
    Checked { name: String, checked: bool },
}

impl ChangeEvent {
    /// The value this event stores into form state
    pub fn into_value(self) -> (String, FieldValue) {
        match self {
            ChangeEvent::Value { name, value } => (name, FieldValue::Text(value)),
            ChangeEvent::Checked { name, checked } => (name, FieldValue::Bool(checked)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_is_empty_text() {
        assert!(FieldValue::default().is_empty_text());
    }

    #[test]
    fn test_false_is_not_empty_text() {
        assert!(!FieldValue::Bool(false).is_empty_text());
    }

    #[test]
    fn test_is_checked() {
        assert!(FieldValue::Bool(true).is_checked());
        assert!(!FieldValue::Bool(false).is_checked());
        assert!(!FieldValue::from("").is_checked());
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let before: FormValues = [("a", "1"), ("b", "2")].into_iter().collect();
        let after = before.with("a", FieldValue::from("changed"));
        assert_eq!(before.get("a"), Some(&FieldValue::from("1")));
        assert_eq!(after.get("a"), Some(&FieldValue::from("changed")));
        assert_eq!(after.get("b"), before.get("b"));
    }

    #[test]
    fn test_values_serialize_as_plain_json() {
        let values = FormValues::default()
            .with("subscribe", FieldValue::Bool(true))
            .with("age", FieldValue::from("30"));
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["subscribe"], serde_json::json!(true));
        assert_eq!(json["age"], serde_json::json!("30"));
    }

    #[test]
    fn test_errors_insert_replaces() {
        let mut errors = FormErrors::default();
        errors.insert("name", "first".to_string());
        errors.insert("name", "second".to_string());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("second"));
    }

    #[test]
    fn test_change_event_into_value() {
        let event = ChangeEvent::Checked {
            name: "subscribe".to_string(),
            checked: true,
        };
        assert_eq!(
            event.into_value(),
            ("subscribe".to_string(), FieldValue::Bool(true))
        );
    }
}
