//! Rule-based form validation
//!
//! Each field gets at most one message. Rules run in a fixed order and a
//! later rule overwrites an earlier one for the same field:
//!
//! 1. required (returns early for the field)
//! 2. letters-only, for names containing "name"
//! 3. 0..=105 range, for names containing "age"
//! 4. script injection, for any text value

use super::field::{FieldValue, FormErrors, FormValues};
use crate::state::{FieldDescriptor, Schema};
use regex::Regex;
use std::sync::LazyLock;

/// Letters and whitespace only, at least one character
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern is valid"));

/// Opening and closing script tags on one line; `\r`, U+2028 and U+2029 end a line too
static SCRIPT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<script[^\n\r\x{2028}\x{2029}]*?>[^\n\r\x{2028}\x{2029}]*?</script>")
        .expect("script pattern is valid")
});

const AGE_MIN: f64 = 0.0;
const AGE_MAX: f64 = 105.0;

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Required,
    PatternMismatch,
    RangeOrTypeError,
    InjectionDetected,
}

impl ValidationKind {
    /// User-facing message for a field with the given label
    pub fn message(self, label: &str) -> String {
        match self {
            ValidationKind::Required => format!("{label} is required"),
            ValidationKind::PatternMismatch => {
                format!("{label} should contain only letters and spaces")
            }
            ValidationKind::RangeOrTypeError => {
                format!("{label} must be a number between 0 and 105")
            }
            ValidationKind::InjectionDetected => format!("Invalid input detected in {label}"),
        }
    }
}

/// Maps a schema and its current values to per-field error messages
#[cfg_attr(test, mockall::automock)]
pub trait Validator {
    fn validate(&self, schema: &Schema, values: &FormValues) -> FormErrors;
}

/// The built-in rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl Validator for RuleValidator {
    fn validate(&self, schema: &Schema, values: &FormValues) -> FormErrors {
        validate(schema, values)
    }
}

/// Run every rule over every field
pub fn validate(schema: &Schema, values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in &schema.fields {
        if let Some(kind) = check_field(field, values.get(&field.name)) {
            errors.insert(&field.name, kind.message(&field.label));
        }
    }
    errors
}

/// Outcome for one field; `None` means the value passed.
///
/// A missing value behaves like an absent key: it is "empty" for the
/// required rule, is not text, and does not coerce to a number.
fn check_field(field: &FieldDescriptor, value: Option<&FieldValue>) -> Option<ValidationKind> {
    let missing = value.is_none_or(FieldValue::is_empty_text);
    if field.required && missing {
        return Some(ValidationKind::Required);
    }

    let text = match value {
        Some(FieldValue::Text(s)) => Some(s.as_str()),
        _ => None,
    };
    let name = field.name.to_lowercase();
    let mut outcome = None;

    // Runs for optional empty fields too, which then fail the `+` quantifier.
    if name.contains("name") {
        if let Some(text) = text {
            if !NAME_PATTERN.is_match(text) {
                outcome = Some(ValidationKind::PatternMismatch);
            }
        }
    }

    if name.contains("age") {
        let number = coerce_number(value);
        if number.is_nan() || number < AGE_MIN || number > AGE_MAX {
            outcome = Some(ValidationKind::RangeOrTypeError);
        }
    }

    if text.is_some_and(|t| SCRIPT_PATTERN.is_match(t)) {
        outcome = Some(ValidationKind::InjectionDetected);
    }

    outcome
}

/// Numeric coercion with loose string semantics
///
/// Blank text is 0, booleans are 0 or 1, a missing value is NaN.
fn coerce_number(value: Option<&FieldValue>) -> f64 {
    match value {
        None => f64::NAN,
        Some(FieldValue::Bool(b)) => f64::from(u8::from(*b)),
        Some(FieldValue::Text(s)) => parse_number_text(s),
    }
}

fn parse_number_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            // from_str_radix would take a sign after the prefix
            if digits.starts_with(['+', '-']) {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    // f64's parser also takes "inf" and "nan"; those are not numbers here.
    let numeric_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric_chars {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn one_field(field: FieldDescriptor, value: impl Into<FieldValue>) -> FormErrors {
        let value: FieldValue = value.into();
        let values: FormValues = [(field.name.clone(), value)].into_iter().collect();
        validate(&Schema::new("Test", vec![field]), &values)
    }

    fn test_schema() -> Schema {
        Schema::new(
            "Test Form",
            vec![
                FieldDescriptor::text("firstName", "First Name").required(),
                FieldDescriptor::number("age", "Age"),
                FieldDescriptor::checkbox("subscribe", "Subscribe"),
                FieldDescriptor::select("color", "Favorite Color", ["red", "blue"]).required(),
            ],
        )
    }

    mod required {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_required_text() {
            let errors = one_field(FieldDescriptor::text("firstName", "First Name").required(), "");
            let expected: FormErrors = [("firstName", "First Name is required")]
                .into_iter()
                .collect();
            assert_eq!(errors, expected);
        }

        #[test]
        fn test_empty_required_for_every_non_checkbox_type() {
            for field in [
                FieldDescriptor::text("city", "City").required(),
                FieldDescriptor::number("count", "Count").required(),
                FieldDescriptor::select("color", "Color", ["red"]).required(),
            ] {
                let label = field.label.clone();
                let name = field.name.clone();
                let errors = one_field(field, "");
                assert_eq!(errors.get(&name), Some(format!("{label} is required").as_str()));
            }
        }

        #[test]
        fn test_missing_value_counts_as_empty() {
            let schema = Schema::new("T", vec![FieldDescriptor::text("city", "City").required()]);
            let errors = validate(&schema, &FormValues::default());
            assert_eq!(errors.get("city"), Some("City is required"));
        }

        #[test]
        fn test_unchecked_required_checkbox_passes() {
            let errors = one_field(FieldDescriptor::checkbox("terms", "Terms").required(), false);
            assert!(errors.is_empty());
        }

        #[test]
        fn test_required_skips_later_rules() {
            // "username" would also fail the letters-only rule on ""
            let errors = one_field(FieldDescriptor::text("username", "Username").required(), "");
            assert_eq!(errors.get("username"), Some("Username is required"));
        }
    }

    mod name_pattern {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_letters_and_spaces_pass() {
            let errors = one_field(FieldDescriptor::text("fullName", "Full Name"), "John Doe");
            assert!(errors.is_empty());
        }

        #[test]
        fn test_digits_fail() {
            let errors = one_field(FieldDescriptor::text("fullName", "Full Name"), "John123");
            assert_eq!(
                errors.get("fullName"),
                Some("Full Name should contain only letters and spaces")
            );
        }

        #[test]
        fn test_match_is_case_insensitive_on_field_name() {
            let errors = one_field(FieldDescriptor::text("NAME", "Name"), "R2D2");
            assert!(errors.contains("NAME"));
        }

        #[test]
        fn test_empty_optional_name_fails() {
            let errors = one_field(FieldDescriptor::text("nickname", "Nickname"), "");
            assert_eq!(
                errors.get("nickname"),
                Some("Nickname should contain only letters and spaces")
            );
        }

        #[test]
        fn test_non_text_value_is_skipped() {
            let errors = one_field(FieldDescriptor::checkbox("showName", "Show Name"), true);
            assert!(errors.is_empty());
        }

        #[test]
        fn test_other_fields_are_not_checked() {
            let errors = one_field(FieldDescriptor::text("city", "City"), "Area 51");
            assert!(errors.is_empty());
        }
    }

    mod age {
        use super::*;
        use pretty_assertions::assert_eq;

        fn age_error(value: &str) -> Option<String> {
            one_field(FieldDescriptor::number("age", "Age"), value)
                .get("age")
                .map(str::to_string)
        }

        #[test]
        fn test_out_of_range_or_non_numeric() {
            for value in [
                "-1", "106", "abc", "1e3", "Infinity", "inf", "NaN", "0x", "0x+5", "0o+7", "0b-1",
            ] {
                assert_eq!(
                    age_error(value).as_deref(),
                    Some("Age must be a number between 0 and 105"),
                    "value {value:?}"
                );
            }
        }

        #[test]
        fn test_in_range() {
            for value in ["0", "105", "50", " 42 ", "12.5", "0x10", "+7", ""] {
                assert_eq!(age_error(value), None, "value {value:?}");
            }
        }

        #[test]
        fn test_name_containing_age() {
            let errors = one_field(FieldDescriptor::number("userAge", "User Age"), "200");
            assert_eq!(
                errors.get("userAge"),
                Some("User Age must be a number between 0 and 105")
            );
        }

        #[test]
        fn test_missing_value_is_not_a_number() {
            let schema = Schema::new("T", vec![FieldDescriptor::number("age", "Age")]);
            let errors = validate(&schema, &FormValues::default());
            assert!(errors.contains("age"));
        }

        #[test]
        fn test_bool_coerces_to_zero_or_one() {
            assert!(one_field(FieldDescriptor::checkbox("ageOk", "Age Ok"), true).is_empty());
            assert!(one_field(FieldDescriptor::checkbox("ageOk", "Age Ok"), false).is_empty());
        }

        #[test]
        fn test_age_rule_overwrites_name_rule() {
            let errors = one_field(FieldDescriptor::text("agename", "Age Name"), "x1");
            assert_eq!(
                errors.get("agename"),
                Some("Age Name must be a number between 0 and 105")
            );
        }
    }

    mod script_injection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_detected_in_plain_field() {
            let errors = one_field(
                FieldDescriptor::text("comment", "Comment"),
                "<script>alert(1)</script>",
            );
            assert_eq!(errors.get("comment"), Some("Invalid input detected in Comment"));
        }

        #[test]
        fn test_overrides_name_rule() {
            let errors = one_field(
                FieldDescriptor::text("firstName", "First Name"),
                "<script>alert(1)</script>",
            );
            assert_eq!(
                errors.get("firstName"),
                Some("Invalid input detected in First Name")
            );
        }

        #[test]
        fn test_overrides_age_rule() {
            let errors = one_field(
                FieldDescriptor::number("age", "Age"),
                "<SCRIPT src=x>evil()</Script>",
            );
            assert_eq!(errors.get("age"), Some("Invalid input detected in Age"));
        }

        #[test]
        fn test_does_not_span_lines() {
            for value in [
                "<script>\nalert(1)</script>",
                "<script>\ralert(1)</script>",
                "<script>\u{2028}alert(1)</script>",
                "<script\u{2029}>alert(1)</script>",
            ] {
                let errors = one_field(FieldDescriptor::text("comment", "Comment"), value);
                assert!(errors.is_empty(), "value {value:?}");
            }
        }

        #[test]
        fn test_signed_radix_text_in_age_named_field() {
            let errors = one_field(FieldDescriptor::text("usage", "Usage"), "0x+5");
            assert_eq!(
                errors.get("usage"),
                Some("Usage must be a number between 0 and 105")
            );
        }
    }

    mod scenarios {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_values_produce_no_errors() {
            let values: FormValues = [
                ("firstName", FieldValue::from("John")),
                ("age", FieldValue::from("30")),
                ("subscribe", FieldValue::Bool(true)),
                ("color", FieldValue::from("red")),
            ]
            .into_iter()
            .collect();
            assert_eq!(validate(&test_schema(), &values), FormErrors::default());
        }

        #[test]
        fn test_only_failing_fields_are_reported() {
            let values: FormValues = [
                ("firstName", FieldValue::from("")),
                ("age", FieldValue::from("200")),
                ("subscribe", FieldValue::Bool(false)),
                ("color", FieldValue::from("blue")),
            ]
            .into_iter()
            .collect();
            let expected: FormErrors = [
                ("firstName", "First Name is required"),
                ("age", "Age must be a number between 0 and 105"),
            ]
            .into_iter()
            .collect();
            assert_eq!(validate(&test_schema(), &values), expected);
        }

        #[test]
        fn test_validate_is_idempotent() {
            let values: FormValues = [("firstName", "J0hn"), ("age", "x")].into_iter().collect();
            let schema = test_schema();
            let first = validate(&schema, &values);
            let second = validate(&schema, &values);
            assert_eq!(first, second);
        }

        #[test]
        fn test_rule_validator_matches_validate() {
            let values: FormValues = [("firstName", "")].into_iter().collect();
            let schema = test_schema();
            assert_eq!(
                RuleValidator.validate(&schema, &values),
                validate(&schema, &values)
            );
        }
    }

    #[test]
    fn test_parse_number_text() {
        assert_eq!(parse_number_text("  "), 0.0);
        assert_eq!(parse_number_text("0b101"), 5.0);
        assert_eq!(parse_number_text("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number_text("12abc").is_nan());
        assert!(parse_number_text("infinity").is_nan());
        assert!(parse_number_text("0x+5").is_nan());
        assert!(parse_number_text("0B-1").is_nan());
    }
}
