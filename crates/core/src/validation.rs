//! Field-level validation errors.
//!
//! Serializers collect every problem with a payload before rejecting it, so
//! clients see all offending fields at once. [`FieldErrors`] is the map they
//! collect into; it serializes as `{"field": ["message", ...]}`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use validator::ValidationErrors;

use crate::error::CoreError;
use crate::types::{Date, DATE_FORMAT};

/// Message used when a required field is absent or `null`.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message used when a text field is present but empty.
pub const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Message used when a date field cannot be parsed.
pub const DATE_FORMAT_MESSAGE: &str = "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";

/// Message used when a text field holds a list, object or boolean.
pub const STRING_TYPE_MESSAGE: &str = "Not a valid string.";

/// Message used when an integer field cannot be read as a whole number.
pub const INTEGER_TYPE_MESSAGE: &str = "A valid integer is required.";

/// Validation messages keyed by field name, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Merge the output of a `validator` derive into this map.
    ///
    /// Errors without an explicit message fall back to their validator code.
    pub fn extend_from(&mut self, errors: &ValidationErrors) {
        for (field, errs) in errors.field_errors() {
            let field = field.to_string();
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", err.code));
                self.add(&field, message);
            }
        }
    }

    /// `Ok(())` when nothing was recorded, otherwise [`CoreError::InvalidFields`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self))
        }
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = Self::new();
        out.extend_from(errors);
        out
    }
}

/// Parse a `YYYY-MM-DD` date, recording a message against `field` on failure.
///
/// A missing value is left for the `required` rule to report.
pub fn parse_date_field(field: &str, value: Option<&str>, errors: &mut FieldErrors) -> Option<Date> {
    let raw = value?;
    match Date::parse_from_str(raw.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, DATE_FORMAT_MESSAGE);
            None
        }
    }
}

/// Read a text field from a loosely typed payload.
///
/// Strings pass through and numbers are accepted in their JSON spelling.
/// Anything else is recorded as [`STRING_TYPE_MESSAGE`]. A missing value is
/// left for the `required` rule to report.
pub fn string_field(field: &str, value: Option<&Value>, errors: &mut FieldErrors) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => {
            errors.add(field, STRING_TYPE_MESSAGE);
            None
        }
    }
}

/// Read a whole number from a JSON number or a numeric string.
///
/// `128`, `128.0` and `" 128 "` all give `128`; `128.5`, `true` and `"abc"`
/// give `None`.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    }
}

fn whole_number(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Read an integer field, recording `message` against `field` when the
/// value is present but not a whole number.
pub fn integer_field(
    field: &str,
    value: Option<&Value>,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<i64> {
    let raw = value?;
    let parsed = as_integer(raw);
    if parsed.is_none() {
        errors.add(field, message);
    }
    parsed
}

/// Read a `YYYY-MM-DD` date from a loosely typed payload. Non-string values
/// get the same message as an unparseable string.
pub fn date_field(field: &str, value: Option<&Value>, errors: &mut FieldErrors) -> Option<Date> {
    match value? {
        Value::String(s) => parse_date_field(field, Some(s.as_str()), errors),
        _ => {
            errors.add(field, DATE_FORMAT_MESSAGE);
            None
        }
    }
}

/// Short JSON type name used in type-mismatch messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
