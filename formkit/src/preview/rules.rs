use regex::Regex;

use crate::{
    data::{field::Field, types::FieldKind, types::InputType},
    preview::value::{FieldValue, parse_date},
};

/// Accepted shape of email input.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Validation rule derived from a field descriptor.
#[derive(Debug, Clone)]
pub enum Rule {
    /// A value must be present.
    Required { message: String },
    /// Present text, optionally narrowed by its input type.
    Text {
        input_type: InputType,
        /// Shape the text must match, set for email input.
        format: Option<Regex>,
        required: String,
        invalid: String,
    },
    /// Present text matching `pattern`; `None` matches anything.
    Pattern {
        pattern: Option<Regex>,
        required: String,
        invalid: String,
    },
    /// Present and parsable date.
    Date { required: String, invalid: String },
    /// At least one checked value.
    AtLeastOne { message: String },
}

impl Rule {
    /// Derive the rule for an input field.
    ///
    /// Returns `Err` with the regex error when a pattern does not compile.
    /// Child sections carry no rule.
    pub fn for_field(field: &Field) -> Result<Option<Rule>, regex::Error> {
        let label = &field.label;
        let required = format!("{label} is required.");
        let rule = match field.kind() {
            FieldKind::Text => Rule::Text {
                input_type: field.input_type().unwrap_or(InputType::Text),
                format: match field.input_type() {
                    Some(InputType::Email) => Some(Regex::new(EMAIL_PATTERN)?),
                    _ => None,
                },
                invalid: match field.input_type() {
                    Some(InputType::Number) => format!("{label} must be a number."),
                    Some(InputType::Email) => format!("{label} must be a valid email."),
                    _ => String::new(),
                },
                required,
            },
            FieldKind::Phone => {
                let pattern = match field.pattern() {
                    Some(p) if !p.is_empty() => Some(Regex::new(p)?),
                    _ => None,
                };
                Rule::Pattern {
                    pattern,
                    required,
                    invalid: "Invalid phone number.".to_string(),
                }
            }
            FieldKind::Dropdown | FieldKind::Radio | FieldKind::Country | FieldKind::FileUpload => {
                Rule::Required { message: required }
            }
            FieldKind::Checkbox => Rule::AtLeastOne {
                message: format!("At least one {label} option is required."),
            },
            FieldKind::Date => Rule::Date {
                required,
                invalid: format!("{label} must be a valid date."),
            },
            FieldKind::ChildSection => return Ok(None),
        };
        Ok(Some(rule))
    }

    /// Check a value, returning the error message on failure.
    pub fn check(&self, value: &FieldValue) -> Option<String> {
        match self {
            Rule::Required { message } | Rule::AtLeastOne { message } => {
                value.is_blank().then(|| message.clone())
            }
            Rule::Text {
                input_type,
                format,
                required,
                invalid,
            } => {
                let FieldValue::Text(text) = value else {
                    return Some(required.clone());
                };
                if text.trim().is_empty() {
                    return Some(required.clone());
                }
                let ok = match (input_type, format) {
                    (InputType::Number, _) => input_type.accepts(text),
                    (_, Some(re)) => re.is_match(text.trim()),
                    _ => true,
                };
                (!ok).then(|| invalid.clone())
            }
            Rule::Pattern {
                pattern,
                required,
                invalid,
            } => {
                let FieldValue::Text(text) = value else {
                    return Some(required.clone());
                };
                if text.is_empty() {
                    return Some(required.clone());
                }
                match pattern {
                    Some(re) if !re.is_match(text) => Some(invalid.clone()),
                    _ => None,
                }
            }
            Rule::Date { required, invalid } => {
                if value.is_blank() {
                    return Some(required.clone());
                }
                match value {
                    FieldValue::Date(raw) if parse_date(raw).is_some() => None,
                    _ => Some(invalid.clone()),
                }
            }
        }
    }
}
