use chrono::NaiveDate;
use serde_json::Value;

/// Accepted spellings of a date, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// Current value of a preview input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text of a text or phone input.
    Text(String),
    /// Single selection, `None` until something is picked.
    Choice(Option<String>),
    /// Checked values of a checkbox group.
    Many(Vec<String>),
    /// Raw date input.
    Date(String),
    /// Attached file names.
    Files(Vec<String>),
}

impl FieldValue {
    /// Short name of the variant, used in mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Choice(_) => "choice",
            FieldValue::Many(_) => "list",
            FieldValue::Date(_) => "date",
            FieldValue::Files(_) => "files",
        }
    }

    /// Whether nothing was entered.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Date(s) => s.trim().is_empty(),
            FieldValue::Choice(c) => c.as_deref().is_none_or(|s| s.trim().is_empty()),
            FieldValue::Many(v) | FieldValue::Files(v) => v.is_empty(),
        }
    }

    /// Submitted form of the value.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Choice(c) => c.clone().map(Value::String).unwrap_or(Value::Null),
            FieldValue::Many(v) | FieldValue::Files(v) => {
                Value::Array(v.iter().cloned().map(Value::String).collect())
            }
            FieldValue::Date(s) => parse_date(s)
                .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
                .unwrap_or(Value::Null),
        }
    }
}

/// Parse a user-entered date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_date() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(parse_date("2024-02-29"), Some(d));
        assert_eq!(parse_date(" 29/02/2024 "), Some(d));
        assert_eq!(parse_date("2024/02/29"), Some(d));
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("tomorrow"), None);
    }

    #[test]
    fn test_blank() {
        assert!(FieldValue::Text("  ".into()).is_blank());
        assert!(FieldValue::Choice(None).is_blank());
        assert!(FieldValue::Choice(Some(" ".into())).is_blank());
        assert!(!FieldValue::Many(vec!["a".into()]).is_blank());
    }

    #[test]
    fn test_json() {
        assert_eq!(FieldValue::Choice(None).to_json(), Value::Null);
        assert_eq!(
            FieldValue::Date("01/12/2023".into()).to_json(),
            json!("2023-12-01")
        );
        assert_eq!(
            FieldValue::Files(vec!["cv.pdf".into()]).to_json(),
            json!(["cv.pdf"])
        );
    }
}
