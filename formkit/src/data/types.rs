use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of field kinds a form can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single line text input.
    Text,
    /// Phone number checked against a pattern.
    Phone,
    /// Single choice from a drop-down list.
    Dropdown,
    /// Single choice from a radio group.
    Radio,
    /// Multiple choice from a checkbox group.
    Checkbox,
    /// Country picker.
    Country,
    /// Calendar date.
    Date,
    /// File attachment.
    FileUpload,
    /// Group of nested fields.
    ChildSection,
}

impl FieldKind {
    /// All kinds in palette order.
    pub const ALL: [FieldKind; 9] = [
        FieldKind::Text,
        FieldKind::Dropdown,
        FieldKind::Radio,
        FieldKind::FileUpload,
        FieldKind::Checkbox,
        FieldKind::Country,
        FieldKind::Date,
        FieldKind::Phone,
        FieldKind::ChildSection,
    ];

    /// The type tag written into the debug JSON.
    pub fn tag(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Phone => "tel",
            FieldKind::Dropdown => "select",
            FieldKind::Radio => "radiobutton",
            FieldKind::Checkbox => "checkboxes",
            FieldKind::Country => "country",
            FieldKind::Date => "datepicker",
            FieldKind::FileUpload => "fileupload",
            FieldKind::ChildSection => "childsection",
        }
    }

    /// Whether the kind carries an options list.
    pub fn has_options(self) -> bool {
        matches!(
            self,
            FieldKind::Dropdown | FieldKind::Radio | FieldKind::Checkbox | FieldKind::Country
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Text => "Text",
            FieldKind::Phone => "Phone",
            FieldKind::Dropdown => "Dropdown",
            FieldKind::Radio => "Radio",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::Country => "Country",
            FieldKind::Date => "Date",
            FieldKind::FileUpload => "File",
            FieldKind::ChildSection => "Child section",
        };
        f.write_str(s)
    }
}

/// Input sub-types a text field may be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Number,
    Email,
    Tel,
}

impl InputType {
    /// Accepts the raw input for this sub-type.
    ///
    /// Only `number` narrows what can be typed; the rest accept any text.
    pub fn accepts(self, input: &str) -> bool {
        match self {
            InputType::Number => input.is_empty() || input.trim().parse::<f64>().is_ok(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_kinds() {
        let choice: Vec<_> = FieldKind::ALL
            .iter()
            .copied()
            .filter(|k| k.has_options())
            .collect();
        assert_eq!(
            choice,
            vec![
                FieldKind::Dropdown,
                FieldKind::Radio,
                FieldKind::Checkbox,
                FieldKind::Country
            ]
        );
    }

    #[test]
    fn test_number_input() {
        assert!(InputType::Number.accepts("42"));
        assert!(InputType::Number.accepts(" 4.5 "));
        assert!(InputType::Number.accepts(""));
        assert!(!InputType::Number.accepts("four"));
        assert!(InputType::Email.accepts("four"));
    }
}
