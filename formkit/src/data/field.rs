use serde::Serialize;

use crate::data::types::{FieldKind, InputType};

/// Pattern new phone fields are created with.
pub const DEFAULT_PHONE_PATTERN: &str = r"^\+?[1-9]\d{1,4}([-\s]?\d{1,15}){1,4}$";

/// A selectable value of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    /// Create an option whose label and value are both `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            value: text,
        }
    }
}

/// A single input descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Text shown next to the input.
    pub label: String,
    /// Key the submitted value is stored under.
    pub name: String,
    /// Stable id, only assigned to child sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Type tag and type-specific attributes.
    #[serde(flatten)]
    pub body: FieldBody,
}

/// Type-specific part of a [`Field`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum FieldBody {
    #[serde(rename = "text")]
    Text {
        #[serde(rename = "allowedTypes")]
        allowed_types: Vec<InputType>,
        #[serde(rename = "inputType")]
        input_type: InputType,
    },
    #[serde(rename = "tel")]
    Phone {
        #[serde(rename = "allowedTypes")]
        allowed_types: Vec<InputType>,
        pattern: String,
    },
    #[serde(rename = "select")]
    Dropdown { options: Vec<FieldOption> },
    #[serde(rename = "radiobutton")]
    Radio { options: Vec<FieldOption> },
    #[serde(rename = "checkboxes")]
    Checkbox { options: Vec<FieldOption> },
    #[serde(rename = "country")]
    Country { options: Vec<FieldOption> },
    #[serde(rename = "datepicker")]
    Date,
    #[serde(rename = "fileupload")]
    FileUpload,
    #[serde(rename = "childsection")]
    ChildSection { fields: Vec<Field> },
}

impl FieldBody {
    fn text() -> Self {
        FieldBody::Text {
            allowed_types: vec![InputType::Text, InputType::Number, InputType::Email],
            input_type: InputType::Text,
        }
    }
}

impl Field {
    /// Build the default field of `kind` placed at 1-based `position`.
    pub fn new(kind: FieldKind, position: usize) -> Self {
        let name = format!("field{position}");
        let (label, body) = match kind {
            FieldKind::Text => ("Text Field Label".to_string(), FieldBody::text()),
            FieldKind::Phone => (
                "Phone Number".to_string(),
                FieldBody::Phone {
                    allowed_types: vec![InputType::Tel],
                    pattern: DEFAULT_PHONE_PATTERN.to_string(),
                },
            ),
            FieldKind::Dropdown => (
                "Select Field".to_string(),
                FieldBody::Dropdown {
                    options: Vec::new(),
                },
            ),
            FieldKind::Radio => (
                "Add label".to_string(),
                FieldBody::Radio {
                    options: Vec::new(),
                },
            ),
            FieldKind::Checkbox => (
                "Add checkbox label".to_string(),
                FieldBody::Checkbox {
                    options: Vec::new(),
                },
            ),
            FieldKind::Country => (
                "Add country label".to_string(),
                FieldBody::Country {
                    options: Vec::new(),
                },
            ),
            FieldKind::Date => ("Date".to_string(), FieldBody::Date),
            FieldKind::FileUpload => ("Upload File".to_string(), FieldBody::FileUpload),
            FieldKind::ChildSection => {
                let id = format!("child-{position}");
                return Self {
                    label: format!("Child Section {position}"),
                    name: id.clone(),
                    id: Some(id),
                    body: FieldBody::ChildSection { fields: Vec::new() },
                };
            }
        };

        Self {
            label,
            name,
            id: None,
            body,
        }
    }

    /// Build the text field appended to a child section at 1-based `position`.
    pub fn nested_text(position: usize) -> Self {
        Self {
            label: format!("Field {position}"),
            name: format!("field-{position}"),
            id: None,
            body: FieldBody::text(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match &self.body {
            FieldBody::Text { .. } => FieldKind::Text,
            FieldBody::Phone { .. } => FieldKind::Phone,
            FieldBody::Dropdown { .. } => FieldKind::Dropdown,
            FieldBody::Radio { .. } => FieldKind::Radio,
            FieldBody::Checkbox { .. } => FieldKind::Checkbox,
            FieldBody::Country { .. } => FieldKind::Country,
            FieldBody::Date => FieldKind::Date,
            FieldBody::FileUpload => FieldKind::FileUpload,
            FieldBody::ChildSection { .. } => FieldKind::ChildSection,
        }
    }

    /// Options of a choice field, `None` for every other kind.
    pub fn options(&self) -> Option<&[FieldOption]> {
        match &self.body {
            FieldBody::Dropdown { options }
            | FieldBody::Radio { options }
            | FieldBody::Checkbox { options }
            | FieldBody::Country { options } => Some(options),
            _ => None,
        }
    }

    pub fn options_mut(&mut self) -> Option<&mut Vec<FieldOption>> {
        match &mut self.body {
            FieldBody::Dropdown { options }
            | FieldBody::Radio { options }
            | FieldBody::Checkbox { options }
            | FieldBody::Country { options } => Some(options),
            _ => None,
        }
    }

    /// Nested fields of a child section.
    pub fn children(&self) -> Option<&[Field]> {
        match &self.body {
            FieldBody::ChildSection { fields } => Some(fields),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Field>> {
        match &mut self.body {
            FieldBody::ChildSection { fields } => Some(fields),
            _ => None,
        }
    }

    /// Validation pattern of a phone field.
    pub fn pattern(&self) -> Option<&str> {
        match &self.body {
            FieldBody::Phone { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// Input sub-type a text-like field renders as.
    pub fn input_type(&self) -> Option<InputType> {
        match &self.body {
            FieldBody::Text { input_type, .. } => Some(*input_type),
            FieldBody::Phone { .. } => Some(InputType::Tel),
            _ => None,
        }
    }
}
