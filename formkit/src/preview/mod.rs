//! Live preview of the form being built.
//!
//! [`PreviewForm::build`] walks the schema, derives one input per field
//! (child sections are flattened into their nested fields) together with its
//! initial value and validation [`Rule`], and keeps the values entered so
//! far. [`PreviewForm::submit`] validates everything and produces a
//! [`Submission`].

/// Built-in country list.
pub mod countries;

/// Validation rules derived from field descriptors.
pub mod rules;

/// Values held by preview inputs.
pub mod value;

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    config::BuilderConfig,
    data::{
        field::Field,
        schema::FormSchema,
        section::SectionId,
        types::{FieldKind, InputType},
    },
};

pub use rules::Rule;
pub use value::FieldValue;

/// Identifies a preview input by section id and field index path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub section: SectionId,
    /// Field index, followed by the nested index for child section fields.
    pub path: Vec<usize>,
}

impl FieldKey {
    pub fn new(section: SectionId, path: impl Into<Vec<usize>>) -> Self {
        Self {
            section,
            path: path.into(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section)?;
        for i in &self.path {
            write!(f, ".{i}")?;
        }
        Ok(())
    }
}

/// Errors raised while building or driving the preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("field '{label}' ({key}) has an invalid pattern: {source}")]
    InvalidPattern {
        key: FieldKey,
        label: String,
        #[source]
        source: regex::Error,
    },
    #[error("no preview input {0}")]
    UnknownField(FieldKey),
    #[error("'{value}' is not an option of {key}")]
    UnknownOption { key: FieldKey, value: String },
    #[error("input {key} expects a {expected} value, got {actual}")]
    ValueMismatch {
        key: FieldKey,
        expected: &'static str,
        actual: &'static str,
    },
}

/// A selectable entry of a choice widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

/// Input widget rendered for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Single line input.
    Input { input_type: InputType },
    /// Drop-down list, used for dropdown and country fields.
    Select { choices: Vec<Choice> },
    /// Radio group.
    Radio { choices: Vec<Choice> },
    /// Checkbox group.
    Checkboxes { choices: Vec<Choice> },
    /// Date input.
    Date,
    /// File list.
    Files,
}

impl Widget {
    fn choices(&self) -> Option<&[Choice]> {
        match self {
            Widget::Select { choices }
            | Widget::Radio { choices }
            | Widget::Checkboxes { choices } => Some(choices),
            _ => None,
        }
    }

    /// Value the widget starts with.
    pub fn initial_value(&self) -> FieldValue {
        match self {
            Widget::Input { .. } => FieldValue::Text(String::new()),
            Widget::Select { .. } | Widget::Radio { .. } => FieldValue::Choice(None),
            Widget::Checkboxes { .. } => FieldValue::Many(Vec::new()),
            Widget::Date => FieldValue::Date(String::new()),
            Widget::Files => FieldValue::Files(Vec::new()),
        }
    }
}

/// One rendered input of the preview.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub key: FieldKey,
    pub label: String,
    pub name: String,
    /// Name of the child section the field is nested in.
    pub group: Option<String>,
    pub widget: Widget,
    pub rule: Rule,
    pub value: FieldValue,
    /// Set once the user interacted with the input or submitted the form.
    pub touched: bool,
}

impl PreviewEntry {
    /// Current validation message, regardless of `touched`.
    pub fn validate(&self) -> Option<String> {
        self.rule.check(&self.value)
    }
}

/// A section of the preview with its inputs.
#[derive(Debug, Clone)]
pub struct PreviewSection {
    pub id: SectionId,
    pub name: String,
    pub entries: Vec<PreviewEntry>,
}

/// A failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub key: String,
    pub label: String,
    pub message: String,
}

/// Values of a successfully submitted form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    #[serde(rename = "formName")]
    pub form_name: String,
    pub sections: Vec<SubmittedSection>,
}

/// Submitted values of one section, keyed by field name.
///
/// Fields of a child section are nested under the child section's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedSection {
    pub name: String,
    pub values: Map<String, Value>,
}

/// Interactive, validated rendering of a [`FormSchema`].
#[derive(Debug, Clone)]
pub struct PreviewForm {
    pub form_name: String,
    pub sections: Vec<PreviewSection>,
}

impl PreviewForm {
    /// Derive inputs, initial values and rules from the schema.
    pub fn build(schema: &FormSchema, config: &BuilderConfig) -> Result<Self, PreviewError> {
        let mut sections = Vec::with_capacity(schema.sections.len());
        for section in &schema.sections {
            let mut entries = Vec::new();
            for (i, field) in section.fields.iter().enumerate() {
                match field.children() {
                    Some(children) => {
                        for (j, child) in children.iter().enumerate() {
                            let key = FieldKey::new(section.id, [i, j]);
                            if let Some(entry) =
                                Self::derive_entry(key, child, Some(field.name.as_str()), config)?
                            {
                                entries.push(entry);
                            }
                        }
                    }
                    None => {
                        let key = FieldKey::new(section.id, [i]);
                        if let Some(entry) = Self::derive_entry(key, field, None, config)? {
                            entries.push(entry);
                        }
                    }
                }
            }
            sections.push(PreviewSection {
                id: section.id,
                name: section.name.clone(),
                entries,
            });
        }

        debug!(
            "preview built with {} inputs",
            sections.iter().map(|s| s.entries.len()).sum::<usize>()
        );
        Ok(Self {
            form_name: schema.form_name.clone(),
            sections,
        })
    }

    fn derive_entry(
        key: FieldKey,
        field: &Field,
        group: Option<&str>,
        config: &BuilderConfig,
    ) -> Result<Option<PreviewEntry>, PreviewError> {
        let Some(widget) = widget_for(field, config) else {
            return Ok(None);
        };
        let rule = match Rule::for_field(field) {
            Ok(Some(rule)) => rule,
            Ok(None) => return Ok(None),
            Err(source) => {
                return Err(PreviewError::InvalidPattern {
                    key,
                    label: field.label.clone(),
                    source,
                });
            }
        };
        Ok(Some(PreviewEntry {
            value: widget.initial_value(),
            key,
            label: field.label.clone(),
            name: field.name.clone(),
            group: group.map(str::to_string),
            widget,
            rule,
            touched: false,
        }))
    }

    pub fn entries(&self) -> impl Iterator<Item = &PreviewEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    pub fn entry(&self, key: &FieldKey) -> Result<&PreviewEntry, PreviewError> {
        self.entries()
            .find(|e| &e.key == key)
            .ok_or_else(|| PreviewError::UnknownField(key.clone()))
    }

    fn entry_mut(&mut self, key: &FieldKey) -> Result<&mut PreviewEntry, PreviewError> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.entries.iter_mut())
            .find(|e| &e.key == key)
            .ok_or_else(|| PreviewError::UnknownField(key.clone()))
    }

    /// Store a new value and mark the input touched.
    ///
    /// Choice values must be among the widget's choices.
    pub fn set_value(&mut self, key: &FieldKey, value: FieldValue) -> Result<(), PreviewError> {
        let entry = self.entry_mut(key)?;
        let expected = entry.widget.initial_value().type_name();
        if expected != value.type_name() {
            return Err(PreviewError::ValueMismatch {
                key: key.clone(),
                expected,
                actual: value.type_name(),
            });
        }

        if let Some(choices) = entry.widget.choices() {
            let picked: &[String] = match &value {
                FieldValue::Choice(Some(v)) => std::slice::from_ref(v),
                FieldValue::Many(vs) => vs,
                _ => &[],
            };
            if let Some(unknown) = picked
                .iter()
                .find(|v| !choices.iter().any(|c| &c.value == *v))
            {
                return Err(PreviewError::UnknownOption {
                    key: key.clone(),
                    value: unknown.clone(),
                });
            }
        }

        entry.value = value;
        entry.touched = true;
        Ok(())
    }

    /// Check or uncheck one value of a checkbox group.
    pub fn toggle_choice(
        &mut self,
        key: &FieldKey,
        choice: &str,
        checked: bool,
    ) -> Result<(), PreviewError> {
        let mut values = match &self.entry(key)?.value {
            FieldValue::Many(vs) => vs.clone(),
            other => {
                return Err(PreviewError::ValueMismatch {
                    key: key.clone(),
                    expected: "list",
                    actual: other.type_name(),
                });
            }
        };
        values.retain(|v| v != choice);
        if checked {
            values.push(choice.to_string());
        }
        self.set_value(key, FieldValue::Many(values))
    }

    /// Attach a file name to a file input.
    pub fn add_file(&mut self, key: &FieldKey, file: &str) -> Result<(), PreviewError> {
        let mut files = match &self.entry(key)?.value {
            FieldValue::Files(fs) => fs.clone(),
            other => {
                return Err(PreviewError::ValueMismatch {
                    key: key.clone(),
                    expected: "files",
                    actual: other.type_name(),
                });
            }
        };
        if !file.trim().is_empty() {
            files.push(file.trim().to_string());
        }
        self.set_value(key, FieldValue::Files(files))
    }

    /// Mark an input as interacted with, revealing its error.
    pub fn touch(&mut self, key: &FieldKey) -> Result<(), PreviewError> {
        self.entry_mut(key)?.touched = true;
        Ok(())
    }

    /// Error shown for an input, only once it was touched.
    pub fn error(&self, key: &FieldKey) -> Option<String> {
        self.entry(key)
            .ok()
            .filter(|e| e.touched)
            .and_then(PreviewEntry::validate)
    }

    /// Validate all inputs without touching them.
    pub fn errors(&self) -> Vec<FieldError> {
        self.entries()
            .filter_map(|e| {
                e.validate().map(|message| FieldError {
                    key: e.key.to_string(),
                    label: e.label.clone(),
                    message,
                })
            })
            .collect()
    }

    /// Touch every input and validate the form.
    pub fn submit(&mut self) -> Result<Submission, Vec<FieldError>> {
        for entry in self.sections.iter_mut().flat_map(|s| s.entries.iter_mut()) {
            entry.touched = true;
        }

        let errors = self.errors();
        if !errors.is_empty() {
            debug!("submit rejected with {} errors", errors.len());
            return Err(errors);
        }

        let sections = self
            .sections
            .iter()
            .map(|s| {
                let mut values = Map::new();
                for e in &s.entries {
                    match &e.group {
                        Some(group) => {
                            let nested = values
                                .entry(group.clone())
                                .or_insert_with(|| Value::Object(Map::new()));
                            if let Value::Object(nested) = nested {
                                insert_value(nested, e);
                            }
                        }
                        None => insert_value(&mut values, e),
                    }
                }
                SubmittedSection {
                    name: s.name.clone(),
                    values,
                }
            })
            .collect();

        let submission = Submission {
            form_name: self.form_name.clone(),
            sections,
        };
        info!(
            "form submitted: {}",
            serde_json::to_string(&submission).unwrap_or_default()
        );
        Ok(submission)
    }
}

/// Insert a submitted value under the entry name, suffixing the key of the
/// entry when the name is already used.
fn insert_value(values: &mut Map<String, Value>, entry: &PreviewEntry) {
    let name = if values.contains_key(&entry.name) {
        let unique = format!("{}#{}", entry.name, entry.key);
        warn!("duplicate field name '{}', submitted as '{unique}'", entry.name);
        unique
    } else {
        entry.name.clone()
    };
    values.insert(name, entry.value.to_json());
}

fn widget_for(field: &Field, config: &BuilderConfig) -> Option<Widget> {
    let from_options = || -> Vec<Choice> {
        field
            .options()
            .unwrap_or_default()
            .iter()
            .map(|o| Choice {
                label: o.label.clone(),
                value: o.value.clone(),
            })
            .collect()
    };

    let widget = match field.kind() {
        FieldKind::Text | FieldKind::Phone => Widget::Input {
            input_type: field.input_type().unwrap_or(InputType::Text),
        },
        FieldKind::Dropdown => Widget::Select {
            choices: from_options(),
        },
        FieldKind::Radio => Widget::Radio {
            choices: from_options(),
        },
        FieldKind::Checkbox => Widget::Checkboxes {
            choices: from_options(),
        },
        FieldKind::Country => {
            let own = from_options();
            let choices = if !own.is_empty() {
                own
            } else if let Some(list) = &config.countries {
                list.iter()
                    .map(|c| Choice {
                        label: c.display_name().to_string(),
                        value: c.code.clone(),
                    })
                    .collect()
            } else {
                countries::COUNTRIES
                    .iter()
                    .map(|(code, name)| Choice {
                        label: name.to_string(),
                        value: code.to_string(),
                    })
                    .collect()
            };
            Widget::Select { choices }
        }
        FieldKind::Date => Widget::Date,
        FieldKind::FileUpload => Widget::Files,
        FieldKind::ChildSection => return None,
    };
    Some(widget)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::Country;

    fn sample() -> (FormSchema, SectionId) {
        let mut schema = FormSchema::new("Signup");
        let id = schema.add_section();
        schema.add_field(FieldKind::Text).unwrap();
        schema.add_field(FieldKind::Dropdown).unwrap();
        schema.add_option(id, 1, "Small").unwrap();
        schema.add_option(id, 1, "Large").unwrap();
        schema.add_field(FieldKind::Checkbox).unwrap();
        schema.add_option(id, 2, "News").unwrap();
        (schema, id)
    }

    #[test]
    fn test_initial_values() {
        let (mut schema, _) = sample();
        schema.add_field(FieldKind::Date).unwrap();
        let form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        let values: Vec<_> = form.entries().map(|e| e.value.clone()).collect();
        assert_eq!(
            values,
            vec![
                FieldValue::Text(String::new()),
                FieldValue::Choice(None),
                FieldValue::Many(vec![]),
                FieldValue::Date(String::new()),
            ]
        );
        assert!(form.entries().all(|e| !e.touched));
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let (schema, id) = sample();
        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        let key = FieldKey::new(id, [0]);
        assert_eq!(form.error(&key), None);
        form.touch(&key).unwrap();
        assert_eq!(
            form.error(&key).as_deref(),
            Some("Text Field Label is required.")
        );
        form.set_value(&key, FieldValue::Text("Ada".into())).unwrap();
        assert_eq!(form.error(&key), None);
    }

    #[test]
    fn test_set_value_checks_choices() {
        let (schema, id) = sample();
        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        let key = FieldKey::new(id, [1]);
        assert!(matches!(
            form.set_value(&key, FieldValue::Choice(Some("Huge".into()))),
            Err(PreviewError::UnknownOption { .. })
        ));
        assert!(matches!(
            form.set_value(&key, FieldValue::Text("Small".into())),
            Err(PreviewError::ValueMismatch { .. })
        ));
        form.set_value(&key, FieldValue::Choice(Some("Small".into())))
            .unwrap();
        assert!(form.entry(&key).unwrap().touched);
        assert!(matches!(
            form.set_value(&FieldKey::new(id, [9]), FieldValue::Choice(None)),
            Err(PreviewError::UnknownField(_))
        ));
    }

    #[test]
    fn test_submit() {
        let (schema, id) = sample();
        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();

        let errors = form.submit().unwrap_err();
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Text Field Label is required.",
                "Select Field is required.",
                "At least one Add checkbox label option is required.",
            ]
        );
        assert!(form.entries().all(|e| e.touched));

        form.set_value(&FieldKey::new(id, [0]), FieldValue::Text("Ada".into()))
            .unwrap();
        form.set_value(
            &FieldKey::new(id, [1]),
            FieldValue::Choice(Some("Large".into())),
        )
        .unwrap();
        form.toggle_choice(&FieldKey::new(id, [2]), "News", true)
            .unwrap();

        let submission = form.submit().unwrap();
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "formName": "Signup",
                "sections": [{
                    "name": "Section 1",
                    "values": {"field1": "Ada", "field2": "Large", "field3": ["News"]}
                }]
            })
        );
    }

    #[test]
    fn test_same_names_in_two_sections() {
        let mut schema = FormSchema::default();
        let a = schema.add_section();
        schema.add_field(FieldKind::Text).unwrap();
        let b = schema.add_section();
        schema.add_field(FieldKind::Text).unwrap();

        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        form.set_value(&FieldKey::new(a, [0]), FieldValue::Text("one".into()))
            .unwrap();
        form.set_value(&FieldKey::new(b, [0]), FieldValue::Text("two".into()))
            .unwrap();
        let submission = form.submit().unwrap();
        assert_eq!(submission.sections[0].values["field1"], json!("one"));
        assert_eq!(submission.sections[1].values["field1"], json!("two"));
    }

    #[test]
    fn test_values_survive_field_removal() {
        let mut schema = FormSchema::default();
        let id = schema.add_section();
        schema.add_field(FieldKind::Text).unwrap();
        schema.add_field(FieldKind::Text).unwrap();
        schema.remove_field(id, 0).unwrap();
        schema.add_field(FieldKind::Text).unwrap();

        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        form.set_value(&FieldKey::new(id, [0]), FieldValue::Text("first".into()))
            .unwrap();
        form.set_value(&FieldKey::new(id, [1]), FieldValue::Text("second".into()))
            .unwrap();
        let submission = form.submit().unwrap();
        assert_eq!(
            submission.sections[0].values,
            json!({"field2": "first", "field3": "second"})
                .as_object()
                .unwrap()
                .clone()
        );
    }

    #[test]
    fn test_duplicate_names_keep_both_values() {
        let mut schema = FormSchema::default();
        let id = schema.add_section();
        schema.add_field(FieldKind::Text).unwrap();
        schema.add_field(FieldKind::Text).unwrap();
        let mut f = schema.field(id, 1).unwrap().clone();
        f.name = "field1".into();
        schema.update_field(id, 1, f).unwrap();

        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        form.set_value(&FieldKey::new(id, [0]), FieldValue::Text("a".into()))
            .unwrap();
        form.set_value(&FieldKey::new(id, [1]), FieldValue::Text("b".into()))
            .unwrap();
        let values = form.submit().unwrap().sections.remove(0).values;
        assert_eq!(values.len(), 2);
        assert_eq!(values["field1"], json!("a"));
        assert_eq!(values[&format!("field1#{id}.1")], json!("b"));
    }

    #[test]
    fn test_radio_submit() {
        let mut schema = FormSchema::default();
        let id = schema.add_section();
        schema.add_field(FieldKind::Radio).unwrap();
        schema.add_option(id, 0, "Yes").unwrap();
        schema.add_option(id, 0, "No").unwrap();

        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        let key = FieldKey::new(id, [0]);
        let Widget::Radio { choices } = &form.entry(&key).unwrap().widget else {
            panic!("radio should render as radio group");
        };
        assert_eq!(choices.len(), 2);

        let errors = form.submit().unwrap_err();
        assert_eq!(errors[0].message, "Add label is required.");
        assert!(matches!(
            form.set_value(&key, FieldValue::Choice(Some("Maybe".into()))),
            Err(PreviewError::UnknownOption { .. })
        ));
        form.set_value(&key, FieldValue::Choice(Some("No".into())))
            .unwrap();
        let submission = form.submit().unwrap();
        assert_eq!(submission.sections[0].values["field1"], json!("No"));
    }

    #[test]
    fn test_blank_choice_is_required() {
        let mut schema = FormSchema::default();
        let id = schema.add_section();
        schema.add_field(FieldKind::Dropdown).unwrap();
        schema.add_option(id, 0, "Small").unwrap();
        let mut f = schema.field(id, 0).unwrap().clone();
        if let Some(options) = f.options_mut() {
            options.push(crate::data::field::FieldOption::new(" "));
        }
        schema.update_field(id, 0, f).unwrap();

        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        let key = FieldKey::new(id, [0]);
        form.set_value(&key, FieldValue::Choice(Some(" ".into())))
            .unwrap();
        assert_eq!(
            form.submit().unwrap_err()[0].message,
            "Select Field is required."
        );
    }

    #[test]
    fn test_child_section_fields_are_nested() {
        let mut schema = FormSchema::default();
        let id = schema.add_section();
        schema.add_field(FieldKind::ChildSection).unwrap();
        schema.add_child_field(id, 0).unwrap();

        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        let key = FieldKey::new(id, [0, 0]);
        assert_eq!(key.to_string(), format!("{id}.0.0"));
        assert_eq!(form.entry(&key).unwrap().group.as_deref(), Some("child-1"));
        form.set_value(&key, FieldValue::Text("x".into())).unwrap();

        let submission = form.submit().unwrap();
        assert_eq!(
            submission.sections[0].values["child-1"],
            json!({"field-1": "x"})
        );
    }

    #[test]
    fn test_country_choices() {
        let mut schema = FormSchema::default();
        let id = schema.add_section();
        schema.add_field(FieldKind::Country).unwrap();
        schema.add_field(FieldKind::Country).unwrap();
        schema.add_option(id, 1, "Atlantis").unwrap();

        let form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        let Widget::Select { choices } = &form.entry(&FieldKey::new(id, [0])).unwrap().widget
        else {
            panic!("country should render as select");
        };
        assert_eq!(choices.len(), countries::COUNTRIES.len());
        let Widget::Select { choices } = &form.entry(&FieldKey::new(id, [1])).unwrap().widget
        else {
            panic!("country should render as select");
        };
        assert_eq!(choices[0].value, "Atlantis");

        let config = BuilderConfig {
            countries: Some(vec![Country {
                code: "NL".into(),
                name: "Netherlands".into(),
            }]),
            ..Default::default()
        };
        let form = PreviewForm::build(&schema, &config).unwrap();
        let Widget::Select { choices } = &form.entry(&FieldKey::new(id, [0])).unwrap().widget
        else {
            panic!("country should render as select");
        };
        assert_eq!(
            choices,
            &[Choice {
                label: "Netherlands".into(),
                value: "NL".into()
            }]
        );

        let config = BuilderConfig {
            countries: Some(vec![Country {
                code: "BE".into(),
                name: String::new(),
            }]),
            ..Default::default()
        };
        let form = PreviewForm::build(&schema, &config).unwrap();
        let Widget::Select { choices } = &form.entry(&FieldKey::new(id, [0])).unwrap().widget
        else {
            panic!("country should render as select");
        };
        assert_eq!(choices[0].label, "Belgium");
    }

    #[test]
    fn test_invalid_pattern_fails_build() {
        let mut schema = FormSchema::default();
        let id = schema.add_section();
        schema.add_field(FieldKind::Phone).unwrap();
        let mut f = schema.field(id, 0).unwrap().clone();
        if let crate::data::field::FieldBody::Phone { pattern, .. } = &mut f.body {
            *pattern = "(".into();
        }
        schema.update_field(id, 0, f).unwrap();
        assert!(matches!(
            PreviewForm::build(&schema, &BuilderConfig::default()),
            Err(PreviewError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_files() {
        let mut schema = FormSchema::default();
        let id = schema.add_section();
        schema.add_field(FieldKind::FileUpload).unwrap();
        let mut form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
        let key = FieldKey::new(id, [0]);
        form.add_file(&key, "  ").unwrap();
        assert_eq!(form.error(&key).as_deref(), Some("Upload File is required."));
        form.add_file(&key, "cv.pdf").unwrap();
        assert_eq!(form.error(&key), None);
    }
}
