use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::BuilderConfig;
use crate::data::{
    field::{DEFAULT_PHONE_PATTERN, Field, FieldBody, FieldOption},
    palette::PaletteItem,
    section::{Section, SectionId, free_position},
    types::{FieldKind, InputType},
};

/// Form name a fresh schema starts with.
pub const DEFAULT_FORM_NAME: &str = "Form Title";

/// Errors raised by edit operations addressing a missing or unsuitable element.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("no section is selected")]
    NoSectionSelected,
    #[error("section {0} does not exist")]
    SectionNotFound(SectionId),
    #[error("section {section} has no field at index {index}")]
    FieldNotFound { section: SectionId, index: usize },
    #[error("field '{path}' has no option at index {index}")]
    OptionNotFound { path: String, index: usize },
    #[error("child section '{path}' has no field at index {index}")]
    ChildFieldNotFound { path: String, index: usize },
    #[error("field '{path}' is a {kind} field and has no options")]
    NotAChoiceField { path: String, kind: FieldKind },
    #[error("field '{path}' is a {kind} field, not a child section")]
    NotAChildSection { path: String, kind: FieldKind },
    #[error("field '{path}' is a {kind} field, not a phone field")]
    NotAPhoneField { path: String, kind: FieldKind },
    #[error("field '{path}' does not allow input type {input_type:?}")]
    InputTypeNotAllowed { path: String, input_type: InputType },
    #[error("option text must not be empty")]
    EmptyOption,
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// The form being built: an ordered list of sections.
///
/// Serializes to the debug view `{ "formName", "sections" }`.
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    #[serde(rename = "formName")]
    pub form_name: String,
    pub sections: Vec<Section>,
    /// Section new fields are appended to.
    #[serde(skip)]
    pub selected: Option<SectionId>,
    /// Pattern given to newly added phone fields.
    #[serde(skip)]
    pub phone_pattern: String,
    #[serde(skip)]
    next_id: SectionId,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_NAME)
    }
}

impl FormSchema {
    pub fn new(form_name: impl Into<String>) -> Self {
        Self {
            form_name: form_name.into(),
            sections: Vec::new(),
            selected: None,
            phone_pattern: DEFAULT_PHONE_PATTERN.to_string(),
            next_id: 1,
        }
    }

    /// Start an empty form with the configured name and phone pattern.
    pub fn from_config(config: &BuilderConfig) -> Self {
        Self {
            phone_pattern: config.phone_pattern.clone(),
            ..Self::new(config.form_name.clone())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Dispatch a palette selection.
    pub fn on_add_element(&mut self, item: PaletteItem) -> Result<(), EditError> {
        match item {
            PaletteItem::Section => {
                self.add_section();
            }
            PaletteItem::Field(kind) => {
                self.add_field(kind)?;
            }
        }
        Ok(())
    }

    /// Append a section and select it.
    pub fn add_section(&mut self) -> SectionId {
        let id = self.next_id;
        self.next_id += 1;
        let name = format!("Section {}", self.sections.len() + 1);
        debug!("add section {id} '{name}'");
        self.sections.push(Section::new(id, name));
        self.selected = Some(id);
        id
    }

    /// Append a default field of `kind` to the selected section.
    ///
    /// Returns the index of the new field.
    pub fn add_field(&mut self, kind: FieldKind) -> Result<usize, EditError> {
        let id = self.selected.ok_or(EditError::NoSectionSelected)?;
        let phone_pattern = self.phone_pattern.clone();
        let section = self.section_mut(id)?;
        let mut field = Field::new(kind, section.next_position());
        if let FieldBody::Phone { pattern, .. } = &mut field.body {
            *pattern = phone_pattern;
        }
        debug!("add {} field '{}' to section {id}", kind.tag(), field.name);
        section.fields.push(field);
        Ok(section.fields.len() - 1)
    }

    pub fn select_section(&mut self, id: SectionId) -> Result<(), EditError> {
        self.section(id)?;
        self.selected = Some(id);
        Ok(())
    }

    pub fn selected_section(&self) -> Option<&Section> {
        self.selected.and_then(|id| self.section(id).ok())
    }

    /// Rename the form. Blank input keeps the current name.
    pub fn rename_form(&mut self, name: &str) {
        if let Some(name) = non_blank(name) {
            self.form_name = name;
        }
    }

    /// Rename a section. Blank input keeps the current name.
    pub fn rename_section(&mut self, id: SectionId, name: &str) -> Result<(), EditError> {
        let section = self.section_mut(id)?;
        if let Some(name) = non_blank(name) {
            section.name = name;
        }
        Ok(())
    }

    /// Remove a section, clearing the selection when it pointed at it.
    pub fn remove_section(&mut self, id: SectionId) -> Result<Section, EditError> {
        let pos = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or(EditError::SectionNotFound(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(self.sections.remove(pos))
    }

    /// Replace the field at `index` in place.
    pub fn update_field(
        &mut self,
        id: SectionId,
        index: usize,
        field: Field,
    ) -> Result<(), EditError> {
        *self.field_mut(id, index)? = field;
        Ok(())
    }

    /// Set a field label. Blank input keeps the current label.
    pub fn set_field_label(
        &mut self,
        id: SectionId,
        index: usize,
        label: &str,
    ) -> Result<(), EditError> {
        let field = self.field_mut(id, index)?;
        if let Some(label) = non_blank(label) {
            field.label = label;
        }
        Ok(())
    }

    pub fn remove_field(&mut self, id: SectionId, index: usize) -> Result<Field, EditError> {
        let section = self.section_mut(id)?;
        if index >= section.fields.len() {
            return Err(EditError::FieldNotFound { section: id, index });
        }
        Ok(section.fields.remove(index))
    }

    /// Append an option to a choice field.
    pub fn add_option(&mut self, id: SectionId, index: usize, text: &str) -> Result<(), EditError> {
        let text = non_blank(text).ok_or(EditError::EmptyOption)?;
        self.options_mut(id, index)?.push(FieldOption::new(text));
        Ok(())
    }

    /// Replace the text of an existing option. Blank text is rejected.
    pub fn edit_option(
        &mut self,
        id: SectionId,
        index: usize,
        option: usize,
        text: &str,
    ) -> Result<(), EditError> {
        let text = non_blank(text).ok_or(EditError::EmptyOption)?;
        let path = field_path(id, index);
        let options = self.options_mut(id, index)?;
        let slot = options.get_mut(option).ok_or(EditError::OptionNotFound {
            path,
            index: option,
        })?;
        *slot = FieldOption::new(text);
        Ok(())
    }

    pub fn remove_option(
        &mut self,
        id: SectionId,
        index: usize,
        option: usize,
    ) -> Result<FieldOption, EditError> {
        let path = field_path(id, index);
        let options = self.options_mut(id, index)?;
        if option >= options.len() {
            return Err(EditError::OptionNotFound {
                path,
                index: option,
            });
        }
        Ok(options.remove(option))
    }

    /// Change the validation pattern of a phone field.
    ///
    /// An empty pattern accepts any input.
    pub fn set_phone_pattern(
        &mut self,
        id: SectionId,
        index: usize,
        new_pattern: &str,
    ) -> Result<(), EditError> {
        if !new_pattern.is_empty() {
            regex::Regex::new(new_pattern).map_err(|source| EditError::InvalidPattern {
                pattern: new_pattern.to_string(),
                source,
            })?;
        }
        let path = field_path(id, index);
        let field = self.field_mut(id, index)?;
        let kind = field.kind();
        match &mut field.body {
            FieldBody::Phone { pattern, .. } => {
                *pattern = new_pattern.to_string();
                Ok(())
            }
            _ => Err(EditError::NotAPhoneField { path, kind }),
        }
    }

    /// Switch the input sub-type of a text field to one of its allowed types.
    pub fn set_input_type(
        &mut self,
        id: SectionId,
        index: usize,
        new_type: InputType,
    ) -> Result<(), EditError> {
        let path = field_path(id, index);
        let field = self.field_mut(id, index)?;
        match &mut field.body {
            FieldBody::Text {
                allowed_types,
                input_type,
            } if allowed_types.contains(&new_type) => {
                *input_type = new_type;
                Ok(())
            }
            _ => Err(EditError::InputTypeNotAllowed {
                path,
                input_type: new_type,
            }),
        }
    }

    /// Append a text field to a child section. Returns its index.
    pub fn add_child_field(&mut self, id: SectionId, index: usize) -> Result<usize, EditError> {
        let children = self.children_mut(id, index)?;
        children.push(Field::nested_text(free_position(children)));
        Ok(children.len() - 1)
    }

    pub fn set_child_field_label(
        &mut self,
        id: SectionId,
        index: usize,
        child: usize,
        label: &str,
    ) -> Result<(), EditError> {
        let path = field_path(id, index);
        let children = self.children_mut(id, index)?;
        let field = children
            .get_mut(child)
            .ok_or(EditError::ChildFieldNotFound { path, index: child })?;
        if let Some(label) = non_blank(label) {
            field.label = label;
        }
        Ok(())
    }

    pub fn remove_child_field(
        &mut self,
        id: SectionId,
        index: usize,
        child: usize,
    ) -> Result<Field, EditError> {
        let path = field_path(id, index);
        let children = self.children_mut(id, index)?;
        if child >= children.len() {
            return Err(EditError::ChildFieldNotFound { path, index: child });
        }
        Ok(children.remove(child))
    }

    /// Emit a child section on its own and return its JSON.
    pub fn submit_child_section(&self, id: SectionId, index: usize) -> Result<Value, EditError> {
        let field = self.field(id, index)?;
        if field.children().is_none() {
            return Err(EditError::NotAChildSection {
                path: field_path(id, index),
                kind: field.kind(),
            });
        }
        let value = serde_json::to_value(field).unwrap_or(Value::Null);
        info!("Submitted child section: {value}");
        Ok(value)
    }

    /// The debug view of the whole form.
    pub fn debug_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn debug_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn section(&self, id: SectionId) -> Result<&Section, EditError> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .ok_or(EditError::SectionNotFound(id))
    }

    pub fn section_mut(&mut self, id: SectionId) -> Result<&mut Section, EditError> {
        self.sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(EditError::SectionNotFound(id))
    }

    pub fn field(&self, id: SectionId, index: usize) -> Result<&Field, EditError> {
        self.section(id)?
            .fields
            .get(index)
            .ok_or(EditError::FieldNotFound { section: id, index })
    }

    pub fn field_mut(&mut self, id: SectionId, index: usize) -> Result<&mut Field, EditError> {
        self.section_mut(id)?
            .fields
            .get_mut(index)
            .ok_or(EditError::FieldNotFound { section: id, index })
    }

    fn options_mut(
        &mut self,
        id: SectionId,
        index: usize,
    ) -> Result<&mut Vec<FieldOption>, EditError> {
        let field = self.field_mut(id, index)?;
        let kind = field.kind();
        field.options_mut().ok_or(EditError::NotAChoiceField {
            path: field_path(id, index),
            kind,
        })
    }

    fn children_mut(&mut self, id: SectionId, index: usize) -> Result<&mut Vec<Field>, EditError> {
        let field = self.field_mut(id, index)?;
        let kind = field.kind();
        field.children_mut().ok_or(EditError::NotAChildSection {
            path: field_path(id, index),
            kind,
        })
    }
}

fn field_path(id: SectionId, index: usize) -> String {
    format!("{id}.{index}")
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn schema_with_section() -> (FormSchema, SectionId) {
        let mut schema = FormSchema::default();
        let id = schema.add_section();
        (schema, id)
    }

    #[test]
    fn test_add_field_requires_selection() {
        let mut schema = FormSchema::default();
        assert!(matches!(
            schema.add_field(FieldKind::Text),
            Err(EditError::NoSectionSelected)
        ));
        assert!(schema.is_empty());
    }

    #[test]
    fn test_add_section_selects_it() {
        let mut schema = FormSchema::default();
        let a = schema.add_section();
        let b = schema.add_section();
        assert_ne!(a, b);
        assert_eq!(schema.selected, Some(b));
        assert_eq!(schema.sections[1].name, "Section 2");

        schema.add_field(FieldKind::Date).unwrap();
        assert!(schema.section(a).unwrap().fields.is_empty());
        assert_eq!(schema.section(b).unwrap().fields.len(), 1);
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut schema = FormSchema::default();
        let a = schema.add_section();
        let _b = schema.add_section();
        schema.remove_section(a).unwrap();
        let c = schema.add_section();
        let ids: Vec<_> = schema.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(schema.section(c).unwrap().name, "Section 2");
    }

    #[test]
    fn test_remove_selected_section_clears_selection() {
        let mut schema = FormSchema::default();
        let a = schema.add_section();
        let b = schema.add_section();
        schema.select_section(a).unwrap();
        schema.remove_section(b).unwrap();
        assert_eq!(schema.selected, Some(a));
        schema.remove_section(a).unwrap();
        assert_eq!(schema.selected, None);
        assert!(matches!(
            schema.remove_section(a),
            Err(EditError::SectionNotFound(_))
        ));
    }

    #[test]
    fn test_field_positions() {
        let (mut schema, id) = schema_with_section();
        schema.add_field(FieldKind::Text).unwrap();
        schema.add_field(FieldKind::Radio).unwrap();
        schema.add_field(FieldKind::ChildSection).unwrap();
        let names: Vec<_> = schema
            .section(id)
            .unwrap()
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["field1", "field2", "child-3"]);
    }

    #[test]
    fn test_blank_rename_keeps_value() {
        let (mut schema, id) = schema_with_section();
        schema.add_field(FieldKind::Text).unwrap();

        schema.rename_form("  ");
        assert_eq!(schema.form_name, DEFAULT_FORM_NAME);
        schema.rename_form("Signup");
        assert_eq!(schema.form_name, "Signup");

        schema.rename_section(id, "").unwrap();
        assert_eq!(schema.section(id).unwrap().name, "Section 1");
        schema.rename_section(id, "Contact").unwrap();
        assert_eq!(schema.section(id).unwrap().name, "Contact");

        schema.set_field_label(id, 0, "").unwrap();
        assert_eq!(schema.field(id, 0).unwrap().label, "Text Field Label");
        schema.set_field_label(id, 0, "Full name").unwrap();
        assert_eq!(schema.field(id, 0).unwrap().label, "Full name");
    }

    #[test]
    fn test_update_and_remove_field() {
        let (mut schema, id) = schema_with_section();
        schema.add_field(FieldKind::Text).unwrap();
        schema.add_field(FieldKind::Date).unwrap();

        let mut f = schema.field(id, 1).unwrap().clone();
        f.label = "Birthday".into();
        schema.update_field(id, 1, f).unwrap();
        assert_eq!(schema.field(id, 1).unwrap().label, "Birthday");

        let removed = schema.remove_field(id, 0).unwrap();
        assert_eq!(removed.kind(), FieldKind::Text);
        assert_eq!(schema.field(id, 0).unwrap().label, "Birthday");
        assert!(matches!(
            schema.remove_field(id, 5),
            Err(EditError::FieldNotFound { index: 5, .. })
        ));
    }

    #[test]
    fn test_options() {
        let (mut schema, id) = schema_with_section();
        schema.add_field(FieldKind::Checkbox).unwrap();
        schema.add_field(FieldKind::Date).unwrap();

        assert!(matches!(
            schema.add_option(id, 0, ""),
            Err(EditError::EmptyOption)
        ));
        schema.add_option(id, 0, "Red").unwrap();
        schema.add_option(id, 0, "Green").unwrap();
        schema.edit_option(id, 0, 1, "Blue").unwrap();
        assert_eq!(
            schema.field(id, 0).unwrap().options().unwrap(),
            &[FieldOption::new("Red"), FieldOption::new("Blue")]
        );

        schema.remove_option(id, 0, 0).unwrap();
        assert_eq!(schema.field(id, 0).unwrap().options().unwrap().len(), 1);
        assert!(matches!(
            schema.remove_option(id, 0, 3),
            Err(EditError::OptionNotFound { index: 3, .. })
        ));
        assert!(matches!(
            schema.add_option(id, 1, "x"),
            Err(EditError::NotAChoiceField {
                kind: FieldKind::Date,
                ..
            })
        ));
    }

    #[test]
    fn test_blank_options_rejected() {
        let (mut schema, id) = schema_with_section();
        schema.add_field(FieldKind::Dropdown).unwrap();

        assert!(matches!(
            schema.add_option(id, 0, "   "),
            Err(EditError::EmptyOption)
        ));
        schema.add_option(id, 0, "Small").unwrap();
        assert!(matches!(
            schema.edit_option(id, 0, 0, ""),
            Err(EditError::EmptyOption)
        ));
        assert!(matches!(
            schema.edit_option(id, 0, 0, " \t"),
            Err(EditError::EmptyOption)
        ));
        assert_eq!(
            schema.field(id, 0).unwrap().options().unwrap(),
            &[FieldOption::new("Small")]
        );
    }

    #[test]
    fn test_names_stay_unique_after_removal() {
        let (mut schema, id) = schema_with_section();
        schema.add_field(FieldKind::Text).unwrap();
        schema.add_field(FieldKind::Text).unwrap();
        schema.remove_field(id, 0).unwrap();
        schema.add_field(FieldKind::Text).unwrap();
        schema.add_field(FieldKind::ChildSection).unwrap();

        let names: Vec<_> = schema
            .section(id)
            .unwrap()
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["field2", "field3", "child-4"]);

        schema.add_child_field(id, 2).unwrap();
        schema.add_child_field(id, 2).unwrap();
        schema.remove_child_field(id, 2, 0).unwrap();
        schema.add_child_field(id, 2).unwrap();
        let children: Vec<_> = schema
            .field(id, 2)
            .unwrap()
            .children()
            .unwrap()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(children, ["field-2", "field-3"]);
    }

    #[test]
    fn test_phone_pattern() {
        let (mut schema, id) = schema_with_section();
        schema.add_field(FieldKind::Phone).unwrap();
        schema.add_field(FieldKind::Text).unwrap();

        schema.set_phone_pattern(id, 0, r"^\d{3}$").unwrap();
        assert_eq!(schema.field(id, 0).unwrap().pattern(), Some(r"^\d{3}$"));
        assert!(matches!(
            schema.set_phone_pattern(id, 0, "("),
            Err(EditError::InvalidPattern { .. })
        ));
        assert_eq!(schema.field(id, 0).unwrap().pattern(), Some(r"^\d{3}$"));
        assert!(matches!(
            schema.set_phone_pattern(id, 1, ".*"),
            Err(EditError::NotAPhoneField { .. })
        ));
    }

    #[test]
    fn test_input_type() {
        let (mut schema, id) = schema_with_section();
        schema.add_field(FieldKind::Text).unwrap();
        schema.set_input_type(id, 0, InputType::Email).unwrap();
        assert_eq!(
            schema.field(id, 0).unwrap().input_type(),
            Some(InputType::Email)
        );
        assert!(schema.set_input_type(id, 0, InputType::Tel).is_err());
    }

    #[test]
    fn test_child_section() {
        let (mut schema, id) = schema_with_section();
        schema.add_field(FieldKind::ChildSection).unwrap();
        schema.add_field(FieldKind::Text).unwrap();

        assert_eq!(schema.add_child_field(id, 0).unwrap(), 0);
        assert_eq!(schema.add_child_field(id, 0).unwrap(), 1);
        schema.set_child_field_label(id, 0, 1, "Street").unwrap();
        let children = schema.field(id, 0).unwrap().children().unwrap();
        assert_eq!(children[0].label, "Field 1");
        assert_eq!(children[1].label, "Street");
        assert_eq!(children[1].name, "field-2");

        schema.remove_child_field(id, 0, 0).unwrap();
        let submitted = schema.submit_child_section(id, 0).unwrap();
        assert_eq!(submitted["fields"].as_array().unwrap().len(), 1);

        assert!(matches!(
            schema.add_child_field(id, 1),
            Err(EditError::NotAChildSection { .. })
        ));
        assert!(schema.submit_child_section(id, 1).is_err());
    }

    #[test]
    fn test_palette_dispatch() {
        let mut schema = FormSchema::default();
        assert!(schema
            .on_add_element(PaletteItem::Field(FieldKind::Text))
            .is_err());
        schema.on_add_element(PaletteItem::Section).unwrap();
        schema
            .on_add_element(PaletteItem::Field(FieldKind::Country))
            .unwrap();
        assert_eq!(schema.sections[0].fields[0].kind(), FieldKind::Country);
    }

    #[test]
    fn test_configured_phone_pattern() {
        let config = BuilderConfig {
            form_name: "Intake".into(),
            phone_pattern: r"^\d+$".into(),
            ..Default::default()
        };
        let mut schema = FormSchema::from_config(&config);
        assert_eq!(schema.form_name, "Intake");
        schema.add_section();
        schema.add_field(FieldKind::Phone).unwrap();
        assert_eq!(schema.sections[0].fields[0].pattern(), Some(r"^\d+$"));
    }

    #[test]
    fn test_debug_json() {
        let (mut schema, _) = schema_with_section();
        schema.add_field(FieldKind::FileUpload).unwrap();
        assert_eq!(
            schema.debug_json(),
            json!({
                "formName": "Form Title",
                "sections": [{
                    "id": 1,
                    "name": "Section 1",
                    "fields": [{"label": "Upload File", "name": "field1", "type": "fileupload"}]
                }]
            })
        );
    }
}
