use std::fmt;

use crate::data::types::FieldKind;

/// An entry of the sidebar palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteItem {
    /// Append a field of this kind to the selected section.
    Field(FieldKind),
    /// Append a new section.
    Section,
}

impl PaletteItem {
    /// Sidebar entries, top to bottom.
    pub const ALL: [PaletteItem; 10] = [
        PaletteItem::Field(FieldKind::Text),
        PaletteItem::Field(FieldKind::Dropdown),
        PaletteItem::Field(FieldKind::Radio),
        PaletteItem::Field(FieldKind::FileUpload),
        PaletteItem::Field(FieldKind::Checkbox),
        PaletteItem::Field(FieldKind::Country),
        PaletteItem::Field(FieldKind::Date),
        PaletteItem::Field(FieldKind::Phone),
        PaletteItem::Field(FieldKind::ChildSection),
        PaletteItem::Section,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaletteItem::Field(FieldKind::Text) => "Text Field",
            PaletteItem::Field(FieldKind::Dropdown) => "Dropdown",
            PaletteItem::Field(FieldKind::Radio) => "Radio Button",
            PaletteItem::Field(FieldKind::FileUpload) => "File Upload",
            PaletteItem::Field(FieldKind::Checkbox) => "Checkbox",
            PaletteItem::Field(FieldKind::Country) => "Country",
            PaletteItem::Field(FieldKind::Date) => "Date Picker",
            PaletteItem::Field(FieldKind::Phone) => "Phone Number",
            PaletteItem::Field(FieldKind::ChildSection) => "Child Section",
            PaletteItem::Section => "Section",
        }
    }

    /// Selection event tag emitted by the sidebar.
    pub fn tag(self) -> &'static str {
        match self {
            PaletteItem::Field(FieldKind::Text) => "text",
            PaletteItem::Field(FieldKind::Dropdown) => "dropdown",
            PaletteItem::Field(FieldKind::Radio) => "radio",
            PaletteItem::Field(FieldKind::FileUpload) => "fileupload",
            PaletteItem::Field(FieldKind::Checkbox) => "checkbox",
            PaletteItem::Field(FieldKind::Country) => "country",
            PaletteItem::Field(FieldKind::Date) => "datepicker",
            PaletteItem::Field(FieldKind::Phone) => "phone",
            PaletteItem::Field(FieldKind::ChildSection) => "childsection",
            PaletteItem::Section => "section",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.tag() == tag)
    }
}

impl fmt::Display for PaletteItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
