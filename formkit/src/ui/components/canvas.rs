//! The canvas: the schema rendered as a navigable list.

use cursive::{
    Cursive,
    traits::*,
    views::{OnEventView, SelectView},
};

use crate::{
    data::{
        AppData, FormSchema,
        field::Field,
        section::SectionId,
        types::{FieldKind, InputType},
    },
    ui::{
        CANVAS_NAME, apply,
        components::editors::{show_message, show_text_input},
        refresh,
    },
};

/// One line of the canvas and the element it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasRow {
    FormTitle,
    Hint,
    Section(SectionId),
    Field {
        section: SectionId,
        index: usize,
    },
    Option {
        section: SectionId,
        index: usize,
        option: usize,
    },
    CountryHint {
        section: SectionId,
        index: usize,
    },
    ChildField {
        section: SectionId,
        index: usize,
        child: usize,
    },
}

impl CanvasRow {
    /// Section the row belongs to.
    pub fn section(&self) -> Option<SectionId> {
        match *self {
            CanvasRow::FormTitle | CanvasRow::Hint => None,
            CanvasRow::Section(section)
            | CanvasRow::Field { section, .. }
            | CanvasRow::Option { section, .. }
            | CanvasRow::CountryHint { section, .. }
            | CanvasRow::ChildField { section, .. } => Some(section),
        }
    }

    /// Field the row belongs to.
    pub fn field(&self) -> Option<(SectionId, usize)> {
        match *self {
            CanvasRow::Field { section, index }
            | CanvasRow::Option { section, index, .. }
            | CanvasRow::CountryHint { section, index }
            | CanvasRow::ChildField { section, index, .. } => Some((section, index)),
            _ => None,
        }
    }
}

/// Lay out the schema as labelled canvas rows.
pub fn canvas_rows(schema: &FormSchema) -> Vec<(String, CanvasRow)> {
    let mut rows = vec![(format!("# {}", schema.form_name), CanvasRow::FormTitle)];

    if schema.is_empty() {
        rows.push((
            "Pick an item in the palette to start building your form.".to_string(),
            CanvasRow::Hint,
        ));
        return rows;
    }

    for section in &schema.sections {
        let marker = if schema.selected == Some(section.id) {
            '>'
        } else {
            ' '
        };
        rows.push((
            format!("{marker} {}", section.name),
            CanvasRow::Section(section.id),
        ));

        for (index, field) in section.fields.iter().enumerate() {
            rows.push((
                format!("    {}", field_line(field)),
                CanvasRow::Field {
                    section: section.id,
                    index,
                },
            ));

            if let Some(options) = field.options() {
                if options.is_empty() && field.kind() == FieldKind::Country {
                    rows.push((
                        "        (optional, the country list is used when left empty)"
                            .to_string(),
                        CanvasRow::CountryHint {
                            section: section.id,
                            index,
                        },
                    ));
                }
                for (option, o) in options.iter().enumerate() {
                    rows.push((
                        format!("        - {}", o.value),
                        CanvasRow::Option {
                            section: section.id,
                            index,
                            option,
                        },
                    ));
                }
            }

            for (child, f) in field.children().unwrap_or_default().iter().enumerate() {
                rows.push((
                    format!("        | {}", field_line(f)),
                    CanvasRow::ChildField {
                        section: section.id,
                        index,
                        child,
                    },
                ));
            }
        }
    }
    rows
}

fn field_line(field: &Field) -> String {
    let label = if field.label.is_empty() {
        "Field Label"
    } else {
        &field.label
    };
    match field.kind() {
        FieldKind::Text => {
            let input = field.input_type().unwrap_or(InputType::Text);
            format!("{label} [Text: {}]", input_name(input))
        }
        FieldKind::Phone => format!(
            "{label} [Phone: {}]",
            field.pattern().filter(|p| !p.is_empty()).unwrap_or("any")
        ),
        kind => format!("{label} [{kind}]"),
    }
}

fn input_name(input: InputType) -> &'static str {
    match input {
        InputType::Text => "text",
        InputType::Number => "number",
        InputType::Email => "email",
        InputType::Tel => "tel",
    }
}

/// Build the canvas list with its key bindings.
pub fn canvas_view() -> impl View {
    let select = SelectView::<CanvasRow>::new()
        .on_select(on_row_select)
        .on_submit(on_row_submit)
        .with_name(CANVAS_NAME);

    OnEventView::new(select)
        .on_event('d', |s| with_current_row(s, delete_row))
        .on_event('o', |s| with_current_row(s, add_option))
        .on_event('c', |s| with_current_row(s, add_child_field))
        .on_event('s', |s| with_current_row(s, submit_child_section))
        .on_event('t', |s| with_current_row(s, edit_pattern))
        .on_event('i', |s| with_current_row(s, cycle_input_type))
        .scrollable()
}

fn current_row(siv: &mut Cursive) -> Option<CanvasRow> {
    siv.call_on_name(CANVAS_NAME, |v: &mut SelectView<CanvasRow>| v.selection())
        .flatten()
        .map(|row| (*row).clone())
}

fn with_current_row(siv: &mut Cursive, f: fn(&mut Cursive, CanvasRow)) {
    if let Some(row) = current_row(siv) {
        f(siv, row);
    }
}

fn on_row_select(siv: &mut Cursive, row: &CanvasRow) {
    let Some(section) = row.section() else {
        return;
    };
    let changed = siv
        .with_user_data(|app: &mut AppData| select_row_section(&mut app.schema, section))
        .unwrap_or(false);
    if changed {
        refresh(siv);
    }
}

/// Select the section of the focused row. Returns whether the selection moved.
fn select_row_section(schema: &mut FormSchema, section: SectionId) -> bool {
    if schema.selected == Some(section) {
        return false;
    }
    match schema.select_section(section) {
        Ok(()) => true,
        Err(e) => {
            warn!("select failed: {e}");
            false
        }
    }
}

fn on_row_submit(siv: &mut Cursive, row: &CanvasRow) {
    let Some(schema) = siv.with_user_data(|app: &mut AppData| app.schema.clone()) else {
        return;
    };

    match *row {
        CanvasRow::FormTitle => {
            show_text_input(siv, "Form name", "", &schema.form_name, |s, text| {
                apply(s, |schema| {
                    schema.rename_form(text);
                    Ok(())
                });
            });
        }
        CanvasRow::Hint => {}
        CanvasRow::Section(id) => {
            let Ok(section) = schema.section(id) else {
                return;
            };
            show_text_input(siv, "Section name", "", &section.name, move |s, text| {
                apply(s, |schema| schema.rename_section(id, text));
            });
        }
        CanvasRow::Field { section, index } | CanvasRow::CountryHint { section, index } => {
            let Ok(field) = schema.field(section, index) else {
                return;
            };
            show_text_input(siv, "Field label", "", &field.label, move |s, text| {
                apply(s, |schema| schema.set_field_label(section, index, text));
            });
        }
        CanvasRow::Option {
            section,
            index,
            option,
        } => {
            let Some(current) = schema
                .field(section, index)
                .ok()
                .and_then(Field::options)
                .and_then(|o| o.get(option))
            else {
                return;
            };
            show_text_input(siv, "Edit option", "", &current.value, move |s, text| {
                apply(s, |schema| schema.edit_option(section, index, option, text));
            });
        }
        CanvasRow::ChildField {
            section,
            index,
            child,
        } => {
            let Some(current) = schema
                .field(section, index)
                .ok()
                .and_then(Field::children)
                .and_then(|c| c.get(child))
            else {
                return;
            };
            show_text_input(siv, "Field label", "", &current.label, move |s, text| {
                apply(s, |schema| {
                    schema.set_child_field_label(section, index, child, text)
                });
            });
        }
    }
}

fn delete_row(siv: &mut Cursive, row: CanvasRow) {
    match row {
        CanvasRow::FormTitle | CanvasRow::Hint => {}
        CanvasRow::Section(id) => apply(siv, |schema| schema.remove_section(id).map(drop)),
        CanvasRow::Field { section, index } | CanvasRow::CountryHint { section, index } => {
            apply(siv, |schema| schema.remove_field(section, index).map(drop))
        }
        CanvasRow::Option {
            section,
            index,
            option,
        } => apply(siv, |schema| {
            schema.remove_option(section, index, option).map(drop)
        }),
        CanvasRow::ChildField {
            section,
            index,
            child,
        } => apply(siv, |schema| {
            schema.remove_child_field(section, index, child).map(drop)
        }),
    }
}

fn add_option(siv: &mut Cursive, row: CanvasRow) {
    let Some((section, index)) = row.field() else {
        return;
    };
    show_text_input(siv, "New option", "Enter new option", "", move |s, text| {
        apply(s, |schema| schema.add_option(section, index, text));
    });
}

fn add_child_field(siv: &mut Cursive, row: CanvasRow) {
    if let Some((section, index)) = row.field() {
        apply(siv, |schema| schema.add_child_field(section, index).map(drop));
    }
}

fn submit_child_section(siv: &mut Cursive, row: CanvasRow) {
    let Some((section, index)) = row.field() else {
        return;
    };
    let result = siv.with_user_data(|app: &mut AppData| {
        app.schema.submit_child_section(section, index)
    });
    match result {
        Some(Ok(value)) => show_message(
            siv,
            "Child section submitted",
            serde_json::to_string_pretty(&value).unwrap_or_default(),
        ),
        Some(Err(e)) => {
            warn!("{e}");
            show_message(siv, "Error", e.to_string());
        }
        None => {}
    }
}

fn edit_pattern(siv: &mut Cursive, row: CanvasRow) {
    let Some((section, index)) = row.field() else {
        return;
    };
    let current = siv
        .with_user_data(|app: &mut AppData| {
            app.schema
                .field(section, index)
                .ok()
                .and_then(|f| f.pattern().map(str::to_string))
        })
        .flatten();
    let Some(current) = current else {
        show_message(siv, "Error", "Only phone fields carry a pattern.");
        return;
    };
    show_text_input(
        siv,
        "Phone pattern",
        "Regular expression; leave empty to accept anything",
        &current,
        move |s, text| apply(s, |schema| schema.set_phone_pattern(section, index, text)),
    );
}

fn cycle_input_type(siv: &mut Cursive, row: CanvasRow) {
    let Some((section, index)) = row.field() else {
        return;
    };
    apply(siv, |schema| {
        let field = schema.field(section, index)?;
        let next = match field.input_type() {
            Some(InputType::Text) => InputType::Number,
            Some(InputType::Number) => InputType::Email,
            _ => InputType::Text,
        };
        schema.set_input_type(section, index, next)
    });
}
