//! The preview layer: the schema rendered as a fillable form.

use cursive::{
    Cursive,
    theme::BaseColor,
    traits::*,
    utils::markup::StyledString,
    views::{Button, Checkbox, DummyView, EditView, LinearLayout, Panel, SelectView, TextView},
};

use crate::{
    data::{AppData, types::InputType},
    preview::{FieldKey, FieldValue, PreviewEntry, PreviewError, PreviewForm, Widget},
    ui::{PREVIEW_NAME, close_preview, components::editors::show_message},
};

fn error_name(key: &FieldKey) -> String {
    format!("preview_error_{key}")
}

fn files_name(key: &FieldKey) -> String {
    format!("preview_files_{key}")
}

fn radio_name(key: &FieldKey) -> String {
    format!("preview_radio_{key}")
}

fn radio_label(label: &str, checked: bool) -> String {
    format!("({}) {label}", if checked { '*' } else { ' ' })
}

/// Refill a radio group, marking the picked value.
fn fill_radio(select: &mut SelectView<String>, items: &[(String, String)], picked: Option<&str>) {
    select.clear();
    for (label, value) in items {
        select.add_item(radio_label(label, picked == Some(value.as_str())), value.clone());
    }
}

/// Render a preview form with its Submit and Back buttons.
pub fn preview_view(form: &PreviewForm) -> impl View {
    let mut body = LinearLayout::vertical();

    for section in &form.sections {
        body.add_child(TextView::new(StyledString::styled(
            section.name.clone(),
            BaseColor::Blue.light(),
        )));
        let mut group: Option<&str> = None;
        for entry in &section.entries {
            if entry.group.as_deref() != group {
                group = entry.group.as_deref();
                if let Some(g) = group {
                    body.add_child(TextView::new(format!("  [{g}]")));
                }
            }
            body.add_child(entry_view(entry));
        }
        body.add_child(DummyView);
    }

    if form.sections.is_empty() {
        body.add_child(TextView::new("The form has no sections yet."));
    }

    let buttons = LinearLayout::horizontal()
        .child(Button::new("Submit", on_submit))
        .child(DummyView.fixed_width(2))
        .child(Button::new("Back to Editor", close_preview));

    LinearLayout::vertical()
        .child(
            Panel::new(body.scrollable())
                .title(format!("Form Preview: {}", form.form_name))
                .full_height(),
        )
        .child(buttons)
        .with_name(PREVIEW_NAME)
        .full_screen()
}

fn entry_view(entry: &PreviewEntry) -> LinearLayout {
    let key = entry.key.clone();
    let mut row = LinearLayout::vertical().child(TextView::new(format!("  {}", entry.label)));

    match &entry.widget {
        Widget::Input { input_type } => {
            let hint = match input_type {
                InputType::Number => " (number)",
                InputType::Email => " (email)",
                InputType::Tel => " (phone)",
                InputType::Text => "",
            };
            let k = key.clone();
            row.add_child(
                LinearLayout::horizontal()
                    .child(
                        EditView::new()
                            .on_edit(move |s, text, _| {
                                set_value(s, &k, FieldValue::Text(text.to_string()))
                            })
                            .min_width(30),
                    )
                    .child(TextView::new(hint)),
            );
        }
        Widget::Date => {
            let k = key.clone();
            row.add_child(
                LinearLayout::horizontal()
                    .child(
                        EditView::new()
                            .on_edit(move |s, text, _| {
                                set_value(s, &k, FieldValue::Date(text.to_string()))
                            })
                            .min_width(12),
                    )
                    .child(TextView::new(" (YYYY-MM-DD)")),
            );
        }
        Widget::Select { choices } => {
            let k = key.clone();
            let mut select = SelectView::<Option<String>>::new().popup();
            select.add_item(format!("Select {}", entry.label), None);
            for c in choices {
                select.add_item(c.label.clone(), Some(c.value.clone()));
            }
            row.add_child(
                select
                    .on_submit(move |s, v: &Option<String>| {
                        set_value(s, &k, FieldValue::Choice(v.clone()))
                    })
                    .min_width(30),
            );
        }
        Widget::Radio { choices } => {
            if choices.is_empty() {
                row.add_child(TextView::new("    (no options)"));
            } else {
                let k = key.clone();
                let items: Vec<(String, String)> = choices
                    .iter()
                    .map(|c| (c.label.clone(), c.value.clone()))
                    .collect();
                let picked = match &entry.value {
                    FieldValue::Choice(v) => v.clone(),
                    _ => None,
                };
                let mut select = SelectView::<String>::new();
                fill_radio(&mut select, &items, picked.as_deref());
                row.add_child(
                    select
                        .on_submit(move |s, v: &String| {
                            set_value(s, &k, FieldValue::Choice(Some(v.clone())));
                            s.call_on_name(&radio_name(&k), |view: &mut SelectView<String>| {
                                let cursor = view.selected_id().unwrap_or(0);
                                fill_radio(view, &items, Some(v.as_str()));
                                let _ = view.set_selection(cursor);
                            });
                        })
                        .with_name(radio_name(&key)),
                );
            }
        }
        Widget::Checkboxes { choices } => {
            for c in choices {
                let k = key.clone();
                let value = c.value.clone();
                row.add_child(
                    LinearLayout::horizontal()
                        .child(TextView::new("    "))
                        .child(Checkbox::new().on_change(move |s, checked| {
                            let result = s.with_user_data(|app: &mut AppData| {
                                with_preview(app, |p| p.toggle_choice(&k, &value, checked))
                            });
                            report(s, result);
                            update_error(s, &k);
                        }))
                        .child(TextView::new(format!(" {}", c.label))),
                );
            }
            if choices.is_empty() {
                row.add_child(TextView::new("    (no options)"));
            }
        }
        Widget::Files => {
            let k = key.clone();
            row.add_child(
                LinearLayout::horizontal()
                    .child(
                        EditView::new()
                            .on_submit(move |s, text| {
                                let result = s.with_user_data(|app: &mut AppData| {
                                    with_preview(app, |p| p.add_file(&k, text))
                                });
                                report(s, result);
                                update_files(s, &k);
                                update_error(s, &k);
                            })
                            .min_width(30),
                    )
                    .child(TextView::new(" (Enter attaches a file)")),
            );
            row.add_child(TextView::new("").with_name(files_name(&key)));
        }
    }

    row.add_child(TextView::new("").with_name(error_name(&key)));
    row
}

fn with_preview<R>(
    app: &mut AppData,
    f: impl FnOnce(&mut PreviewForm) -> Result<R, PreviewError>,
) -> Option<Result<R, PreviewError>> {
    app.preview.as_mut().map(f)
}

fn report<R>(siv: &mut Cursive, result: Option<Option<Result<R, PreviewError>>>) {
    if let Some(Some(Err(e))) = result {
        warn!("{e}");
        show_message(siv, "Error", e.to_string());
    }
}

fn set_value(siv: &mut Cursive, key: &FieldKey, value: FieldValue) {
    let result =
        siv.with_user_data(|app: &mut AppData| with_preview(app, |p| p.set_value(key, value)));
    report(siv, result);
    update_error(siv, key);
}

fn update_error(siv: &mut Cursive, key: &FieldKey) {
    let message = siv
        .with_user_data(|app: &mut AppData| app.preview.as_ref().and_then(|p| p.error(key)))
        .flatten()
        .unwrap_or_default();
    siv.call_on_name(&error_name(key), |v: &mut TextView| {
        v.set_content(StyledString::styled(
            format!("    {message}"),
            BaseColor::Red.dark(),
        ));
    });
}

fn update_files(siv: &mut Cursive, key: &FieldKey) {
    let files = siv
        .with_user_data(|app: &mut AppData| {
            app.preview
                .as_ref()
                .and_then(|p| p.entry(key).ok())
                .map(|e| e.value.clone())
        })
        .flatten();
    if let Some(FieldValue::Files(files)) = files {
        siv.call_on_name(&files_name(key), |v: &mut TextView| {
            v.set_content(format!("    {}", files.join(", ")));
        });
    }
}

fn on_submit(siv: &mut Cursive) {
    let Some(Some((result, keys))) = siv.with_user_data(|app: &mut AppData| {
        let preview = app.preview.as_mut()?;
        let result = preview.submit();
        let keys: Vec<FieldKey> = preview.entries().map(|e| e.key.clone()).collect();
        if let Ok(submission) = &result {
            app.last_submission = Some(submission.clone());
        }
        Some((result, keys))
    }) else {
        return;
    };

    for key in &keys {
        update_error(siv, key);
    }

    match result {
        Ok(submission) => show_message(
            siv,
            "Submitted",
            serde_json::to_string_pretty(&submission).unwrap_or_default(),
        ),
        Err(errors) => show_message(
            siv,
            "Please fix the form",
            errors
                .iter()
                .map(|e| format!("- {}", e.message))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    }
}
