//! Dialogs used to edit text in place.

use std::sync::Arc;

use cursive::{
    Cursive,
    traits::*,
    views::{Dialog, EditView, LinearLayout, TextView},
};

const INPUT_NAME: &str = "editor_input";

/// Ask for a line of text, calling `on_ok` with the entered value.
///
/// Enter in the input and the Ok button both confirm; Cancel and Esc
/// dismiss without calling `on_ok`.
pub fn show_text_input<F>(siv: &mut Cursive, title: &str, hint: &str, initial: &str, on_ok: F)
where
    F: Fn(&mut Cursive, &str) + Send + Sync + 'static,
{
    let on_ok = Arc::new(on_ok);
    let on_submit = on_ok.clone();

    let edit = EditView::new()
        .content(initial)
        .on_submit(move |s, text| {
            s.pop_layer();
            on_submit(s, text);
        })
        .with_name(INPUT_NAME)
        .min_width(40);

    let mut body = LinearLayout::vertical();
    if !hint.is_empty() {
        body.add_child(TextView::new(hint));
    }
    body.add_child(edit);

    siv.add_layer(
        Dialog::around(body)
            .title(title)
            .button("Ok", move |s| {
                let text = s
                    .call_on_name(INPUT_NAME, |v: &mut EditView| v.get_content())
                    .unwrap_or_default();
                s.pop_layer();
                on_ok(s, text.as_str());
            })
            .dismiss_button("Cancel"),
    );
}

/// Show a message in a dismissable dialog.
pub fn show_message(siv: &mut Cursive, title: &str, message: impl Into<String>) {
    siv.add_layer(
        Dialog::around(TextView::new(message.into()).scrollable())
            .title(title)
            .dismiss_button("Close"),
    );
}
