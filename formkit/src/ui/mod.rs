//! Cursive views and global key handlers of the builder.
//!
//! Every handler mutates the [`AppData`] stored as Cursive user data and
//! then calls [`refresh`], which rebuilds the canvas, the JSON output panel
//! and the status line from the schema.

/// Views making up the builder screen.
pub mod components;

use cursive::{
    Cursive,
    traits::*,
    views::{LinearLayout, Panel, SelectView, TextView},
};

use crate::{
    data::{AppData, EditError, FormSchema},
    preview::{PreviewError, PreviewForm},
    ui::components::{
        canvas::{CanvasRow, canvas_rows, canvas_view},
        editors::show_message,
        palette::palette_view,
        preview::preview_view,
    },
};

pub(crate) const CANVAS_NAME: &str = "canvas";
pub(crate) const OUTPUT_NAME: &str = "output";
pub(crate) const STATUS_NAME: &str = "status";
pub(crate) const PREVIEW_NAME: &str = "preview";

/// The builder screen: palette, canvas and JSON output side by side.
pub fn builder_view(palette_title: &str) -> impl View {
    let columns = LinearLayout::horizontal()
        .child(Panel::new(palette_view()).title(palette_title).fixed_width(26))
        .child(Panel::new(canvas_view()).title("Form Builder").full_width())
        .child(
            Panel::new(TextView::new("").with_name(OUTPUT_NAME).scrollable())
                .title("Output")
                .full_width(),
        );

    LinearLayout::vertical()
        .child(columns.full_height())
        .child(TextView::new("").with_name(STATUS_NAME))
        .full_screen()
}

/// Re-render canvas, output and status from the current schema.
pub fn refresh(siv: &mut Cursive) {
    let Some((rows, json, status)) = siv.with_user_data(|app: &mut AppData| {
        (
            canvas_rows(&app.schema),
            app.schema.debug_json_pretty(),
            app.status_line(),
        )
    }) else {
        return;
    };

    siv.call_on_name(CANVAS_NAME, |v: &mut SelectView<CanvasRow>| {
        let selected = v.selected_id().unwrap_or(0);
        v.clear();
        for (label, row) in rows {
            v.add_item(label, row);
        }
        let last = v.len().saturating_sub(1);
        // The returned callback would fire on_select again.
        let _ = v.set_selection(selected.min(last));
    });
    siv.call_on_name(OUTPUT_NAME, |v: &mut TextView| v.set_content(json));
    siv.call_on_name(STATUS_NAME, |v: &mut TextView| v.set_content(status));
}

/// Run an edit operation on the schema, report failures, then re-render.
pub fn apply<F>(siv: &mut Cursive, op: F)
where
    F: FnOnce(&mut FormSchema) -> Result<(), EditError>,
{
    if let Some(Err(e)) = siv.with_user_data(|app: &mut AppData| op(&mut app.schema)) {
        warn!("edit failed: {e}");
        show_message(siv, "Error", e.to_string());
    }
    refresh(siv);
}

/// Quit the builder.
pub fn handle_quit(siv: &mut Cursive) {
    siv.quit();
}

/// Close the top dialog, or leave the preview.
pub fn handle_back(siv: &mut Cursive) {
    if siv.screen().len() <= 1 {
        return;
    }
    siv.pop_layer();
    if siv.find_name::<LinearLayout>(PREVIEW_NAME).is_none() {
        let _ = siv.with_user_data(|app: &mut AppData| app.preview = None);
    }
    refresh(siv);
}

/// Open the preview, or close it when it is showing.
pub fn handle_preview(siv: &mut Cursive) {
    let showing = siv
        .with_user_data(|app: &mut AppData| app.showing_preview())
        .unwrap_or(false);
    if showing {
        close_preview(siv);
        return;
    }

    let result = siv.with_user_data(
        |app: &mut AppData| -> Result<Option<PreviewForm>, PreviewError> {
            app.toggle_preview()?;
            Ok(app.preview.clone())
        },
    );
    match result {
        Some(Ok(Some(form))) => {
            info!("opening preview of '{}'", form.form_name);
            siv.add_fullscreen_layer(preview_view(&form));
        }
        Some(Err(e)) => {
            warn!("preview failed: {e}");
            show_message(siv, "Preview unavailable", e.to_string());
        }
        _ => {}
    }
}

/// Leave the preview and return to the editor.
pub fn close_preview(siv: &mut Cursive) {
    while siv.find_name::<LinearLayout>(PREVIEW_NAME).is_some() && siv.screen().len() > 1 {
        siv.pop_layer();
    }
    let _ = siv.with_user_data(|app: &mut AppData| app.preview = None);
    refresh(siv);
}
