use anyhow::anyhow;
use cursive::{Cursive, CursiveExt, event::Key};

use crate::{
    data::AppData,
    ui::{builder_view, handle_back, handle_preview, handle_quit, refresh},
};

/// Run the builder UI until the user quits and return the final state.
///
/// # Errors
///
/// Returns an error when the application state cannot be recovered from
/// the UI after it exits.
pub fn run(app_data: AppData) -> anyhow::Result<AppData> {
    #[cfg(feature = "logging")]
    {
        cursive::logger::init();
        cursive::logger::set_filter_levels_from_env();
    }

    let title = app_data.config.palette_title.clone();
    info!("starting form builder for '{}'", app_data.schema.form_name);

    let mut siv = Cursive::default();
    siv.set_user_data(app_data);

    siv.add_global_callback('q', handle_quit);
    siv.add_global_callback('Q', handle_quit);
    siv.add_global_callback('p', handle_preview);
    siv.add_global_callback('P', handle_preview);
    siv.add_global_callback(Key::Esc, handle_back);
    siv.add_global_callback('~', Cursive::toggle_debug_console);

    siv.add_fullscreen_layer(builder_view(&title));
    refresh(&mut siv);

    siv.run();

    let app = siv
        .take_user_data::<AppData>()
        .ok_or_else(|| anyhow!("form builder state was lost"))?;
    info!(
        "form builder closed with {} section(s)",
        app.schema.sections.len()
    );
    Ok(app)
}
