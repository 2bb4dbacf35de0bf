use cursive::{Cursive, traits::*, views::SelectView};

use crate::{
    data::{AppData, palette::PaletteItem},
    ui::refresh,
};

/// Sidebar listing the addable items.
pub fn palette_view() -> impl View {
    SelectView::<PaletteItem>::new()
        .with_all(PaletteItem::ALL.map(|item| (item.label(), item)))
        .on_submit(on_add_element)
        .scrollable()
}

fn on_add_element(siv: &mut Cursive, item: &PaletteItem) {
    let item = *item;
    info!("palette: {}", item.tag());
    let result = siv.with_user_data(|app: &mut AppData| app.schema.on_add_element(item));
    if let Some(Err(e)) = result {
        // Fields need a target section; nothing else can fail here.
        warn!("{e}");
        siv.add_layer(cursive::views::Dialog::info(
            "Add or select a section before adding fields.",
        ));
    }
    refresh(siv);
}
