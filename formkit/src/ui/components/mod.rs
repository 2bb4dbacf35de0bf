//! Views making up the builder screen.

/// The schema rendered as a navigable list.
pub mod canvas;

/// Text input and message dialogs.
pub mod editors;

/// The sidebar palette.
pub mod palette;

/// The fillable preview form.
pub mod preview;
