//! Form data structures and edit operations.
//!
//! - [`app_data`] - Application state shared with the UI
//! - [`field`] - Field descriptors and options
//! - [`palette`] - Sidebar palette entries
//! - [`schema`] - The schema store and its edit operations
//! - [`section`] - Sections grouping fields
//! - [`types`] - Field kinds and input sub-types

/// Application state container.
pub mod app_data;

/// Field descriptors and options.
pub mod field;

/// Sidebar palette entries.
pub mod palette;

/// The schema store and its edit operations.
pub mod schema;

/// Sections grouping fields.
pub mod section;

/// Field kinds and input sub-types.
pub mod types;

pub use app_data::AppData;
pub use schema::{EditError, FormSchema};
