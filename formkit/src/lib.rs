//! # formkit
//!
//! A Cursive-based terminal form builder.
//!
//! A sidebar palette lists the field types, a canvas shows the sections and
//! fields of the form being assembled and lets them be edited in place, and a
//! live preview renders the assembled schema as a fillable, validated form.
//!
//! ## Features
//!
//! - Text, phone, dropdown, radio, checkbox, country, date, file upload and
//!   child section fields
//! - In-place editing of form name, section names, labels, options and
//!   phone patterns
//! - Live debug JSON of the schema next to the canvas
//! - Preview with required, pattern and date validation on submit
//!
//! ## Quick Start
//!
//! ```rust
//! use formkit::{BuilderConfig, FormSchema, data::types::FieldKind, preview::PreviewForm};
//!
//! let mut schema = FormSchema::default();
//! let section = schema.add_section();
//! schema.add_field(FieldKind::Dropdown).unwrap();
//! schema.add_option(section, 0, "Small").unwrap();
//!
//! let form = PreviewForm::build(&schema, &BuilderConfig::default()).unwrap();
//! assert_eq!(form.entries().count(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Builder configuration
//! - [`data`] - Schema store and edit operations
//! - [`preview`] - Preview rendering and validation
//! - [`run`] - TUI application runner
//! - [`ui`] - UI components

#[macro_use]
extern crate log;

/// Builder configuration loaded from TOML.
pub mod config;

/// Form data structures and edit operations.
///
/// This module holds the schema store: sections, fields, options and the
/// operations that mutate them.
pub mod data;

/// Preview rendering, validation and submission.
pub mod preview;

/// TUI application runner.
pub mod run;

/// UI components and key handlers.
pub mod ui;

pub use config::BuilderConfig;
pub use cursive;
pub use data::{AppData, EditError, FormSchema};
pub use run::run;
