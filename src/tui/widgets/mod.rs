//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;

pub use form::{FieldKind, FieldRow, FieldValue, Form, FormField, draw_form, form_height};
pub use status_bar::{StatusBarContext, draw_status_bar};
