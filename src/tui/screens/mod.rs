//! TUI screen implementations.

pub mod auth;
pub mod help;

pub use auth::{AuthState, draw_auth};
pub use help::{HelpState, draw_help};
