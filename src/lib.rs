#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Signup/login form for the HelpDesk dashboard.
//!
//! [`controller::AuthFormController`] owns the form state and password
//! validation; [`tui`] renders it in the terminal.

pub mod controller;
pub mod diagnostics;
pub mod model;
pub mod tui;
