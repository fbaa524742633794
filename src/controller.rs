//! Form state container: field edits, mode switching, validation, submission.

use log::debug;
use serde::Serialize;

use crate::model::{FieldUpdate, FormState, UiMode, ValidationError, validate_password};

/// A form accepted for submission, ready to be handed to a diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub mode: UiMode,
    pub form: FormState,
}

/// Owns all state of the signup/login form.
///
/// Every event handler runs synchronously and leaves the controller in a
/// consistent state; there is no other owner of the form data.
#[derive(Debug, Clone, Default)]
pub struct AuthFormController {
    form: FormState,
    mode: UiMode,
    password_visible: bool,
    password_error: Option<ValidationError>,
}

impl AuthFormController {
    /// Creates a controller in [`UiMode::Signup`] with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a field edit. Password edits are revalidated immediately.
    pub fn on_field_change(&mut self, update: FieldUpdate) {
        if let FieldUpdate::PasswordChanged(ref password) = update {
            self.password_error = validate_password(password).err();
        }
        self.form.apply(update);
    }

    /// Flips the accept-terms checkbox.
    pub fn on_checkbox_toggle(&mut self) {
        self.on_field_change(FieldUpdate::TermsToggled);
    }

    /// Flips whether the password is shown in clear text.
    pub fn on_password_visibility_toggle(&mut self) {
        self.password_visible = !self.password_visible;
        debug!("password visibility set to {}", self.password_visible);
    }

    /// Switches between login and signup, discarding everything typed so far.
    ///
    /// Password visibility carries over. The validation error is cleared
    /// along with the password it was computed from.
    pub fn on_mode_switch(&mut self) {
        self.mode = self.mode.toggled();
        self.form = FormState::default();
        self.password_error = None;
        debug!("switched to {} mode", self.mode);
    }

    /// Handles a submit of the form for `mode`.
    ///
    /// Signup submissions need a non-empty password with no validation
    /// error; anything else is dropped without feedback. Login submissions
    /// are never gated.
    pub fn on_submit(&self, mode: UiMode) -> Option<Submission> {
        if mode == UiMode::Signup && !self.can_submit_signup() {
            debug!("signup submission suppressed");
            return None;
        }
        Some(Submission {
            mode,
            form: self.form.clone(),
        })
    }

    /// Returns `true` if a signup submission would be accepted right now.
    pub fn can_submit_signup(&self) -> bool {
        self.password_error.is_none() && !self.form.password.is_empty()
    }

    /// Returns the current form values.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the active mode.
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Returns `true` if the password is shown in clear text.
    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Returns the current password validation error, if any.
    pub fn password_error(&self) -> Option<&ValidationError> {
        self.password_error.as_ref()
    }
}
