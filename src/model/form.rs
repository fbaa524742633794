use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder written in place of the password wherever a form is logged.
pub const REDACTED: &str = "<redacted>";

/// The values the user has entered into the active form.
///
/// The password never leaves this type in clear text through `Debug` or
/// serialization; both print [`REDACTED`] instead.
#[derive(Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub username: String,
    pub email: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    pub accept_terms: bool,
}

fn redact<S: Serializer>(_: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("accept_terms", &self.accept_terms)
            .finish()
    }
}

/// A single change to a [`FormState`] field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    UsernameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    TermsToggled,
}

impl FormState {
    /// Applies `update` to the matching field.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::UsernameChanged(value) => self.username = value,
            FieldUpdate::EmailChanged(value) => self.email = value,
            FieldUpdate::PasswordChanged(value) => self.password = value,
            FieldUpdate::TermsToggled => self.accept_terms = !self.accept_terms,
        }
    }

    /// Returns `true` if every field is empty and terms are not accepted.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
