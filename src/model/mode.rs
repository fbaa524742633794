use std::fmt;

use serde::Serialize;

/// Which of the two forms is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    Login,
    #[default]
    Signup,
}

impl UiMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            UiMode::Login => UiMode::Signup,
            UiMode::Signup => UiMode::Login,
        }
    }

    /// Heading shown above the form.
    pub fn heading(self) -> &'static str {
        match self {
            UiMode::Login => "Login to HelpDesk",
            UiMode::Signup => "Create Your HelpDesk Account",
        }
    }

    /// Label of the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            UiMode::Login => "LOGIN",
            UiMode::Signup => "SIGN UP",
        }
    }

    /// Prompt for switching to the other mode.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            UiMode::Login => "Sign up here",
            UiMode::Signup => "Login here",
        }
    }

    /// Text shown in the design panel next to the form.
    pub fn blurb(self) -> &'static str {
        match self {
            UiMode::Login => "Login to access your HelpDesk dashboard and manage tickets.",
            UiMode::Signup => {
                "Sign up to access the HelpDesk dashboard, track tickets, \
                 and provide support seamlessly."
            }
        }
    }
}

#[mutants::skip]
impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiMode::Login => f.write_str("Login"),
            UiMode::Signup => f.write_str("Signup"),
        }
    }
}
