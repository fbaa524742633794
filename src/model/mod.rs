mod form;
mod mode;
mod validation;

pub use form::{FieldUpdate, FormState, REDACTED};
pub use mode::UiMode;
pub use validation::{MIN_PASSWORD_LEN, PASSWORD_SYMBOLS, ValidationError, validate_password};
