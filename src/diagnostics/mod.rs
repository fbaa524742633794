//! Diagnostic logging.
//!
//! The terminal belongs to the UI, so log output goes to a file under the
//! XDG data directory instead of stderr.

mod error;
mod logger;

pub use error::DiagnosticsError;
pub use logger::{LOG_FILE_NAME, build_logger, init, init_in, log_submission, submission_record};
