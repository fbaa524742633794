/// Errors that can occur while setting up or writing diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError {
    /// An I/O error occurred while opening the log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A submission record could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// A global logger was already installed.
    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}
