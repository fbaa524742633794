use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Logger, Target};
use log::info;

use super::error::DiagnosticsError;
use crate::controller::Submission;

/// File name of the diagnostic log inside the data directory.
pub const LOG_FILE_NAME: &str = "helpdesk-auth.log";

/// Installs the global logger, writing to `~/.local/share/helpdesk-auth/`.
///
/// Returns the path of the log file. The filter defaults to `info` and can
/// be overridden with `RUST_LOG`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init() -> Result<PathBuf, DiagnosticsError> {
    let data_dir = dirs::data_dir().ok_or(DiagnosticsError::NoDataDir)?;
    init_in(data_dir.join("helpdesk-auth"))
}

/// Installs the global logger, writing to [`LOG_FILE_NAME`] inside `dir`.
///
/// The directory is created if it does not already exist.
pub fn init_in(dir: impl AsRef<Path>) -> Result<PathBuf, DiagnosticsError> {
    let (path, logger) = build_logger(dir.as_ref())?;
    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    info!("logging to {}", path.display());
    Ok(path)
}

/// Builds a logger appending to [`LOG_FILE_NAME`] inside `dir`, without
/// installing it.
pub fn build_logger(dir: &Path) -> Result<(PathBuf, Logger), DiagnosticsError> {
    let (path, file) = open_log_file(dir)?;
    let logger = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .build();
    Ok((path, logger))
}

/// Opens the log file for appending, creating `dir` as needed.
fn open_log_file(dir: &Path) -> Result<(PathBuf, File), DiagnosticsError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Builds the JSON record logged for an accepted submission.
pub fn submission_record(submission: &Submission) -> Result<String, DiagnosticsError> {
    Ok(serde_json::to_string(submission)?)
}

/// Logs an accepted submission at `info` level.
pub fn log_submission(submission: &Submission) -> Result<(), DiagnosticsError> {
    let record = submission_record(submission)?;
    info!("form submitted: {record}");
    Ok(())
}
