pub mod chart;
pub mod io;
pub mod output;
pub mod shell;

use thiserror::Error;

use crate::errors::TrackerError;

/// User-facing CLI error wrapper. Domain failures are reported inline and
/// never reach this type; it covers the terminal itself going away.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub use shell::run_cli;
