use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the program before or outside of gameplay.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("terminal is {width}x{height}, the board needs at least {required_width}x{required_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        required_width: u16,
        required_height: u16,
    },
}
