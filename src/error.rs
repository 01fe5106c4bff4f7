use std::io;
use thiserror::Error;

/// Everything that can go wrong while handling one input line.
///
/// `UnsupportedCommand` is the expected failure of a mistyped command. The
/// remaining variants are faults from the outside world. Both keep the read
/// loop alive; they differ only in how they are logged.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Command {0} not supported")]
    UnsupportedCommand(String),
    #[error("Unable to open: failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Console error: {0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// True for failures that did not come from user input.
    pub fn is_fault(&self) -> bool {
        !matches!(self, ShellError::UnsupportedCommand(_))
    }
}
