use thiserror::Error;

use geekshelf_client::BggError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Anything the client library reported
    #[error("{0}")]
    Client(#[from] BggError),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid settings
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
