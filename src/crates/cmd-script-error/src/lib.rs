use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent the configuration from being loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not a valid document
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors raised by the shell and its commands
#[derive(Debug, Error)]
pub enum ShellError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No registered command carries this name
    #[error("command {0} is not found")]
    CommandNotFound(String),

    /// A command with this name is already registered
    #[error("command {0} is already registered")]
    DuplicateCommand(String),

    /// An OS-provided source is missing or unreadable
    #[error("{resource}: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// The user interrupted the session or input ended
    #[error("interrupted")]
    Interrupted,

    /// I/O error while running a command
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Stable name of the error kind, used as the error log prefix
    pub fn kind(&self) -> &'static str {
        match self {
            ShellError::Config(_) => "ConfigError",
            ShellError::CommandNotFound(_) => "CommandNotFound",
            ShellError::DuplicateCommand(_) => "DuplicateCommand",
            ShellError::ResourceUnavailable { .. } => "ResourceUnavailable",
            ShellError::Interrupted => "Interrupted",
            ShellError::Io(_) => "IoError",
        }
    }
}

/// A specialized Result type for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;
