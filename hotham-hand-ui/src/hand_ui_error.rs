use thiserror::Error;

/// Errors that can occur while setting up hand UI
#[derive(Error, Debug)]
pub enum HandUiError {
    /// No hand tracking source was supplied
    #[error("There is no hand tracking source to read hands from")]
    MissingHandSource,
    /// The configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// The configuration could not be parsed
    #[error("Unable to parse configuration")]
    ConfigParse(#[from] serde_json::Error),
    /// An IO error
    #[error(transparent)]
    IO(#[from] std::io::Error),
    /// Anything else
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
