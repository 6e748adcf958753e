//! CLI error types.

use tagged_config::ConfigError;
use tagged_markup::TaggedError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Markup(#[from] TaggedError),

    #[error("{0}")]
    Validation(String),
}
