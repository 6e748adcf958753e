//! Error types for markup construction and rendering.

/// Content that cannot be normalized into renderable leaves.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ContentError {
    /// The value has a shape with no markup meaning (e.g. a JSON object).
    #[error("unsupported content shape: {shape}")]
    Unsupported {
        /// Human readable description of the offending value.
        shape: String,
    },
}

/// Error raised while building or rendering a markup tree.
#[derive(Debug, thiserror::Error)]
pub enum TaggedError {
    /// Malformed tag name or compact shorthand.
    #[error("invalid tag name {name:?}: {reason}")]
    InvalidName {
        /// The name as given by the caller.
        name: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Content normalization failed.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// A deferred producer or list transform failed.
    #[error("producer failed: {0}")]
    Producer(String),
}

impl TaggedError {
    /// Create a producer failure from any message.
    pub fn producer(message: impl Into<String>) -> Self {
        Self::Producer(message.into())
    }

    pub(crate) fn invalid_name(name: &str, reason: &'static str) -> Self {
        Self::InvalidName {
            name: name.to_owned(),
            reason,
        }
    }
}
