use thiserror::Error;

/// Errors raised while loading or validating a [`crate::PageConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config: invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config: invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
