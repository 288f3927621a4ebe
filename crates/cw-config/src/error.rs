use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed to load or the merged values do not fit [`crate::CosmicConfig`].
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),

    /// Parsed fine but fails validation.
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
