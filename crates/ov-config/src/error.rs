use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider could not be read or the merged values do not fit
    /// [`crate::OvConfig`].
    #[error("Failed to load ovt configuration: {0}")]
    Figment(#[from] figment::Error),

    /// Loaded fine but a value is unusable (e.g. an empty store path).
    #[error("Config field '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
