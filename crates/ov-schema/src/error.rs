use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("No schema registered under '{0}'")]
    NotFound(String),

    /// One message per violated keyword, in validator order.
    #[error("Instance does not match schema: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// A registered schema failed to compile into a validator.
    #[error("Schema could not be compiled: {0}")]
    Generation(String),
}
