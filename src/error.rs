use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    /// A payload field failed validation or could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown calculator '{0}'")]
    UnknownCalculator(String),

    /// The email service rejected or never received a contact submission.
    #[error("Contact delivery failed: {0}")]
    Contact(String),

    #[error("Configuration error for '{field}': {reason}")]
    Config { field: String, reason: String },
}

impl CalcError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CalcError::InvalidInput(message.into())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::InvalidInput(err.to_string())
    }
}
