use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing numeric argument after -err")]
    MissingErrArgument,

    #[error("Ratio mode requires a target ratio value")]
    MissingRatioValue,

    #[error("Invalid numeric argument: {token}")]
    InvalidNumber { token: String },

    #[error("Values must be positive and finite, got: {value}")]
    InvalidValue { value: f64 },
}
