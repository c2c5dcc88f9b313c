use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid target ratio: {ratio}. Expected WIDTH:HEIGHT with positive integers, e.g. 3:4")]
    InvalidRatio { ratio: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Batch finished with {errors} error(s)")]
    BatchFailed { errors: usize },
}
