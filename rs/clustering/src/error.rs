use thiserror::Error;

/// Errors returned by the clustering engine.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Bad hyperparameters or a dataset the engine cannot fit.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two points (or a point and the fitted centroids) have different dimensions.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Prediction was requested before a successful fit.
    #[error("model is not fitted")]
    NotFitted,
}

pub type Result<T> = std::result::Result<T, Error>;
