//! Error types for larder.

use thiserror::Error;

/// Result type alias using larder's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for larder operations.
///
/// The planner functions themselves never fail; errors surface only from
/// boundary validation and serialization.
#[derive(Error, Debug)]
pub enum Error {
    /// A recipe violates a data-model invariant
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// A meal plan violates a data-model invariant
    #[error("Invalid meal plan: {0}")]
    InvalidPlan(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
