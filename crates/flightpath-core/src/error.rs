//! Error type for the splitting entry points.

/// Errors surfaced by the public entry points.
///
/// Helpers below the entry points assume validated input and never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlightPathError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl FlightPathError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, FlightPathError>;
