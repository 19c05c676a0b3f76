// momentum-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MomentumError {
    // --- DOMAIN ERRORS (weights, metric names) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing, Templates) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATION ERRORS ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for MomentumError {
    fn from(err: std::io::Error) -> Self {
        MomentumError::Infrastructure(InfrastructureError::Io(err))
    }
}
