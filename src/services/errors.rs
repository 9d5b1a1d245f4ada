use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

/// Outcome of a rejected service call, one variant per HTTP error class.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed resource (or listing) does not resolve.
    #[error("resource not found")]
    NotFound,

    /// The request body failed validation.
    #[error("invalid request body: {0}")]
    Form(#[from] FormError),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    /// Any storage failure other than a missing row.
    #[error("repository failure: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
