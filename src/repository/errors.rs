use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors surfaced by repository operations.
///
/// Storage failures propagate directly to the caller; the repository never
/// retries or suppresses them. Empty query results are values, not errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A pooled connection could not be obtained; storage is unreachable.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] PoolError),
    /// The query reached the database but failed during execution.
    #[error("query failed: {0}")]
    Query(diesel::result::Error),
    /// A query that requires a row found none.
    #[error("not found")]
    NotFound,
    /// A stored value violated a domain constraint during conversion.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound,
            other => Self::Query(other),
        }
    }
}

/// Convenient alias for results returned from repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
