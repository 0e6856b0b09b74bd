use thiserror::Error;

/// Errors related to companion operations.
#[derive(Debug, Error)]
pub enum CompanionError {
    #[error("companion not found")]
    NotFound,

    #[error("slug '{0}' already exists")]
    SlugConflict(String),

    #[error("invalid user name: {0}")]
    InvalidName(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to guardian operations.
#[derive(Debug, Error)]
pub enum GuardianError {
    #[error("no research has been run for this companion yet")]
    NoFindings,

    #[error("research failed: {0}")]
    ResearchFailed(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in renexus-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}
