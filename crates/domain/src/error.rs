//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RescueError`] via `#[from]`.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum RescueError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Failure in a persistence adapter. The source is kept opaque so the
    /// domain never depends on a database crate.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("country must not be empty")]
    EmptyCountry,

    #[error("slug {0:?} is not a valid slug")]
    InvalidSlug(String),

    #[error("slug {0:?} is already taken")]
    DuplicateSlug(String),

    #[error("invalid identifier {0:?}")]
    InvalidId(String),

    #[error("unknown adoption status {0:?}")]
    UnknownStatus(String),
}

/// A lookup did not match any record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
