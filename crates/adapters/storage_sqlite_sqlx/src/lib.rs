//! # rescuehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `rescuehub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `rescuehub-app` (for port traits) and `rescuehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod dog_repo;
mod error;
mod organization_repo;
mod pool;

pub use dog_repo::SqliteDogRepository;
pub use error::StorageError;
pub use organization_repo::SqliteOrganizationRepository;
pub use pool::{Config, Database};
