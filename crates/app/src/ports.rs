//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod error_reporter;
pub mod statistics;
pub mod storage;

pub use error_reporter::ErrorReporter;
pub use statistics::StatisticsProvider;
pub use storage::{DogRepository, OrganizationRepository};
