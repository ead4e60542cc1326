//! # rescuehub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `OrganizationRepository`: create, look up and aggregate organizations
//!   - `DogRepository`: create, look up, count and preview dogs
//!   - `StatisticsProvider`: deliver a whole [`Statistics`](rescuehub_domain::statistics::Statistics) value
//!   - `ErrorReporter`: record failures that are hidden from visitors
//! - Define **driving/inbound** use-cases:
//!   - `OrganizationService`, `DogService`, `StatisticsService`
//!   - `HeroController`: runs the hero state machine against the ports
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `rescuehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod hero_controller;
pub mod ports;
pub mod reporting;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
