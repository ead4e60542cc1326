//! # rescuehub-domain
//!
//! Pure domain model for the rescuehub dog-rescue website.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Organizations** (rescue groups operating in a country)
//! - Define **Dogs** (adoptable animals listed by an organization) and their
//!   lightweight **preview** projection used by small cards
//! - Define **Statistics** (aggregate counts shown on the landing page)
//! - Define the **hero** section behaviour: the loading / failed / loaded
//!   state machine, preview-card selection and the counter animation curve
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod counter;
pub mod dog;
pub mod hero;
pub mod organization;
pub mod statistics;
