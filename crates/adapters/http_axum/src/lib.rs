//! # rescuehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the client-side dashboard and other consumers
//!   (`/api/statistics`, `/api/dogs`, `/api/organizations`, …)
//! - Serve **server-side-rendered HTML pages** that work with **zero
//!   JavaScript**: the landing page with its hero section, the dogs listing,
//!   dog detail pages and the donate page
//! - Apply the configured CORS policy
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS hero
//! The landing page runs the same hero state machine as the WASM dashboard,
//! but to completion on the server: the statistics fetch is awaited before
//! the page is rendered, and "Try again" is a plain link that reloads the page.
//!
//! ## Dependency rule
//! Depends on `rescuehub-app` (for port traits and services) and
//! `rescuehub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod cors;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
