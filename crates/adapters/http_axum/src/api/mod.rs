//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod dogs;
#[allow(clippy::missing_errors_doc)]
pub mod organizations;
#[allow(clippy::missing_errors_doc)]
pub mod statistics;

use axum::Router;
use axum::routing::get;

use rescuehub_app::ports::{DogRepository, OrganizationRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<DR, OR>() -> Router<AppState<DR, OR>>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    Router::new()
        // Statistics
        .route("/statistics", get(statistics::get::<DR, OR>))
        // Dogs
        .route(
            "/dogs",
            get(dogs::list::<DR, OR>).post(dogs::create::<DR, OR>),
        )
        .route("/dogs/preview", get(dogs::preview::<DR, OR>))
        .route("/dogs/slug/{slug}", get(dogs::get_by_slug::<DR, OR>))
        .route("/dogs/{id}", get(dogs::get::<DR, OR>))
        // Organizations
        .route(
            "/organizations",
            get(organizations::list::<DR, OR>).post(organizations::create::<DR, OR>),
        )
        .route("/organizations/{id}", get(organizations::get::<DR, OR>))
}
