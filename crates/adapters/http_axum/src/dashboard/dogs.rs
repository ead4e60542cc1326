//! Dogs listing and detail pages.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use rescuehub_app::ports::{DogRepository, OrganizationRepository};

use super::{CardView, DashboardError, render};
use crate::state::AppState;

/// Listing page template.
#[derive(Template)]
#[template(path = "dogs.html")]
pub struct DogsTemplate {
    cards: Vec<CardView>,
}

impl IntoResponse for DogsTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// Detail page template.
#[derive(Template)]
#[template(path = "dog_detail.html")]
pub struct DogDetailTemplate {
    card: CardView,
    country: Option<String>,
}

impl IntoResponse for DogDetailTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /dogs`: every available dog, newest first.
pub async fn list<DR, OR>(
    State(state): State<AppState<DR, OR>>,
) -> Result<DogsTemplate, DashboardError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let dogs = state.dog_service.list_available(None).await?;
    let cards = dogs
        .iter()
        .enumerate()
        .map(|(index, dog)| CardView::new(dog, index == 0))
        .collect();
    Ok(DogsTemplate { cards })
}

/// `GET /dogs/{slug}`
pub async fn detail<DR, OR>(
    State(state): State<AppState<DR, OR>>,
    Path(slug): Path<String>,
) -> Result<DogDetailTemplate, DashboardError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let dog = state.dog_service.get_by_slug(&slug).await?;
    Ok(DogDetailTemplate {
        card: CardView::new(&dog, true),
        country: dog.country,
    })
}
