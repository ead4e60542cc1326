//! JSON REST handlers for dogs.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use rescuehub_app::ports::{DogRepository, OrganizationRepository};
use rescuehub_domain::dog::{AdoptionStatus, Dog, PreviewDog};
use rescuehub_domain::id::{DogId, OrganizationId};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u32>,
}

/// Request body for registering a dog.
#[derive(Deserialize)]
pub struct CreateDogRequest {
    pub name: String,
    pub organization_id: String,
    pub slug: Option<String>,
    pub breed: Option<String>,
    pub age_text: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: AdoptionStatus,
}

/// Possible responses from the list and preview endpoints.
pub enum ListResponse {
    Ok(Json<Vec<PreviewDog>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get-by-id endpoint.
pub enum GetResponse {
    Ok(Json<Dog>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get-by-slug endpoint.
pub enum GetPreviewResponse {
    Ok(Json<PreviewDog>),
}

impl IntoResponse for GetPreviewResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Dog>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/dogs?limit=N`
pub async fn list<DR, OR>(
    State(state): State<AppState<DR, OR>>,
    Query(query): Query<LimitQuery>,
) -> Result<ListResponse, ApiError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let dogs = state.dog_service.list_available(query.limit).await?;
    Ok(ListResponse::Ok(Json(dogs)))
}

/// `GET /api/dogs/preview?limit=N`
pub async fn preview<DR, OR>(
    State(state): State<AppState<DR, OR>>,
    Query(query): Query<LimitQuery>,
) -> Result<ListResponse, ApiError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let dogs = state.dog_service.preview(query.limit).await?;
    Ok(ListResponse::Ok(Json(dogs)))
}

/// `GET /api/dogs/{id}`
pub async fn get<DR, OR>(
    State(state): State<AppState<DR, OR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let id = DogId::from_str(&id)?;
    let dog = state.dog_service.get_dog(id).await?;
    Ok(GetResponse::Ok(Json(dog)))
}

/// `GET /api/dogs/slug/{slug}`
pub async fn get_by_slug<DR, OR>(
    State(state): State<AppState<DR, OR>>,
    Path(slug): Path<String>,
) -> Result<GetPreviewResponse, ApiError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let dog = state.dog_service.get_by_slug(&slug).await?;
    Ok(GetPreviewResponse::Ok(Json(dog)))
}

/// `POST /api/dogs`
pub async fn create<DR, OR>(
    State(state): State<AppState<DR, OR>>,
    Json(req): Json<CreateDogRequest>,
) -> Result<CreateResponse, ApiError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let organization_id = OrganizationId::from_str(&req.organization_id)?;

    let mut builder = Dog::builder()
        .name(req.name)
        .organization_id(organization_id)
        .status(req.status);
    if let Some(slug) = req.slug {
        builder = builder.slug(slug);
    }
    if let Some(breed) = req.breed {
        builder = builder.breed(breed);
    }
    if let Some(age_text) = req.age_text {
        builder = builder.age_text(age_text);
    }
    if let Some(image_url) = req.image_url {
        builder = builder.image_url(image_url);
    }

    let dog = builder.build()?;
    let created = state.dog_service.register_dog(dog).await?;
    Ok(CreateResponse::Created(Json(created)))
}
