//! JSON REST handlers for rescue organizations.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use rescuehub_app::ports::{DogRepository, OrganizationRepository};
use rescuehub_domain::id::OrganizationId;
use rescuehub_domain::organization::Organization;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering an organization.
#[derive(Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub country: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Organization>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Organization>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Organization>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/organizations`
pub async fn list<DR, OR>(
    State(state): State<AppState<DR, OR>>,
) -> Result<ListResponse, ApiError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let organizations = state.organization_service.list_organizations().await?;
    Ok(ListResponse::Ok(Json(organizations)))
}

/// `GET /api/organizations/{id}`
pub async fn get<DR, OR>(
    State(state): State<AppState<DR, OR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let id = OrganizationId::from_str(&id)?;
    let organization = state.organization_service.get_organization(id).await?;
    Ok(GetResponse::Ok(Json(organization)))
}

/// `POST /api/organizations`
pub async fn create<DR, OR>(
    State(state): State<AppState<DR, OR>>,
    Json(req): Json<CreateOrganizationRequest>,
) -> Result<CreateResponse, ApiError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let organization = Organization::builder()
        .name(req.name)
        .country(req.country)
        .active(req.active)
        .build()?;
    let created = state
        .organization_service
        .create_organization(organization)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}
