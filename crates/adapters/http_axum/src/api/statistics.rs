//! JSON REST handler for the landing-page statistics.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use rescuehub_app::ports::{DogRepository, OrganizationRepository};
use rescuehub_domain::statistics::Statistics;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the statistics endpoint.
pub enum GetResponse {
    Ok(Json<Statistics>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/statistics`
pub async fn get<DR, OR>(State(state): State<AppState<DR, OR>>) -> Result<GetResponse, ApiError>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let statistics = state.statistics_service.statistics().await?;
    Ok(GetResponse::Ok(Json(statistics)))
}
