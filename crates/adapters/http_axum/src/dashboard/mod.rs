//! Server-side rendered HTML pages (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod dogs;
pub mod donate;
#[allow(clippy::missing_errors_doc)]
pub mod home;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use rescuehub_app::ports::{DogRepository, OrganizationRepository};
use rescuehub_domain::dog::PreviewDog;
use rescuehub_domain::error::RescueError;

use crate::error::classify;
use crate::state::AppState;

/// Build the sub-router for SSR HTML pages.
pub fn routes<DR, OR>() -> Router<AppState<DR, OR>>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<DR, OR>))
        .route("/dogs", get(dogs::list::<DR, OR>))
        .route("/dogs/{slug}", get(dogs::detail::<DR, OR>))
        .route("/donate", get(donate::index))
}

/// A dog card as rendered by the templates.
pub struct CardView {
    pub name: String,
    pub href: String,
    pub image_url: Option<String>,
    pub details: String,
    pub organization_name: String,
    /// `eager` for the prioritized card, `lazy` otherwise.
    pub loading: &'static str,
    /// `high` for the prioritized card, `auto` otherwise.
    pub fetch_priority: &'static str,
    /// Stable identity, emitted as `data-key`.
    pub key: String,
}

impl CardView {
    #[must_use]
    pub fn new(dog: &PreviewDog, priority: bool) -> Self {
        let details = [dog.breed.as_deref(), dog.age_text.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" \u{00B7} ");
        Self {
            name: dog.name.clone(),
            href: dog.href(),
            image_url: dog.image_url.clone(),
            details,
            organization_name: dog.organization_name.clone(),
            loading: if priority { "eager" } else { "lazy" },
            fetch_priority: if priority { "high" } else { "auto" },
            key: dog.id.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Error rendered as an HTML page.
pub struct DashboardError(RescueError);

impl From<RescueError> for DashboardError {
    fn from(err: RescueError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = classify(&self.0);
        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Render a template into an HTML response.
pub(crate) fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render template");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rescuehub_domain::id::DogId;

    fn luna() -> PreviewDog {
        PreviewDog {
            id: DogId::new(),
            name: "Luna".to_string(),
            slug: "luna".to_string(),
            breed: Some("Husky mix".to_string()),
            age_text: Some("2 years".to_string()),
            image_url: None,
            organization_name: "Happy Paws".to_string(),
            country: Some("DE".to_string()),
        }
    }

    #[test]
    fn should_join_breed_and_age() {
        let card = CardView::new(&luna(), false);
        assert_eq!(card.details, "Husky mix \u{00B7} 2 years");
        assert_eq!(card.href, "/dogs/luna");
    }

    #[test]
    fn should_load_prioritized_card_eagerly() {
        let card = CardView::new(&luna(), true);
        assert_eq!(card.loading, "eager");
        assert_eq!(card.fetch_priority, "high");
        assert_eq!(CardView::new(&luna(), false).loading, "lazy");
    }
}
