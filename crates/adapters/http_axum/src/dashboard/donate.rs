//! Donation page.

use askama::Template;
use axum::response::{IntoResponse, Response};

use super::render;

/// Donate page template.
#[derive(Template)]
#[template(path = "donate.html")]
pub struct DonateTemplate;

impl IntoResponse for DonateTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /donate`
pub async fn index() -> DonateTemplate {
    DonateTemplate
}
