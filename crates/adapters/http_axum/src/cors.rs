//! Cross-origin policy for browser clients served from another origin.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS policy resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsSettings {
    /// Exact origins allowed to call the API (`scheme://host[:port]`).
    pub allowed_origins: Vec<String>,
    /// Whether browsers may send cookies and credentials.
    pub allow_credentials: bool,
    /// Strict mode pins methods and headers to an explicit list and caches
    /// preflights for an hour; otherwise requests are mirrored and cached for a day.
    pub strict: bool,
}

const STRICT_MAX_AGE: Duration = Duration::from_secs(3_600);
const RELAXED_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Build the [`CorsLayer`] for `settings`.
///
/// Origins that are not valid header values are skipped with a warning.
#[must_use]
pub fn layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "skipping unusable CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(settings.allow_credentials);

    if settings.strict {
        layer
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::list([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
                header::ORIGIN,
                HeaderName::from_static("x-requested-with"),
                HeaderName::from_static("sentry-trace"),
                HeaderName::from_static("baggage"),
            ]))
            .max_age(STRICT_MAX_AGE)
    } else {
        layer
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .max_age(RELAXED_MAX_AGE)
    }
}
