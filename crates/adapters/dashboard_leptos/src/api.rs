//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use rescuehub_domain::dog::PreviewDog;
use rescuehub_domain::statistics::Statistics;
use serde::Deserialize;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Percent-encode a single path segment.
fn encode_segment(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
        .replace(' ', "%20")
}

fn with_limit(path: &str, limit: Option<u32>) -> String {
    match limit {
        Some(limit) => format!("{path}?limit={limit}"),
        None => path.to_string(),
    }
}

/// Fetch the hero statistics.
pub async fn fetch_statistics() -> Result<Statistics, ApiError> {
    let resp = check_response(Request::get("/api/statistics").send().await?).await?;
    let statistics: Statistics = resp.json().await?;
    Ok(statistics)
}

/// Fetch the dogs shown as hero preview cards. The server picks the default
/// count when `limit` is `None`.
pub async fn fetch_preview_dogs(limit: Option<u32>) -> Result<Vec<PreviewDog>, ApiError> {
    let url = with_limit("/api/dogs/preview", limit);
    let resp = check_response(Request::get(&url).send().await?).await?;
    let dogs: Vec<PreviewDog> = resp.json().await?;
    Ok(dogs)
}

/// Fetch available dogs, newest first.
pub async fn fetch_dogs(limit: Option<u32>) -> Result<Vec<PreviewDog>, ApiError> {
    let url = with_limit("/api/dogs", limit);
    let resp = check_response(Request::get(&url).send().await?).await?;
    let dogs: Vec<PreviewDog> = resp.json().await?;
    Ok(dogs)
}

/// Fetch one dog's card record by slug.
pub async fn fetch_dog_by_slug(slug: &str) -> Result<PreviewDog, ApiError> {
    let url = format!("/api/dogs/slug/{}", encode_segment(slug));
    let resp = check_response(Request::get(&url).send().await?).await?;
    let dog: PreviewDog = resp.json().await?;
    Ok(dog)
}
