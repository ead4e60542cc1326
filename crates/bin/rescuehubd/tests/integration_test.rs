//! End-to-end smoke tests for the full rescuehubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`: no TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use rescuehub_adapter_http_axum::cors::{self, CorsSettings};
use rescuehub_adapter_http_axum::router;
use rescuehub_adapter_http_axum::state::AppState;
use rescuehub_adapter_storage_sqlite_sqlx::{
    Config, SqliteDogRepository, SqliteOrganizationRepository,
};
use rescuehub_app::services::dog_service::DogService;
use rescuehub_app::services::organization_service::OrganizationService;
use rescuehub_app::services::statistics_service::StatisticsService;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();
    let organization_repo = SqliteOrganizationRepository::new(pool.clone());
    let dog_repo = SqliteDogRepository::new(pool);

    let state = AppState::new(
        OrganizationService::new(organization_repo.clone()),
        DogService::new(dog_repo.clone(), organization_repo.clone()),
        StatisticsService::new(dog_repo, organization_repo),
    );

    router::build(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, text) = send(app, request).await;
    (status, serde_json::from_str(&text).unwrap())
}

async fn create_organization(app: &Router, name: &str, country: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/organizations",
        &json!({ "name": name, "country": country }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_dog(app: &Router, name: &str, organization_id: &str) {
    let (status, _) = post_json(
        app,
        "/api/dogs",
        &json!({
            "name": name,
            "organization_id": organization_id,
            "breed": "Mixed",
            "image_url": format!("https://img.rescuehub.org/{name}.jpg"),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, body) = get(&app().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_zero_statistics_for_empty_catalogue() {
    let (status, body) = get(&app().await, "/api/statistics").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        json!({ "total_dogs": 0, "total_organizations": 0, "countries": [] })
    );
}

#[tokio::test]
async fn should_aggregate_statistics_from_catalogue() {
    let app = app().await;
    let berlin = create_organization(&app, "Happy Paws", "de").await;
    let bucharest = create_organization(&app, "Second Chance", "RO").await;
    create_organization(&app, "Hamburg Tails", "DE").await;
    create_dog(&app, "Luna", &berlin).await;
    create_dog(&app, "Bruno", &bucharest).await;

    let (status, body) = get(&app, "/api/statistics").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["total_dogs"], 2);
    assert_eq!(json["total_organizations"], 3);
    assert_eq!(json["countries"], json!(["DE", "RO"]));
}

#[tokio::test]
async fn should_limit_preview_to_three_dogs_by_default() {
    let app = app().await;
    let org = create_organization(&app, "Happy Paws", "DE").await;
    for name in ["Luna", "Bruno", "Mara", "Fifi", "Oskar"] {
        create_dog(&app, name, &org).await;
    }

    let (_, body) = get(&app, "/api/dogs/preview").await;
    let dogs: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(dogs.len(), 3);

    let (_, body) = get(&app, "/api/dogs/preview?limit=100").await;
    let dogs: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(dogs.len(), 5);

    let (_, body) = get(&app, "/api/dogs").await;
    let dogs: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(dogs.len(), 5);
    assert_eq!(dogs[0]["organization_name"], "Happy Paws");
}

#[tokio::test]
async fn should_reject_dog_for_unknown_organization() {
    let (status, body) = post_json(
        &app().await,
        "/api/dogs",
        &json!({ "name": "Luna", "organization_id": "00000000-0000-0000-0000-000000000000" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Organization"));
}

#[tokio::test]
async fn should_reject_organization_without_name() {
    let (status, body) = post_json(
        &app().await,
        "/api/organizations",
        &json!({ "name": "  ", "country": "DE" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name must not be empty");
}

#[tokio::test]
async fn should_number_slug_of_second_dog_with_same_name() {
    let app = app().await;
    let org = create_organization(&app, "Happy Paws", "DE").await;
    create_dog(&app, "Luna", &org).await;

    let (status, body) = post_json(
        &app,
        "/api/dogs",
        &json!({ "name": "Luna", "organization_id": org }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["slug"], "luna-2");
    let (status, _) = get(&app, "/dogs/luna-2").await;
    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Dashboard (SSR) pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_home_page_with_fallback_link_when_no_dogs() {
    let (status, body) = get(&app().await, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-counter="Dogs Available">0<"#));
    assert!(body.contains("Browse all available dogs"));
    assert!(!body.contains(r#"class="dog-card""#));
    assert!(body.contains(r#"href="/donate""#));
}

#[tokio::test]
async fn should_render_home_page_with_three_preview_cards() {
    let app = app().await;
    let org = create_organization(&app, "Happy Paws", "DE").await;
    for name in ["Luna", "Bruno", "Mara", "Fifi"] {
        create_dog(&app, name, &org).await;
    }

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches(r#"class="dog-card""#).count(), 3);
    assert_eq!(body.matches(r#"fetchpriority="high""#).count(), 1);
    assert!(body.contains(r#"data-counter="Dogs Available">4<"#));
    assert!(body.contains(r#"data-counter="Rescue Organizations">1<"#));
    assert!(body.contains(r#"data-counter="Countries">1<"#));
}

#[tokio::test]
async fn should_render_dogs_page_and_detail() {
    let app = app().await;
    let org = create_organization(&app, "Happy Paws", "DE").await;
    create_dog(&app, "Luna Belle", &org).await;

    let (status, body) = get(&app, "/dogs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Luna Belle"));
    assert!(body.contains(r#"href="/dogs/luna-belle""#));

    let (status, body) = get(&app, "/dogs/luna-belle").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Happy Paws"));
}

#[tokio::test]
async fn should_render_not_found_page_for_unknown_slug() {
    let (status, _) = get(&app().await, "/dogs/nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_answer_preflight_for_allowed_origin() {
    let settings = CorsSettings {
        allowed_origins: vec!["https://rescuehub.org".to_string()],
        allow_credentials: false,
        strict: true,
    };
    let app = app().await.layer(cors::layer(&settings));

    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/statistics")
                .header(header::ORIGIN, "https://rescuehub.org")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://rescuehub.org"
    );
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_MAX_AGE], "3600");
}
