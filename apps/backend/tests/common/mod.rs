#![allow(dead_code)]

//! Shared support for integration tests.
//!
//! Tests run against a fresh in-memory SQLite database per test. The
//! single-connection pool keeps every query on the same in-memory database
//! for the lifetime of the test.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test::{call_service, read_body, TestRequest};
use actix_web::{test, web, App, Error as ActixError};
use backend::{routes, AppState};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};

/// Connect to a fresh in-memory SQLite database and run migrations.
pub async fn test_state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    AppState::new(db)
}

/// Build an initialized Actix test service on the production routes.
///
/// Return type is `impl Service<...>` so callers don't have to name the
/// opaque service type.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// Read a response body as JSON, regardless of content type.
pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = read_body(resp).await;
    serde_json::from_slice(&body).expect("valid json body")
}

/// A fully valid game create body with the given title.
pub fn game_body(title: &str) -> Value {
    json!({
        "title": title,
        "releaseYear": 1998,
        "platforms": ["PlayStation"],
        "genre": "Stealth",
        "description": "Tactical espionage action.",
        "developer": "Konami",
    })
}

/// A fully valid character create body with the given name.
pub fn character_body(name: &str) -> Value {
    json!({
        "name": name,
        "age": 35,
        "description": "Legendary soldier.",
        "nationality": "American",
        "height": "182 cm",
        "weight": "75 kg",
        "occupations": ["Soldier"],
    })
}

/// Create a game through the API and return the created record.
pub async fn create_game<S>(app: &S, body: &Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = TestRequest::post()
        .uri("/api/v1/games/create")
        .set_json(body)
        .to_request();
    let resp = call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "game create should succeed");
    read_json(resp).await
}

/// Create a character through the API and return the created record.
pub async fn create_character<S>(app: &S, body: &Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = TestRequest::post()
        .uri("/api/v1/characters/create")
        .set_json(body)
        .to_request();
    let resp = call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "character create should succeed");
    read_json(resp).await
}
