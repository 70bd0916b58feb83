#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use bellhop_api::auth::jwt::JwtConfig;
use bellhop_api::auth::password::hash_password;
use bellhop_api::config::ServerConfig;
use bellhop_api::router::build_app_router;
use bellhop_api::state::AppState;
use bellhop_core::roles::{ROLE_ADMIN, ROLE_STAFF};
use bellhop_core::types::{DbId, HotelId};
use bellhop_core::upload::MAX_UPLOAD_BYTES;
use bellhop_db::models::storeroom::CreateStoreroom;
use bellhop_db::models::user::{CreateUser, User};
use bellhop_db::repositories::{StoreroomRepo, UserRepo};

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        upload_dir,
        upload_max_bytes: MAX_UPLOAD_BYTES,
        jwt: JwtConfig {
            secret: "integration-test-secret-that-is-long-enough".to_string(),
            expiry_hours: 1,
        },
        bootstrap_admin: None,
    }
}

/// Build the full application router, sharing the production middleware
/// stack via [`build_app_router`].
pub async fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_uploads(pool, &std::env::temp_dir().join("bellhop-test-uploads")).await
}

/// Same as [`build_test_app`] with uploads written under `upload_dir`.
pub async fn build_test_app_with_uploads(pool: PgPool, upload_dir: &Path) -> Router {
    let config = test_config(upload_dir.to_path_buf());
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str, role: &str, hotel_id: HotelId) -> User {
    let input = CreateUser {
        username: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        role: role.to_string(),
        hotel_id,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Create a user and log in through the API, returning the access token.
pub async fn token_for(pool: &PgPool, username: &str, role: &str, hotel_id: HotelId) -> String {
    create_user(pool, username, role, hotel_id).await;
    let app = build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login must return an access token")
        .to_string()
}

pub async fn staff_token(pool: &PgPool, username: &str, hotel_id: HotelId) -> String {
    token_for(pool, username, ROLE_STAFF, hotel_id).await
}

pub async fn admin_token(pool: &PgPool, username: &str, hotel_id: HotelId) -> String {
    token_for(pool, username, ROLE_ADMIN, hotel_id).await
}

/// Insert an active storeroom and return its id.
pub async fn create_storeroom(pool: &PgPool, hotel_id: HotelId, name: &str, capacity: i32) -> DbId {
    let input = CreateStoreroom {
        name: name.to_string(),
        location: None,
        capacity,
        is_active: Some(true),
    };
    StoreroomRepo::create(pool, hotel_id, &input)
        .await
        .expect("storeroom creation should succeed")
        .id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should succeed")
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = builder(Method::POST, uri, None)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = builder(Method::POST, uri, Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::POST, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = builder(Method::PUT, uri, Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::DELETE, uri, Some(token)).body(Body::empty()).unwrap()).await
}

/// POST a single-file multipart form under the field name `file`.
pub async fn post_file_auth(
    app: Router,
    uri: &str,
    file_name: &str,
    bytes: &[u8],
    token: &str,
) -> Response<Body> {
    let boundary = "bellhop-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = builder(Method::POST, uri, Some(token))
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}
