//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use portal_api::auth::jwt::{generate_access_token, JwtConfig};
use portal_api::auth::password::hash_password;
use portal_api::config::ServerConfig;
use portal_api::router::build_app_router;
use portal_api::state::AppState;
use portal_core::accounts::DEFAULT_INSTITUTION_DOMAIN;
use portal_core::application::TransitionPolicy;
use portal_core::roles::Role;
use portal_db::models::project::CreateProject;
use portal_db::models::user::{CreateUser, User};
use portal_db::repositories::{ProjectRepo, UserRepo};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults and the given policy.
pub fn test_config_with_policy(transition_policy: TransitionPolicy) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        institution_email_domain: DEFAULT_INSTITUTION_DOMAIN.to_string(),
        transition_policy,
    }
}

pub fn test_config() -> ServerConfig {
    test_config_with_policy(TransitionPolicy::Unrestricted)
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, test_config())
}

pub fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Insert a user directly and return it with a valid bearer token.
pub async fn seed_user(pool: &PgPool, name: &str, email: &str, role: Role) -> (User, String) {
    let input = CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        role,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    let token = token_for(&user);
    (user, token)
}

pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, user.role, &test_config().jwt)
        .expect("token generation should succeed")
}

pub async fn seed_faculty(pool: &PgPool, name: &str) -> (User, String) {
    let email = format!("{}@{DEFAULT_INSTITUTION_DOMAIN}", slug(name));
    seed_user(pool, name, &email, Role::Faculty).await
}

pub async fn seed_student(pool: &PgPool, name: &str) -> (User, String) {
    let email = format!("{}@{DEFAULT_INSTITUTION_DOMAIN}", slug(name));
    seed_user(pool, name, &email, Role::Student).await
}

pub async fn seed_admin(pool: &PgPool) -> (User, String) {
    seed_user(pool, "Root Admin", "root@example.org", Role::Admin).await
}

/// Insert a project with defaults for every optional field.
pub async fn seed_project(pool: &PgPool, faculty_id: i64, title: &str) -> i64 {
    let input = CreateProject {
        title: title.to_string(),
        description: format!("{title} description"),
        domain: None,
        required_skills: None,
        seats_required: None,
        application_deadline: None,
        status: None,
        members: None,
        attachment_urls: None,
    };
    ProjectRepo::create(pool, faculty_id, &input)
        .await
        .expect("project creation should succeed")
        .id
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
