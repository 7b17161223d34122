//! HTTP-level integration tests for login and the caller-identity endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get, get_auth, post_json, TEST_PASSWORD};
use crm_db::repositories::UserRepo;
use sqlx::PgPool;

async fn login(pool: &PgPool, email: &str, password: &str) -> axum::response::Response {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": email, "password": password });
    post_json(app, "/auth/login", body).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_usable_on_client_routes(pool: PgPool) {
    let user = create_test_user(&pool, "login@example.com").await;

    let response = login(&pool, "Login@Example.com", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["expires_in"], 15 * 60);
    assert_eq!(json["user"]["id"], user.id.to_string());
    assert_eq!(json["user"]["email"], "login@example.com");
    assert!(json["user"].get("password_hash").is_none());

    let token = json["access_token"].as_str().unwrap();
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/client", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_wrong_password_returns_401(pool: PgPool) {
    create_test_user(&pool, "wrongpw@example.com").await;

    let response = login(&pool, "wrongpw@example.com", "incorrect_password").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_unknown_email_returns_401(pool: PgPool) {
    let response = login(&pool, "ghost@example.com", "whatever").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_without_password_field_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "nopassword@example.com" });

    let response = post_json(app, "/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_deactivated_user_returns_403(pool: PgPool) {
    let user = create_test_user(&pool, "inactive@example.com").await;
    assert!(UserRepo::deactivate(&pool, user.id).await.unwrap());

    let response = login(&pool, "inactive@example.com", TEST_PASSWORD).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_caller(pool: PgPool) {
    let user = create_test_user(&pool, "me@example.com").await;
    let token = common::token_for(&user);
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], user.id.to_string());
    assert_eq!(json["email"], "me@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
