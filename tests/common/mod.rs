#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use http_body_util::BodyExt;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::ServiceExt;

use rental_manager::{build_app, config::AppState, App};

/// Pool que nunca conecta de verdade. Serve para rotas que falham
/// (validação, parsing) antes de tocar no banco.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("postgres://nobody@127.0.0.1:1/unused")
        .expect("URL de teste válida")
}

pub fn build_test_app(pool: PgPool) -> App {
    build_app(AppState::from_pool(pool))
}

pub async fn get(app: App, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: App, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
