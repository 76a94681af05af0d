// src/lib.rs

use axum::{
    extract::Request,
    routing::{get, post},
    Router,
};
use tower::{
    Layer,
    util::{MapRequest, MapRequestLayer},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod views;

use crate::config::AppState;
use crate::middleware::method_override::method_override;

/// Router completo, já envolvido pelo override de método (`?_method=PUT`).
pub type App = MapRequest<Router, fn(Request) -> Request>;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::list_rooms))
        .route("/health", get(|| async { "OK" }))
        .route("/settings"
               ,get(handlers::settings::get_settings)
               .post(handlers::settings::update_settings)
        )
        .route("/rooms", post(handlers::rooms::create_room))
        .route("/rooms/new", get(handlers::rooms::new_room_form))
        .route("/rooms/{id}"
               ,get(handlers::rooms::room_detail)
               .put(handlers::rooms::update_room)
        )
        .route("/rooms/{id}/edit", get(handlers::rooms::edit_room_form))
        .route("/rooms/{id}/tenant", post(handlers::tenants::start_tenant))
        .route("/rooms/{id}/tenant/end", post(handlers::tenants::end_tenant))
        .route("/rooms/{id}/meter", post(handlers::meters::save_meter))
        .route("/rooms/{id}/invoice/{yyyymm}", get(handlers::invoices::show_invoice))
        .nest_service("/public", ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub fn build_app(app_state: AppState) -> App {
    MapRequestLayer::new(method_override as fn(Request) -> Request).layer(router(app_state))
}
