// src/handlers/home.rs

use axum::{extract::State, response::IntoResponse};

use crate::{common::error::AppError, config::AppState, views};

// GET /
pub async fn list_rooms(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = app_state.room_repo.list_with_active_tenant().await?;

    Ok(views::home::room_list(&rooms))
}
