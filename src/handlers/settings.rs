// src/handlers/settings.rs

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};

use crate::{
    common::{error::AppError, form::AppForm},
    config::AppState,
    models::settings::UpdateSettingsPayload,
    views,
};

// GET /settings
pub async fn get_settings(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = app_state.settings_repo.get_settings().await?;

    Ok(views::settings::settings_form(&settings))
}

// POST /settings
pub async fn update_settings(
    State(app_state): State<AppState>,
    AppForm(payload): AppForm<UpdateSettingsPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state.settings_repo
        .update_settings(&app_state.db_pool, &payload)
        .await?;

    tracing::info!("Dados do proprietário atualizados");

    Ok(Redirect::to("/settings"))
}
