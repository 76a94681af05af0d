// src/handlers/tenants.rs

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use validator::Validate;

use crate::{
    common::{error::AppError, form::AppForm},
    config::AppState,
    models::tenant::StartTenantPayload,
};

// POST /rooms/{id}/tenant
pub async fn start_tenant(
    State(app_state): State<AppState>,
    Path(room_id): Path<i32>,
    AppForm(payload): AppForm<StartTenantPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.tenant_service.start_tenant(room_id, &payload).await?;

    Ok(Redirect::to(&format!("/rooms/{}", room_id)))
}

// POST /rooms/{id}/tenant/end
pub async fn end_tenant(
    State(app_state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.tenant_service.end_tenant(room_id).await?;

    Ok(Redirect::to(&format!("/rooms/{}", room_id)))
}
