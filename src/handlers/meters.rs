// src/handlers/meters.rs

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::{
    common::{error::AppError, form::AppForm},
    config::AppState,
    models::meter::SaveMeterPayload,
};

// POST /rooms/{id}/meter
pub async fn save_meter(
    State(app_state): State<AppState>,
    Path(room_id): Path<i32>,
    AppForm(payload): AppForm<SaveMeterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let (period, _reading, _invoice) = app_state.meter_service
        .save_reading(room_id, &payload)
        .await?;

    Ok(Redirect::to(&format!("/rooms/{}?yyyymm={}", room_id, period)))
}
