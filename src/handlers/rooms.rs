// src/handlers/rooms.rs

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use validator::Validate;

use crate::{
    common::{error::AppError, form::AppForm, period::Period},
    config::AppState,
    models::room::{CreateRoomPayload, PeriodQuery, UpdateRoomPayload},
    services::room_service::resolve_period,
    views,
};

// GET /rooms/new
pub async fn new_room_form() -> impl IntoResponse {
    views::rooms::new_room_form()
}

// POST /rooms
pub async fn create_room(
    State(app_state): State<AppState>,
    AppForm(payload): AppForm<CreateRoomPayload>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Validar o payload
    payload.validate()?;

    // 2. Quarto + preços + inquilino inicial (transação)
    let room = app_state.room_service.create_room(&payload).await?;

    Ok(Redirect::to(&format!("/rooms/{}", room.id)))
}

// GET /rooms/{id}/edit
pub async fn edit_room_form(
    State(app_state): State<AppState>,
    Path(room_id): Path<i32>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (room, tariff) = app_state.room_service.room_with_tariff(room_id).await?;

    // Só repassa o período adiante se ele for válido
    let period = query.yyyymm.as_deref().and_then(|s| s.parse::<Period>().ok());
    let period = period.map(|p| p.to_string());

    Ok(views::rooms::edit_room_form(&room, tariff.as_ref(), period.as_deref()))
}

// PUT /rooms/{id}?yyyymm=
pub async fn update_room(
    State(app_state): State<AppState>,
    Path(room_id): Path<i32>,
    Query(query): Query<PeriodQuery>,
    AppForm(payload): AppForm<UpdateRoomPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let period = query.yyyymm
        .as_deref()
        .map(|s| s.trim().parse::<Period>())
        .transpose()?;

    app_state.room_service
        .update_room(room_id, &payload, period)
        .await?;

    let target = match period {
        Some(p) => format!("/rooms/{}?yyyymm={}", room_id, p),
        None => format!("/rooms/{}", room_id),
    };

    Ok(Redirect::to(&target))
}

// GET /rooms/{id}?yyyymm=
pub async fn room_detail(
    State(app_state): State<AppState>,
    Path(room_id): Path<i32>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = resolve_period(query.yyyymm.as_deref());

    let detail = app_state.room_service.room_detail(room_id, period).await?;

    Ok(views::rooms::room_detail(&detail))
}
