// src/handlers/invoices.rs

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{common::{error::AppError, period::Period}, config::AppState, views};

// GET /rooms/{id}/invoice/{yyyymm}
// Abrir a fatura recalcula e sobrescreve o registro (UPSERT) a cada visita.
pub async fn show_invoice(
    State(app_state): State<AppState>,
    Path((room_id, yyyymm)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let period: Period = yyyymm.parse()?;

    let view = app_state.billing_service.invoice_view(room_id, period).await?;

    Ok(views::invoice::invoice_page(&view))
}
