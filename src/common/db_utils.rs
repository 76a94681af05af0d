// src/common/db_utils.rs

use crate::common::error::AppError;

// ---
// Helpers de tradução de erros do Postgres
// ---

/// Converte violação de chave única (`rooms.name`) em um erro amigável.
pub(crate) fn map_room_name_conflict(e: sqlx::Error, name: &str) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::RoomNameTaken(name.to_string());
        }
    }
    AppError::DatabaseError(e)
}

/// Violação de FK em `room_id` significa que o quarto não existe.
pub(crate) fn map_missing_room(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return AppError::RoomNotFound;
        }
    }
    AppError::DatabaseError(e)
}
