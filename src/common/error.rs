// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// Nosso tipo de erro. Todo erro de domínio termina aqui e vira status + texto puro.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Không tìm thấy phòng")]
    RoomNotFound,

    #[error("Dữ liệu không hợp lệ")]
    ValidationError(#[from] validator::ValidationErrors),

    // Chỉ số cuối < chỉ số đầu
    #[error("Chỉ số cuối phải >= chỉ số đầu")]
    ReadingDecreased,

    // Chỉ số đầu để trống e não há leitura do mês anterior para preencher
    #[error("Thiếu chỉ số đầu ({0}) và không có chỉ số tháng trước")]
    MissingStartReading(&'static str),

    #[error("Giá trị không hợp lệ cho trường {0}")]
    InvalidNumber(&'static str),

    // Formulário que nem chega a desserializar (campo faltando, número inválido)
    #[error("Biểu mẫu không hợp lệ: {0}")]
    InvalidForm(String),

    #[error("Kỳ không hợp lệ (YYYYMM): {0}")]
    InvalidPeriod(String),

    #[error("Thiếu chỉ số/thông tin đơn giá tháng này")]
    InsufficientData,

    #[error("Tên phòng đã tồn tại: {0}")]
    RoomNameTaken(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RoomNotFound => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::ReadingDecreased
            | AppError::MissingStartReading(_)
            | AppError::InvalidNumber(_)
            | AppError::InvalidForm(_)
            | AppError::InvalidPeriod(_)
            | AppError::InsufficientData => StatusCode::BAD_REQUEST,
            AppError::RoomNameTaken(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            // Lista os campos inválidos, um por linha.
            AppError::ValidationError(ref errors) => {
                let mut lines = vec![self.to_string()];
                for (field, field_errors) in errors.field_errors() {
                    for e in field_errors {
                        let msg = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        lines.push(format!("{}: {}", field, msg));
                    }
                }
                lines.join("\n")
            }

            // Os detalhes ficam no log, o cliente só recebe a mensagem genérica.
            ref e @ (AppError::DatabaseError(_) | AppError::InternalServerError(_)) => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                "Đã xảy ra lỗi không mong muốn.".to_string()
            }

            other => other.to_string(),
        };

        (status, message).into_response()
    }
}
