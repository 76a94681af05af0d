// src/models/tenant.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::common::form::empty_string_as_none;
use crate::models::room::validate_not_blank;

// Inquilino (morador) de um quarto.
// `ended_at = None` significa que ele ainda ocupa o quarto.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    pub id: i32,
    pub room_id: i32,
    pub full_name: String,
    pub phone: Option<String>,
    pub started_at: Option<NaiveDate>,
    pub ended_at: Option<NaiveDate>,
}

impl Tenant {
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }
}

// POST /rooms/{id}/tenant
#[derive(Debug, Deserialize, Validate)]
pub struct StartTenantPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub full_name: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub started_at: Option<NaiveDate>,
}
