// src/models/room.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};
use chrono::NaiveDate;

use crate::common::form::empty_string_as_none;
use crate::models::tariff::TariffRates;

// ---
// 1. Room (O "Quarto")
// ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub note: Option<String>,
}

// Linha da listagem da página inicial: quarto + nome do inquilino ativo
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RoomListEntry {
    pub id: i32,
    pub name: String,
    pub note: Option<String>,
    pub tenant: Option<String>,
}

pub(crate) fn validate_not_blank(val: &str) -> Result<(), ValidationError> {
    if val.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Không được để trống.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// 2. Payloads (os "Formulários" HTML)
// ---

// POST /rooms
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub note: Option<String>,

    #[validate(range(min = 0, message = "Không được âm."))]
    pub rent: i32,
    #[validate(range(min = 0, message = "Không được âm."))]
    pub internet_fee: i32,
    #[validate(range(min = 0, message = "Không được âm."))]
    pub cleaning_fee: i32,
    #[validate(range(min = 0, message = "Không được âm."))]
    pub electricity_price: i32,
    #[validate(range(min = 0, message = "Không được âm."))]
    pub water_price: i32,

    // Inquilino inicial (opcional): só é criado se o nome vier preenchido
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tenant_full_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tenant_phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tenant_started_at: Option<NaiveDate>,
}

impl CreateRoomPayload {
    pub fn rates(&self) -> TariffRates {
        TariffRates {
            rent: self.rent,
            internet_fee: self.internet_fee,
            cleaning_fee: self.cleaning_fee,
            electricity_price: self.electricity_price,
            water_price: self.water_price,
        }
    }
}

// PUT /rooms/{id}
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoomPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub note: Option<String>,

    #[validate(range(min = 0, message = "Không được âm."))]
    pub rent: i32,
    #[validate(range(min = 0, message = "Không được âm."))]
    pub internet_fee: i32,
    #[validate(range(min = 0, message = "Không được âm."))]
    pub cleaning_fee: i32,
    #[validate(range(min = 0, message = "Không được âm."))]
    pub electricity_price: i32,
    #[validate(range(min = 0, message = "Không được âm."))]
    pub water_price: i32,
}

impl UpdateRoomPayload {
    pub fn rates(&self) -> TariffRates {
        TariffRates {
            rent: self.rent,
            internet_fee: self.internet_fee,
            cleaning_fee: self.cleaning_fee,
            electricity_price: self.electricity_price,
            water_price: self.water_price,
        }
    }
}

// ?yyyymm=202403 (detalhe do quarto e recálculo após edição)
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub yyyymm: Option<String>,
}
