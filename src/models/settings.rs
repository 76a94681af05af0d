// src/models/settings.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::form::empty_string_as_none;

// Dados do proprietário impressos na fatura. Registro único (id = 1).
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct LandlordSettings {
    pub id: i32,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
}

// POST /settings
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsPayload {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub owner_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub bank_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub bank_account: Option<String>,
}
