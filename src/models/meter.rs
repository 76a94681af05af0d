// src/models/meter.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::form::empty_string_as_none;

// Leitura mensal dos medidores de luz e água. Única por (room_id, yyyymm).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MeterReading {
    pub id: i32,
    pub room_id: i32,
    pub yyyymm: String,
    pub elec_start: f64,
    pub elec_end: f64,
    pub water_start: f64,
    pub water_end: f64,
}

impl MeterReading {
    /// Leitura presente e nenhum medidor andou para trás.
    pub fn is_complete(&self) -> bool {
        self.elec_end >= self.elec_start && self.water_end >= self.water_start
    }
}

// POST /rooms/{id}/meter
// Os campos "start" podem vir vazios: nesse caso são preenchidos com o "end" do mês anterior.
#[derive(Debug, Deserialize)]
pub struct SaveMeterPayload {
    pub yyyymm: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub elec_start: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub elec_end: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub water_start: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub water_end: Option<f64>,
}

// Leitura já resolvida (com prefill) e validada, pronta para o upsert
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedReading {
    pub elec_start: f64,
    pub elec_end: f64,
    pub water_start: f64,
    pub water_end: f64,
}

// Valores de abertura sugeridos a partir do fechamento do mês anterior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterPrefill {
    pub elec_start: f64,
    pub water_start: f64,
}

impl From<&MeterReading> for MeterPrefill {
    fn from(prev: &MeterReading) -> Self {
        Self { elec_start: prev.elec_end, water_start: prev.water_end }
    }
}
