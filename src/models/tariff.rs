// src/models/tariff.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Tabela de preços do quarto (1:1 com rooms). Editada no lugar, sem histórico.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tariff {
    pub id: i32,
    pub room_id: i32,
    pub rent: i32,         // Aluguel mensal
    pub internet_fee: i32, // Taxa fixa de internet
    pub cleaning_fee: i32, // Taxa fixa de limpeza
    pub electricity_price: i32, // Preço por kWh
    pub water_price: i32,       // Preço por m³
}

// Valores vindos do formulário, antes de existir uma linha em `tariffs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TariffRates {
    pub rent: i32,
    pub internet_fee: i32,
    pub cleaning_fee: i32,
    pub electricity_price: i32,
    pub water_price: i32,
}
