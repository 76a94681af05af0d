// src/models/invoice.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::{room::Room, settings::LandlordSettings, tariff::Tariff, tenant::Tenant};

/// Fatura mensal de um quarto, única por (room_id, yyyymm).
///
/// NÃO é um registro contábil imutável: é uma projeção recalculada e sobrescrita
/// toda vez que é aberta (ou quando uma edição dispara o recálculo). Alterar a
/// tabela de preços muda o valor das faturas antigas na próxima visualização.
/// `created_at` é o instante do último cálculo.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub room_id: i32,
    pub yyyymm: String,
    pub subtotal_electricity: i32,
    pub subtotal_water: i32,
    pub rent: i32,
    pub internet_fee: i32,
    pub cleaning_fee: i32,
    pub total: i32,
    pub created_at: NaiveDateTime,
}

// Resultado puro do cálculo, antes de ir para o banco
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceFigures {
    pub elec_usage: Decimal,
    pub water_usage: Decimal,
    pub subtotal_electricity: i32,
    pub subtotal_water: i32,
    pub rent: i32,
    pub internet_fee: i32,
    pub cleaning_fee: i32,
    pub total: i32,
}

// O que o recálculo devolve para a tela da fatura
#[derive(Debug, Clone)]
pub struct RecalculatedInvoice {
    pub invoice: Invoice,
    pub figures: InvoiceFigures,
    pub tariff: Tariff,
}

// Tudo que a página da fatura precisa
#[derive(Debug, Clone)]
pub struct InvoiceView {
    pub room: Room,
    pub tenant: Option<Tenant>,
    pub settings: LandlordSettings,
    pub yyyymm: String,
    pub recalculated: RecalculatedInvoice,
}
