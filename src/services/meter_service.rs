// src/services/meter_service.rs

use sqlx::PgPool;

use crate::{
    common::{error::AppError, period::Period},
    db::MeterRepository,
    models::{
        invoice::RecalculatedInvoice,
        meter::{MeterPrefill, MeterReading, ResolvedReading, SaveMeterPayload},
    },
    services::billing_service::BillingService,
};

fn finite(value: f64, field: &'static str) -> Result<f64, AppError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::InvalidNumber(field))
    }
}

/// Resolve os valores do formulário: preenche os "start" vazios com o
/// fechamento do mês anterior e só então valida (fim >= início).
pub fn resolve_reading(
    payload: &SaveMeterPayload,
    previous: Option<MeterPrefill>,
) -> Result<ResolvedReading, AppError> {
    let elec_start = payload.elec_start
        .or(previous.map(|p| p.elec_start))
        .ok_or(AppError::MissingStartReading("elec_start"))?;
    let water_start = payload.water_start
        .or(previous.map(|p| p.water_start))
        .ok_or(AppError::MissingStartReading("water_start"))?;

    let elec_end = payload.elec_end.ok_or(AppError::InvalidNumber("elec_end"))?;
    let water_end = payload.water_end.ok_or(AppError::InvalidNumber("water_end"))?;

    let reading = ResolvedReading {
        elec_start: finite(elec_start, "elec_start")?,
        elec_end: finite(elec_end, "elec_end")?,
        water_start: finite(water_start, "water_start")?,
        water_end: finite(water_end, "water_end")?,
    };

    if reading.elec_end < reading.elec_start || reading.water_end < reading.water_start {
        return Err(AppError::ReadingDecreased);
    }

    Ok(reading)
}

#[derive(Clone)]
pub struct MeterService {
    meter_repo: MeterRepository,
    billing_service: BillingService,
    pool: PgPool,
}

impl MeterService {
    pub fn new(meter_repo: MeterRepository, billing_service: BillingService, pool: PgPool) -> Self {
        Self { meter_repo, billing_service, pool }
    }

    /// Fechamento do mês anterior, usado como abertura sugerida.
    pub async fn prefill_for(
        &self,
        room_id: i32,
        period: Period,
    ) -> Result<Option<MeterPrefill>, AppError> {
        let prev = self.meter_repo.find(room_id, period.prev()).await?;
        Ok(prev.as_ref().map(MeterPrefill::from))
    }

    /// Grava (UPSERT) a leitura do mês e recalcula a fatura correspondente.
    /// Nada é gravado se a leitura for inválida.
    pub async fn save_reading(
        &self,
        room_id: i32,
        payload: &SaveMeterPayload,
    ) -> Result<(Period, MeterReading, Option<RecalculatedInvoice>), AppError> {
        let period: Period = payload.yyyymm.trim().parse()?;

        // Só consulta o mês anterior se algum "start" veio vazio
        let previous = if payload.elec_start.is_none() || payload.water_start.is_none() {
            self.prefill_for(room_id, period).await?
        } else {
            None
        };

        let resolved = resolve_reading(payload, previous)?;

        let reading = self.meter_repo
            .upsert(&self.pool, room_id, period, &resolved)
            .await?;

        tracing::info!(
            room_id,
            %period,
            elec_start = reading.elec_start,
            elec_end = reading.elec_end,
            water_start = reading.water_start,
            water_end = reading.water_end,
            "Leitura dos medidores gravada"
        );

        let recalculated = self.billing_service.recalculate(room_id, period).await?;

        Ok((period, reading, recalculated))
    }
}
