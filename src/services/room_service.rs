// src/services/room_service.rs

use chrono::Local;
use sqlx::PgPool;

use crate::{
    common::{error::AppError, period::Period},
    db::{InvoiceRepository, MeterRepository, RoomRepository, TariffRepository, TenantRepository},
    models::{
        invoice::Invoice,
        meter::{MeterPrefill, MeterReading},
        room::{CreateRoomPayload, Room, UpdateRoomPayload},
        tariff::Tariff,
        tenant::Tenant,
    },
    services::billing_service::BillingService,
};

// Tudo o que a página de detalhe do quarto mostra
#[derive(Debug, Clone)]
pub struct RoomDetail {
    pub room: Room,
    pub tenant: Option<Tenant>,
    pub tariff: Option<Tariff>,
    pub period: Period,
    pub meter: Option<MeterReading>,
    // Só preenchidos quando o mês selecionado ainda não tem leitura
    pub prev_period: Option<Period>,
    pub prefill: Option<MeterPrefill>,
    pub invoices: Vec<Invoice>,
    pub has_complete_meter: bool,
}

/// Período pedido na query, se for válido; senão, o mês corrente.
pub fn resolve_period(requested: Option<&str>) -> Period {
    requested
        .and_then(|s| s.trim().parse::<Period>().ok())
        .unwrap_or_else(Period::current)
}

#[derive(Clone)]
pub struct RoomService {
    room_repo: RoomRepository,
    tariff_repo: TariffRepository,
    tenant_repo: TenantRepository,
    meter_repo: MeterRepository,
    invoice_repo: InvoiceRepository,
    billing_service: BillingService,
    pool: PgPool,
}

impl RoomService {
    pub fn new(
        room_repo: RoomRepository,
        tariff_repo: TariffRepository,
        tenant_repo: TenantRepository,
        meter_repo: MeterRepository,
        invoice_repo: InvoiceRepository,
        billing_service: BillingService,
        pool: PgPool,
    ) -> Self {
        Self { room_repo, tariff_repo, tenant_repo, meter_repo, invoice_repo, billing_service, pool }
    }

    /// Cria o quarto, a tabela de preços obrigatória e, se o nome vier
    /// preenchido, o inquilino inicial. Tudo ou nada.
    pub async fn create_room(&self, payload: &CreateRoomPayload) -> Result<Room, AppError> {
        let mut tx = self.pool.begin().await?;

        let room = self.room_repo
            .create(&mut *tx, payload.name.trim(), payload.note.as_deref())
            .await?;

        self.tariff_repo
            .create(&mut *tx, room.id, &payload.rates())
            .await?;

        let tenant_name = payload.tenant_full_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());

        if let Some(full_name) = tenant_name {
            let started_at = payload.tenant_started_at
                .unwrap_or_else(|| Local::now().date_naive());

            self.tenant_repo
                .create(&mut *tx, room.id, full_name, payload.tenant_phone.as_deref(), started_at)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(room_id = room.id, name = %room.name, "Quarto criado");

        Ok(room)
    }

    /// Atualiza quarto e preços no lugar. Com `period`, recalcula a fatura
    /// daquele mês na hora (se ainda faltar leitura, segue sem fatura).
    pub async fn update_room(
        &self,
        room_id: i32,
        payload: &UpdateRoomPayload,
        period: Option<Period>,
    ) -> Result<Room, AppError> {
        let rates = payload.rates();

        let mut tx = self.pool.begin().await?;

        let room = self.room_repo
            .update(&mut *tx, room_id, payload.name.trim(), payload.note.as_deref())
            .await?
            .ok_or(AppError::RoomNotFound)?;

        // Todo quarto deveria ter preços; se faltar, criamos agora
        if self.tariff_repo.update(&mut *tx, room_id, &rates).await?.is_none() {
            self.tariff_repo.create(&mut *tx, room_id, &rates).await?;
        }

        tx.commit().await?;

        tracing::info!(room_id, "Quarto e preços atualizados");

        if let Some(period) = period {
            self.billing_service.recalculate(room_id, period).await?;
        }

        Ok(room)
    }

    // Dados do formulário de edição
    pub async fn room_with_tariff(&self, room_id: i32) -> Result<(Room, Option<Tariff>), AppError> {
        let room = self.room_repo
            .find_by_id(room_id)
            .await?
            .ok_or(AppError::RoomNotFound)?;

        let tariff = self.tariff_repo.find_by_room(room_id).await?;

        Ok((room, tariff))
    }

    pub async fn room_detail(&self, room_id: i32, period: Period) -> Result<RoomDetail, AppError> {
        let room = self.room_repo
            .find_by_id(room_id)
            .await?
            .ok_or(AppError::RoomNotFound)?;

        let tenant = self.tenant_repo.find_active(room_id).await?;
        let tariff = self.tariff_repo.find_by_room(room_id).await?;
        let meter = self.meter_repo.find(room_id, period).await?;

        // Mês sem leitura: sugere a abertura a partir do fechamento anterior
        let (prev_period, prefill) = if meter.is_none() {
            let prev_period = period.prev();
            let prev = self.meter_repo.find(room_id, prev_period).await?;
            (Some(prev_period), prev.as_ref().map(MeterPrefill::from))
        } else {
            (None, None)
        };

        let invoices = self.invoice_repo.list_for_room(room_id).await?;
        let has_complete_meter = meter.as_ref().is_some_and(MeterReading::is_complete);

        Ok(RoomDetail {
            room,
            tenant,
            tariff,
            period,
            meter,
            prev_period,
            prefill,
            invoices,
            has_complete_meter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_query_period_is_used() {
        assert_eq!(resolve_period(Some("202312")).to_string(), "202312");
        assert_eq!(resolve_period(Some(" 202401 ")).to_string(), "202401");
    }

    #[test]
    fn missing_or_invalid_query_falls_back_to_current_month() {
        let current = Period::current();
        assert_eq!(resolve_period(None), current);
        assert_eq!(resolve_period(Some("2024")), current);
        assert_eq!(resolve_period(Some("202413")), current);
    }
}
