// src/services/tenant_service.rs

use chrono::{Local, NaiveDate};
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{RoomRepository, TenantRepository},
    models::tenant::{StartTenantPayload, Tenant},
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// Regra de negócio: no máximo UM inquilino ativo (ended_at IS NULL) por quarto.
// Não existe constraint no banco para isso; quem garante é este serviço.
#[derive(Clone)]
pub struct TenantService {
    room_repo: RoomRepository,
    tenant_repo: TenantRepository,
    pool: PgPool, // Usamos a pool para iniciar transações
}

impl TenantService {
    pub fn new(room_repo: RoomRepository, tenant_repo: TenantRepository, pool: PgPool) -> Self {
        Self { room_repo, tenant_repo, pool }
    }

    async fn ensure_room(&self, room_id: i32) -> Result<(), AppError> {
        self.room_repo
            .find_by_id(room_id)
            .await?
            .map(|_| ())
            .ok_or(AppError::RoomNotFound)
    }

    /// Encerra o inquilino atual (ended_at = hoje) e registra o novo, atomicamente.
    pub async fn start_tenant(
        &self,
        room_id: i32,
        payload: &StartTenantPayload,
    ) -> Result<Tenant, AppError> {
        self.ensure_room(room_id).await?;

        let today = today();

        // 1. Inicia a transação
        let mut tx = self.pool.begin().await?;

        // 2. Fecha o inquilino ativo, se houver
        let previous = self.tenant_repo
            .end_active(&mut *tx, room_id, today)
            .await?;

        // 3. Cria o novo inquilino, ativo
        let tenant = self.tenant_repo
            .create(
                &mut *tx,
                room_id,
                payload.full_name.trim(),
                payload.phone.as_deref(),
                payload.started_at.unwrap_or(today),
            )
            .await?;

        // 4. Commit
        tx.commit().await?;

        tracing::info!(
            room_id,
            tenant_id = tenant.id,
            previous_tenant_id = previous.as_ref().map(|t| t.id),
            "Novo inquilino registrado"
        );

        Ok(tenant)
    }

    /// Encerra o inquilino ativo. Sem inquilino ativo, não faz nada.
    pub async fn end_tenant(&self, room_id: i32) -> Result<Option<Tenant>, AppError> {
        self.ensure_room(room_id).await?;

        let ended = self.tenant_repo
            .end_active(&self.pool, room_id, today())
            .await?;

        match &ended {
            Some(t) => tracing::info!(room_id, tenant_id = t.id, "Inquilino encerrado"),
            None => tracing::debug!(room_id, "Nenhum inquilino ativo para encerrar"),
        }

        Ok(ended)
    }
}
