// src/db/tenant_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};

use crate::{common::error::AppError, models::tenant::Tenant};

// Repositório dos inquilinos (moradores). O inquilino "ativo" nunca é
// guardado como flag: é sempre derivado da consulta abaixo.
#[derive(Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inquilino ativo: `ended_at IS NULL`, o mais recente por `started_at`.
    pub async fn find_active(&self, room_id: i32) -> Result<Option<Tenant>, AppError> {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            SELECT * FROM tenants
            WHERE room_id = $1 AND ended_at IS NULL
            ORDER BY started_at DESC NULLS LAST, id DESC
            LIMIT 1
            "#,
        )
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tenant)
    }

    /// Encerra o inquilino ativo do quarto (se houver) e o devolve.
    pub async fn end_active<'e, E>(
        &self,
        executor: E,
        room_id: i32,
        ended_at: NaiveDate,
    ) -> Result<Option<Tenant>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ended = sqlx::query_as::<_, Tenant>(
            r#"
            UPDATE tenants SET ended_at = $2
            WHERE id = (
                SELECT id FROM tenants
                WHERE room_id = $1 AND ended_at IS NULL
                ORDER BY started_at DESC NULLS LAST, id DESC
                LIMIT 1
            )
            RETURNING *
            "#,
        )
        .bind(room_id)
        .bind(ended_at)
        .fetch_optional(executor)
        .await?;

        Ok(ended)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        room_id: i32,
        full_name: &str,
        phone: Option<&str>,
        started_at: NaiveDate,
    ) -> Result<Tenant, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (room_id, full_name, phone, started_at, ended_at)
            VALUES ($1, $2, $3, $4, NULL)
            RETURNING *
            "#,
        )
        .bind(room_id)
        .bind(full_name)
        .bind(phone)
        .bind(started_at)
        .fetch_one(executor)
        .await?;

        Ok(tenant)
    }

    pub async fn count_active(&self, room_id: i32) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tenants WHERE room_id = $1 AND ended_at IS NULL",
        )
        .bind(room_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
