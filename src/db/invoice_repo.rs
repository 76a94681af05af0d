// src/db/invoice_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{error::AppError, period::Period},
    models::invoice::{Invoice, InvoiceFigures},
};

#[derive(Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Histórico de faturas do quarto, mês mais recente primeiro
    pub async fn list_for_room(&self, room_id: i32) -> Result<Vec<Invoice>, AppError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT * FROM invoices WHERE room_id = $1 ORDER BY yyyymm DESC",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    /// UPSERT: sobrescreve todos os valores e o `created_at` a cada recálculo.
    pub async fn upsert<'e, E>(
        &self,
        executor: E,
        room_id: i32,
        period: Period,
        figures: &InvoiceFigures,
    ) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (
                room_id, yyyymm, subtotal_electricity, subtotal_water,
                rent, internet_fee, cleaning_fee, total
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (room_id, yyyymm)
            DO UPDATE SET
                subtotal_electricity = EXCLUDED.subtotal_electricity,
                subtotal_water       = EXCLUDED.subtotal_water,
                rent                 = EXCLUDED.rent,
                internet_fee         = EXCLUDED.internet_fee,
                cleaning_fee         = EXCLUDED.cleaning_fee,
                total                = EXCLUDED.total,
                created_at           = NOW()
            RETURNING *
            "#,
        )
        .bind(room_id)
        .bind(period.to_string())
        .bind(figures.subtotal_electricity)
        .bind(figures.subtotal_water)
        .bind(figures.rent)
        .bind(figures.internet_fee)
        .bind(figures.cleaning_fee)
        .bind(figures.total)
        .fetch_one(executor)
        .await?;

        Ok(invoice)
    }
}
