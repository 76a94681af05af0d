// src/db/tariff_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::tariff::{Tariff, TariffRates},
};

#[derive(Clone)]
pub struct TariffRepository {
    pool: PgPool,
}

impl TariffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_room(&self, room_id: i32) -> Result<Option<Tariff>, AppError> {
        let tariff = sqlx::query_as::<_, Tariff>("SELECT * FROM tariffs WHERE room_id = $1")
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tariff)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        room_id: i32,
        rates: &TariffRates,
    ) -> Result<Tariff, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let tariff = sqlx::query_as::<_, Tariff>(
            r#"
            INSERT INTO tariffs (room_id, rent, internet_fee, cleaning_fee, electricity_price, water_price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(room_id)
        .bind(rates.rent)
        .bind(rates.internet_fee)
        .bind(rates.cleaning_fee)
        .bind(rates.electricity_price)
        .bind(rates.water_price)
        .fetch_one(executor)
        .await?;

        Ok(tariff)
    }

    // Edição no lugar: não existe histórico de preços
    pub async fn update<'e, E>(
        &self,
        executor: E,
        room_id: i32,
        rates: &TariffRates,
    ) -> Result<Option<Tariff>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let tariff = sqlx::query_as::<_, Tariff>(
            r#"
            UPDATE tariffs
            SET rent = $1, internet_fee = $2, cleaning_fee = $3,
                electricity_price = $4, water_price = $5
            WHERE room_id = $6
            RETURNING *
            "#,
        )
        .bind(rates.rent)
        .bind(rates.internet_fee)
        .bind(rates.cleaning_fee)
        .bind(rates.electricity_price)
        .bind(rates.water_price)
        .bind(room_id)
        .fetch_optional(executor)
        .await?;

        Ok(tariff)
    }
}
