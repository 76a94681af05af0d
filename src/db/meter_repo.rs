// src/db/meter_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{db_utils::map_missing_room, error::AppError, period::Period},
    models::meter::{MeterReading, ResolvedReading},
};

#[derive(Clone)]
pub struct MeterRepository {
    pool: PgPool,
}

impl MeterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find(
        &self,
        room_id: i32,
        period: Period,
    ) -> Result<Option<MeterReading>, AppError> {
        let reading = sqlx::query_as::<_, MeterReading>(
            "SELECT * FROM meter_readings WHERE room_id = $1 AND yyyymm = $2",
        )
        .bind(room_id)
        .bind(period.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(reading)
    }

    // UPSERT: uma leitura por quarto por mês
    pub async fn upsert<'e, E>(
        &self,
        executor: E,
        room_id: i32,
        period: Period,
        reading: &ResolvedReading,
    ) -> Result<MeterReading, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, MeterReading>(
            r#"
            INSERT INTO meter_readings (room_id, yyyymm, elec_start, elec_end, water_start, water_end)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (room_id, yyyymm)
            DO UPDATE SET
                elec_start  = EXCLUDED.elec_start,
                elec_end    = EXCLUDED.elec_end,
                water_start = EXCLUDED.water_start,
                water_end   = EXCLUDED.water_end
            RETURNING *
            "#,
        )
        .bind(room_id)
        .bind(period.to_string())
        .bind(reading.elec_start)
        .bind(reading.elec_end)
        .bind(reading.water_start)
        .bind(reading.water_end)
        .fetch_one(executor)
        .await
        .map_err(map_missing_room)
    }
}
