// src/db/settings_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::settings::{LandlordSettings, UpdateSettingsPayload},
};

// Registro único: sempre id = 1
const SETTINGS_ID: i32 = 1;

#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_settings(&self) -> Result<LandlordSettings, AppError> {
        let settings = sqlx::query_as::<_, LandlordSettings>(
            "SELECT * FROM landlord_settings WHERE id = $1",
        )
        .bind(SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await?;

        // A migração já cria a linha padrão, mas tratamos "Not Found" como "Vazio".
        Ok(settings.unwrap_or(LandlordSettings { id: SETTINGS_ID, ..Default::default() }))
    }

    pub async fn update_settings<'e, E>(
        &self,
        executor: E,
        input: &UpdateSettingsPayload,
    ) -> Result<LandlordSettings, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // UPSERT (Insert or Update)
        let settings = sqlx::query_as::<_, LandlordSettings>(
            r#"
            INSERT INTO landlord_settings (id, owner_name, phone, address, bank_name, bank_account)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id)
            DO UPDATE SET
                owner_name = EXCLUDED.owner_name,
                phone = EXCLUDED.phone,
                address = EXCLUDED.address,
                bank_name = EXCLUDED.bank_name,
                bank_account = EXCLUDED.bank_account
            RETURNING *
            "#,
        )
        .bind(SETTINGS_ID)
        .bind(input.owner_name.as_deref())
        .bind(input.phone.as_deref())
        .bind(input.address.as_deref())
        .bind(input.bank_name.as_deref())
        .bind(input.bank_account.as_deref())
        .fetch_one(executor)
        .await?;

        Ok(settings)
    }
}
