pub mod room_repo;
pub use room_repo::RoomRepository;
pub mod tariff_repo;
pub use tariff_repo::TariffRepository;
pub mod tenant_repo;
pub use tenant_repo::TenantRepository;
pub mod meter_repo;
pub use meter_repo::MeterRepository;
pub mod invoice_repo;
pub use invoice_repo::InvoiceRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;

use sqlx::{migrate::Migrator, PgPool};

// Migrações versionadas em ./migrations:
//  - 0001: schema (CREATE TABLE IF NOT EXISTS, idempotente)
//  - 0002: carga inicial dos quartos e normalização dos preços unitários (roda uma única vez por banco)
pub static MIGRATOR: Migrator = sqlx::migrate!();

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");
    Ok(())
}
