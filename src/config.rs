// src/config.rs

use std::{env, str::FromStr, time::Duration};

use anyhow::Context;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    PgPool,
};

use crate::{
    db::{InvoiceRepository, MeterRepository, RoomRepository, SettingsRepository, TariffRepository, TenantRepository},
    services::{BillingService, MeterService, RoomService, TenantService},
};

const DEFAULT_PORT: u16 = 3000;

// Provedor cujo certificado o Postgres gerenciado não valida na cadeia padrão
const INSECURE_TLS_HOST_HINT: &str = "render.com";

// Configuração lida do ambiente (.env é carregado antes)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub accept_invalid_certs: bool,
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT inválida: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let accept_invalid_certs = match env::var("DATABASE_ACCEPT_INVALID_CERTS") {
            Ok(raw) => parse_bool(&raw)
                .with_context(|| format!("DATABASE_ACCEPT_INVALID_CERTS inválida: {raw}"))?,
            Err(_) => database_url.contains(INSECURE_TLS_HOST_HINT),
        };

        Ok(Self { database_url, port, accept_invalid_certs })
    }

    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        let options = PgConnectOptions::from_str(&self.database_url)
            .context("DATABASE_URL inválida")?;

        // `require` no backend rustls do sqlx usa TLS sem verificar o certificado
        Ok(if self.accept_invalid_certs {
            options.ssl_mode(PgSslMode::Require)
        } else {
            options
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub room_repo: RoomRepository,
    pub settings_repo: SettingsRepository,
    pub billing_service: BillingService,
    pub meter_service: MeterService,
    pub room_service: RoomService,
    pub tenant_service: TenantService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(config.connect_options()?)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    /// Monta o gráfico de dependências a partir de uma pool já criada.
    pub fn from_pool(db_pool: PgPool) -> Self {
        let room_repo = RoomRepository::new(db_pool.clone());
        let tariff_repo = TariffRepository::new(db_pool.clone());
        let tenant_repo = TenantRepository::new(db_pool.clone());
        let meter_repo = MeterRepository::new(db_pool.clone());
        let invoice_repo = InvoiceRepository::new(db_pool.clone());
        let settings_repo = SettingsRepository::new(db_pool.clone());

        let billing_service = BillingService::new(
            room_repo.clone(),
            tenant_repo.clone(),
            tariff_repo.clone(),
            meter_repo.clone(),
            invoice_repo.clone(),
            settings_repo.clone(),
            db_pool.clone(),
        );
        let meter_service = MeterService::new(meter_repo.clone(), billing_service.clone(), db_pool.clone());
        let room_service = RoomService::new(
            room_repo.clone(),
            tariff_repo,
            tenant_repo.clone(),
            meter_repo,
            invoice_repo,
            billing_service.clone(),
            db_pool.clone(),
        );
        let tenant_service = TenantService::new(room_repo.clone(), tenant_repo, db_pool.clone());

        Self {
            db_pool,
            room_repo,
            settings_repo,
            billing_service,
            meter_service,
            room_service,
            tenant_service,
        }
    }
}
