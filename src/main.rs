//src/main.rs

use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use rental_manager::{
    build_app,
    config::{AppState, Config},
    db,
};

#[tokio::main]
async fn main() {
    // Inicializa o logger (RUST_LOG sobrescreve o filtro padrão)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn")),
        )
        .with_target(false)
        .compact()
        .init();

    // Se a inicialização falhar (config, banco, migrações), a aplicação não sobe.
    if let Err(e) = run().await {
        tracing::error!("🔥 Falha ao iniciar a aplicação: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let app_state = AppState::new(&config).await?;

    // Schema + carga inicial, antes de abrir a porta
    db::run_migrations(&app_state.db_pool)
        .await
        .context("Falha ao rodar as migrações do banco de dados")?;

    let app = build_app(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .context("Falha ao iniciar o listener TCP")?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Erro no servidor Axum")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Falha ao instalar o handler de Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Falha ao instalar o handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT recebido, encerrando"),
        () = terminate => tracing::info!("SIGTERM recebido, encerrando"),
    }
}
