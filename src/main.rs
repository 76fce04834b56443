use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use portfolio::config::Config;
use portfolio::db::{self, PgSubmissionStore};
use portfolio::email::{Notifier, SmtpNotifier};
use portfolio::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting portfolio");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    db::ensure_schema(&pool).await?;
    tracing::info!("Database schema ready");

    let notifier: Option<Arc<dyn Notifier>> = match config.smtp.as_ref() {
        Some(smtp) => {
            let mailer = SmtpNotifier::new(smtp)?;
            tracing::info!(
                "SMTP configured via {}:{}, notifying {} recipient(s)",
                smtp.host,
                smtp.port,
                smtp.recipients.len()
            );
            Some(Arc::new(mailer))
        }
        None => {
            tracing::warn!("SMTP not configured, submissions will be stored without notification");
            None
        }
    };

    let addr = SocketAddr::new(config.host, config.port);
    let state = AppState::new(config, Arc::new(PgSubmissionStore::new(pool)), notifier);
    let app = portfolio::build_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
