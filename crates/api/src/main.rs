use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use films_api::config::ServerConfig;
use films_api::router::build_app_router;
use films_api::state::AppState;
use films_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "films_api=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    let addr = SocketAddr::new(
        config.host.parse().expect("HOST is not an IP address"),
        config.port,
    );

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = prepare_database(&database_url).await;

    let app = build_app_router(AppState { pool: pool.clone() }, &config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // In-flight requests have drained; release connections before exit.
    pool.close().await;
    tracing::info!("Server stopped");
}

/// `RUST_LOG` wins when set.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, confirm the server answers, and bring the schema up to date.
/// Any failure here aborts startup.
async fn prepare_database(database_url: &str) -> DbPool {
    let pool = films_db::create_pool(database_url)
        .await
        .expect("Failed to connect to database");

    films_db::health_check(&pool)
        .await
        .expect("Database did not answer SELECT 1");

    films_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database ready");
    pool
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.expect("Failed to listen for Ctrl-C");
                tracing::info!(signal = "SIGINT", "Shutting down");
            }
            _ = sigterm.recv() => {
                tracing::info!(signal = "SIGTERM", "Shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl-C");
        tracing::info!(signal = "Ctrl-C", "Shutting down");
    }
}
