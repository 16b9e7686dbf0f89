use std::sync::Arc;

use anyhow::{Context, Result};
use comments_api::{
    application::comment_service::CommentService,
    build_router,
    config::{AppConfig, StoreKind},
    infrastructure::{
        in_memory_comment_store::InMemoryCommentStore,
        postgres_comment_store::PostgresCommentStore,
    },
    state::AppState,
};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let mut postgres = None;
    let service: Arc<dyn CommentService> = match config.store {
        StoreKind::Postgres => {
            let store = PostgresCommentStore::connect_lazy(
                &config.database_url,
                config.db_max_connections,
                config.db_acquire_timeout,
            )
            .context("failed to set up the postgres comment store")?;
            postgres = Some(store.clone());
            Arc::new(store)
        }
        StoreKind::Memory => {
            warn!("using the in-memory comment store; data is lost on exit");
            Arc::new(InMemoryCommentStore::new())
        }
    };

    let app = build_router(AppState::new(service), config.request_timeout);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        bind_addr = %config.bind_addr,
        store = ?config.store,
        "comments API started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(store) = postgres {
        store.close().await;
        info!("database pool closed");
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("comments_api=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install ctrl+c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
