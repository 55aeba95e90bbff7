//! Delivery Bot access code server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use delivery_bot::adapters::http::{app_router, RouterOptions, TokenAppState};
use delivery_bot::adapters::{
    InMemoryAccessCodeStore, LoggingNotifier, MailtrapConfig, MailtrapNotifier,
    RedisAccessCodeStore,
};
use delivery_bot::config::{AppConfig, EmailConfig, EmailProvider, ServerConfig, StoreBackend};
use delivery_bot::ports::{AccessCodeNotifier, AccessCodeStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    info!(
        environment = ?config.server.environment,
        store = ?config.store.backend,
        email = ?config.email.provider,
        ttl_secs = config.store.ttl_secs,
        "Configuration loaded"
    );

    let store = build_store(&config).await?;
    let notifier = build_notifier(&config.email);
    let state = TokenAppState::new(store, notifier, config.store.ttl());

    let options = RouterOptions {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
    };
    let app = app_router(state, &options);

    let address = config.server.socket_addr()?;
    let listener = TcpListener::bind(address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn AccessCodeStore>, BoxError> {
    match config.store.backend {
        StoreBackend::Redis => {
            info!("Connecting to Redis...");
            let store = tokio::time::timeout(
                config.redis.timeout(),
                RedisAccessCodeStore::connect(&config.redis.url),
            )
            .await
            .map_err(|_| "timed out connecting to Redis")??;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            let store = InMemoryAccessCodeStore::new();
            spawn_purge_task(store.clone(), config.store.purge_interval());
            Ok(Arc::new(store))
        }
    }
}

fn spawn_purge_task(store: InMemoryAccessCodeStore, every: std::time::Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "Purged expired access codes");
            }
        }
    });
}

fn build_notifier(email: &EmailConfig) -> Arc<dyn AccessCodeNotifier> {
    match email.provider {
        EmailProvider::Mailtrap => {
            info!(from = %email.from_header(), "Sending access codes through Mailtrap");
            let config = MailtrapConfig::new(email.mailtrap_api_token.clone(), email.from_email.clone())
                .with_from_name(email.from_name.clone())
                .with_subject(email.subject.clone())
                .with_category(email.category.clone())
                .with_base_url(email.api_base_url.clone())
                .with_qr_service_url(email.qr_service_url.clone())
                .with_link_url(email.link_url.clone())
                .with_timeout(email.timeout());
            Arc::new(MailtrapNotifier::new(config))
        }
        EmailProvider::Log => {
            info!("Email provider is 'log'; access codes will not be emailed");
            Arc::new(LoggingNotifier::new())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
}
