use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use progress_hub::adapters::auth::GoTrueAuthProvider;
use progress_hub::adapters::embed::TwitterWidgets;
use progress_hub::adapters::http::{app, AppState};
use progress_hub::adapters::profile::RemoteProfileStore;
use progress_hub::adapters::sources::{GithubRepositories, LeetcodeStats, MediumArticles};
use progress_hub::application::{HubPorts, HubRegistry};
use progress_hub::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    info!(
        "Starting Progress Hub v{} ({:?})",
        env!("CARGO_PKG_VERSION"),
        config.server.environment
    );

    let ports = HubPorts {
        store: Arc::new(RemoteProfileStore::new(&config.backend)),
        repositories: Arc::new(GithubRepositories::new(&config.sources)),
        coding_stats: Arc::new(LeetcodeStats::new(&config.sources)),
        articles: Arc::new(MediumArticles::new(&config.sources)),
        embeds: Arc::new(TwitterWidgets::from_config(&config.embed)),
    };
    let hubs = Arc::new(HubRegistry::new(ports));
    let auth = Arc::new(GoTrueAuthProvider::new(&config.backend));

    let router = app(AppState::new(auth, hubs), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Progress Hub listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Progress Hub stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}
