mod api;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bytesize_core::{
    load_config, validate_config, ArxivFeed, CatalogService, CitedFeed, IngestScheduler,
    OpenRouterSummarizer, PaperCatalog, PaperFeed, PdfTextExtractor, SearchEngine,
    SemanticScholarFeed, SqlitePaperCatalog,
};

use api::create_router;
use state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("BYTESIZE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Database path: {:?}", config.database.path);

    // Create SQLite paper catalog
    let catalog: Arc<dyn PaperCatalog> = Arc::new(
        SqlitePaperCatalog::new(&config.database.path)
            .context("Failed to create paper catalog")?,
    );
    info!("Paper catalog initialized");

    // Create remote feed client
    let feed: Arc<dyn PaperFeed> = Arc::new(ArxivFeed::new(config.feed.clone()));
    info!("Remote feed initialized ({})", config.feed.base_url);

    // Create the service layer
    let search = SearchEngine::new(Arc::clone(&catalog), Arc::clone(&feed));
    let service = Arc::new(CatalogService::new(Arc::clone(&catalog), search));

    // Create ingestion scheduler if enabled and a summarizer is configured
    let scheduler = if config.scheduler.enabled {
        match &config.summarizer {
            Some(summarizer_config) => {
                info!(
                    "Initializing ingestion scheduler (model: {})",
                    summarizer_config.model
                );

                let extractor = Arc::new(PdfTextExtractor::new(config.feed.timeout_secs));
                let summarizer = Arc::new(OpenRouterSummarizer::new(summarizer_config.clone()));

                let cited_feed: Option<Arc<dyn CitedFeed>> = config
                    .cited_feed
                    .as_ref()
                    .map(|c| {
                        info!("Cited feed initialized ({})", c.base_url);
                        Arc::new(SemanticScholarFeed::new(c.clone())) as Arc<dyn CitedFeed>
                    });

                let scheduler = Arc::new(IngestScheduler::new(
                    config.scheduler.clone(),
                    Arc::clone(&feed),
                    cited_feed,
                    extractor,
                    summarizer,
                    Arc::clone(&catalog),
                ));
                scheduler.start();
                info!("Ingestion scheduler started");
                Some(scheduler)
            }
            None => {
                info!("Scheduler enabled but no summarizer configured, not starting ingestion");
                None
            }
        }
    } else {
        info!("Scheduler disabled in config");
        None
    };

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), service));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Stop scheduler if running
    if let Some(ref scheduler) = scheduler {
        info!("Stopping scheduler...");
        scheduler.stop();
        info!("Scheduler stopped");
    }

    info!("Server shut down");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
