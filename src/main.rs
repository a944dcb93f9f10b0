use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use estate_search::api::{create_router, AppState};
use estate_search::config::{ListingBackend, Settings};
use estate_search::search::{SearchEngine, SearchService};
use estate_search::sources::{
    HttpListingSource, ListingSource, MemoryFavoriteStore, MemoryListingStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("🏠 Estate Search - property search service");

    let settings = Settings::from_env().context("Failed to load configuration")?;

    let listings: Arc<dyn ListingSource> = match &settings.listings {
        ListingBackend::Remote { base_url, timeout } => {
            info!("Using remote listing service at {}", base_url);
            Arc::new(HttpListingSource::new(base_url.clone(), *timeout)?)
        }
        ListingBackend::File(path) => Arc::new(MemoryListingStore::from_json_file(path).await?),
        ListingBackend::Sample => {
            warn!("No LISTINGS_URL or LISTINGS_PATH set, serving sample listings");
            Arc::new(MemoryListingStore::sample())
        }
    };

    let search = SearchService::new(
        SearchEngine::new(settings.page_sizes),
        listings,
        Arc::new(MemoryFavoriteStore::new()),
    );

    let origins = settings
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(AppState { search }).layer(cors);

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Listening on {}", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
