//! Franchise Calculator HTTP server.

use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use franchise_calculator::adapters::{
    app_router, BuiltinCatalogSource, CalculatorAppState, YamlCatalogSource,
};
use franchise_calculator::config::AppConfig;
use franchise_calculator::ports::ProfileCatalogSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let source: Box<dyn ProfileCatalogSource> = match &config.calculator.catalog_path {
        Some(path) => Box::new(YamlCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource),
    };
    let catalog = source.load().await.map_err(|e| {
        warn!("Failed to load {}: {}", source.describe(), e);
        e
    })?;
    info!(
        "Loaded {} industry profiles from {}",
        catalog.len(),
        source.describe()
    );

    let state = CalculatorAppState::new(
        catalog,
        config.calculator.input_limits(),
        config.calculator.asset_kit_url.clone(),
    );
    let app = app_router(state, &config.server)?;

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Franchise calculator listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
