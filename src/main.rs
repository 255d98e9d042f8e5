// Draft advisor entry point.
//
// Startup sequence:
// 1. Initialize tracing
// 2. Load config
// 3. Load hero catalog and map table
// 4. Build the router and serve

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use draft_advisor::catalog::{loader, HeroCatalog, MapTable};
use draft_advisor::config;
use draft_advisor::server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("Draft advisor starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: port={}, heroes={}",
        config.server.port, config.data.heroes
    );

    // 3. Load hero catalog and map table
    let heroes = loader::load_heroes(Path::new(&config.data.heroes))
        .context("failed to load heroes")?;
    let catalog = HeroCatalog::new(heroes);
    info!("Loaded {} heroes", catalog.len());

    let maps = match &config.data.maps {
        Some(path) => {
            loader::load_map_table(Path::new(path)).context("failed to load map table")?
        }
        None => MapTable::empty(),
    };
    info!("Loaded {} maps", maps.names().len());

    // 4. Build the router and serve
    let state = Arc::new(AppState { catalog, maps });
    let router = build_router(state, config.server.static_dir.as_deref());

    let addr = format!("127.0.0.1:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draft_advisor=info,tower_http=info,warn")),
        )
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
