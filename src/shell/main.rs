use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::registry_in_memory::InMemoryActivityRegistry;
use activities::shell::config::Config;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;

    // State lives for the process only; every restart begins from the seed rosters.
    let registry = Arc::new(InMemoryActivityRegistry::seeded());
    let app = router(AppState::new(registry), &config.static_dir);

    let addr = config.addr();
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
