use health_assistant_mcp::Config;
use health_assistant_mcp::health::{Dataset, HealthDataSource};
use health_assistant_mcp::logging;
use health_assistant_mcp::mcp::HealthServer;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let _log_guard = logging::init(&config.logging)?;

    let dataset = Dataset::mock();
    dataset.validate(config.dataset.validation)?;

    let counts = dataset.counts();
    tracing::info!(
        name = %config.server.name,
        claims = counts.claims,
        plans = counts.plans,
        providers = counts.providers,
        "Starting health MCP server on stdio"
    );

    let server = HealthServer::new(Arc::new(dataset), config.server.name.clone());
    server.run_stdio().await?;

    tracing::info!("Health MCP server stopped");
    Ok(())
}
