use anyhow::Context;
use api::{serve, Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use util::load_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config::<Config>("Config.toml")?;
    let router = serve(&config).await?;

    let address = config.server.address()?;
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(task = "listen", address = %address);

    Ok(axum::serve(listener, router).await?)
}
