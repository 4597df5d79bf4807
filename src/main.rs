use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use test_store::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "test_store=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::default();
    let addr: SocketAddr = config.addr().parse().context("Invalid bind address")?;

    tracing::info!("Server started on :{}", config.port);

    let listener = test_store::bind(addr)
        .await
        .context("Failed to bind to address")?;

    test_store::serve(listener, test_store::app())
        .await
        .context("Server stopped")?;

    Ok(())
}
