use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use credible_server::{run_server, ServiceConfig};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c; shutting down");
        return;
    }
    info!("shutting down gracefully");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ServiceConfig::from_env().context("loading configuration")?;
    let supervisor = config
        .build_supervisor()
        .context("building credibility supervisor")?;

    info!(
        fact_check_enabled = config.check.fact_check_enabled,
        reputation_entries = supervisor.table().len(),
        "configuration loaded"
    );
    if !config.check.fact_check_enabled {
        warn!("no usable GOOGLE_FACT_CHECK_API_KEY; running on domain reputation only");
    }

    run_server(&config, Arc::new(supervisor), shutdown_signal())
        .await
        .context("serving HTTP")?;
    Ok(())
}
