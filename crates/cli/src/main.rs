//! # Coin Supply Service
//!
//! Polls the coin daemon for the cumulative coinbase sum and serves
//! circulating and total supply figures over HTTP.

mod bootstrap;
mod server;

use clap::Parser;
use coin_supply_api::{create_api_routes, AppState};
use coin_supply_application::services::SupplyCache;
use coin_supply_application::use_cases::{GetSupplyUseCase, RefreshSupplyUseCase};
use coin_supply_domain::CliOverrides;
use coin_supply_infrastructure::DaemonRpcClient;
use coin_supply_jobs::{JobRunner, SupplyRefreshJob};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "coin-supply")]
#[command(version)]
#[command(about = "Serves coin supply figures from the daemon's coinbase sum")]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Daemon JSON-RPC URL
    #[arg(long)]
    rpc_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        rpc_url: cli.rpc_url,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config.logging);

    info!("Coin supply service starting");
    bootstrap::log_config(&config, cli.config.as_deref());

    let cache = Arc::new(SupplyCache::new(Duration::from_secs(
        config.refresh.stale_after_secs,
    )));
    let rpc = Arc::new(DaemonRpcClient::new(
        config.rpc.url.clone(),
        Duration::from_secs(config.rpc.timeout_secs),
    ));

    let shutdown = CancellationToken::new();

    let refresh = Arc::new(RefreshSupplyUseCase::new(rpc, cache.clone()));
    let jobs = JobRunner::new()
        .with_supply_refresh(
            SupplyRefreshJob::new(refresh)
                .with_interval(config.refresh.interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let app = create_api_routes(AppState {
        get_supply: Arc::new(GetSupplyUseCase::new(cache)),
    });

    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        ctrl_c.cancel();
    });

    let served =
        server::start_web_server(config.server.listen_addr(), app, shutdown.clone()).await;

    shutdown.cancel();
    for job in jobs {
        if let Err(e) = job.await {
            error!(error = %e, "Background job terminated abnormally");
        }
    }

    served
}
