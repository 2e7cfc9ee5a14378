use coin_supply_domain::{CliOverrides, Config};
use tracing::info;

/// Runs before logging is initialized, so it reports through its result only.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        listen = %config.server.listen_addr(),
        rpc_url = %config.rpc.url,
        rpc_timeout_secs = config.rpc.timeout_secs,
        refresh_interval_secs = config.refresh.interval_secs,
        stale_after_secs = config.refresh.stale_after_secs,
        "Configuration loaded"
    );
}
