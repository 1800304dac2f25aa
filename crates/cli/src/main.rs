use clap::Parser;
use helm_broker_api::AppState;
use helm_broker_domain::CliOverrides;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "helm-broker")]
#[command(version)]
#[command(about = "Helm Broker - Open Service Broker serving addons as catalog services")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Addon index file (JSON)
    #[arg(long, value_name = "FILE")]
    addons_file: Option<String>,

    /// Serve addons of this namespace instead of cluster-wide ones
    #[arg(short = 'n', long)]
    namespace: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        addons_file: cli.addons_file,
        namespace: cli.namespace,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Helm Broker v{}", env!("CARGO_PKG_VERSION"));
    info!(
        config = %bootstrap::config_source(cli.config.as_deref()),
        "Configuration loaded"
    );

    let storage = Arc::new(bootstrap::init_storage(&config.catalog)?);
    let use_cases = di::UseCases::new(&config, storage);
    info!(scope = %config.catalog.scope(), "Catalog scope configured");

    let shutdown = CancellationToken::new();
    let app_state = AppState {
        get_catalog: use_cases.get_catalog,
        shutdown: shutdown.clone(),
    };

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        shutdown.cancel();
    });

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
