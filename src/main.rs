use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod models;
mod services;
mod utils;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("btc_powerlaw_chart=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    info!("📈 btc-powerlaw-chart v{}", env!("CARGO_PKG_VERSION"));

    let cli = commands::Cli::parse();
    if let Err(e) = commands::dispatch(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}
