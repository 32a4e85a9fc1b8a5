//! alertroute CLI
//!
//! Run with: cargo run -- -service-data ./services.yaml -routes-directory ./routes
//!
//! Every flag can also be set through its `ALERTROUTE_*` environment
//! variable. Log level comes from RUST_LOG (default: info).

use alertroute::cli::Args;
use alertroute::pipeline::{run, GeneratorConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alertroute=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GeneratorConfig::from(Args::parse_normalized());

    tracing::debug!("alertroute configuration:");
    tracing::debug!("  Service data: {}", config.service_data.display());
    tracing::debug!("  Receivers file: {}", config.receivers_path().display());
    tracing::debug!("  Routes file: {}", config.routing_path().display());
    tracing::debug!("  Orphan alert email: {}", config.orphan_alert_email);
    tracing::debug!("  Read policy: {:?}", config.read_policy);

    match run(&config) {
        Ok(files) => {
            tracing::info!(
                receivers = %files.receivers.display(),
                routes = %files.routes.display(),
                "Alertmanager configuration generated"
            );
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
