//! # Stockroom
//!
//! Stocks a warehouse from a TOML manifest and checks out its carts.
//!
//! ## Usage
//!
//! ```bash
//! export STOCKROOM_MANIFEST=config/stock.toml
//! export STOCKROOM_LOG_FORMAT=json   # optional
//!
//! stockroom
//! ```

use stock_cli::{runner, AppConfig, LogFormat};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
    }

    print_banner();

    let (path, manifest) = config.load_manifest()?;
    info!("Manifest loaded from {}", path.display());

    let summary = runner::run(&manifest)?;

    for order in &summary.orders {
        let rendered = serde_json::to_string(order)?;
        info!(order = %rendered, "Order");
    }

    info!(
        orders = summary.orders.len(),
        rejected_lines = summary.rejected_lines,
        failed_checkouts = summary.failed_checkouts,
        "Run complete"
    );
    for item in summary.shop.warehouse().stock() {
        info!(good = %item.good, count = item.count, "Remaining stock");
    }

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Stockroom
  ━━━━━━━━━━━━━━━━━━━━━━━
  Warehouse and checkout
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
