//! # Orderdesk CLI Library
//!
//! ## Module Organization
//! ```text
//! orderdesk_cli/
//! ├── lib.rs          ◄─── You are here (arguments, logging, run)
//! ├── settings.rs     ◄─── orderdesk.toml + environment overrides
//! ├── demo.rs         ◄─── Demo catalog, customers and orders
//! └── report.rs       ◄─── Text and JSON order reports
//! ```

pub mod demo;
pub mod report;
pub mod settings;

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use orderdesk_core::SharedConfig;
use settings::OrderSettings;

/// Assemble demo orders against the configured limits and print them.
#[derive(Debug, Parser)]
#[command(name = "orderdesk", version, about)]
pub struct Cli {
    /// Settings file (defaults to orderdesk.toml in the platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print orders as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Runs the command line application.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing();
    info!("Starting Orderdesk");

    let settings = OrderSettings::load(cli.config.as_deref())?;
    let config = SharedConfig::global();
    config.apply(&settings.to_config_values());
    info!(
        max_items_per_order = config.max_items_per_order(),
        default_currency = %config.default_currency(),
        "Settings applied"
    );

    let outcome = demo::run_demo(config)?;
    let currency = config.default_currency();

    if cli.json {
        println!("{}", report::render_json(&outcome.orders, &currency)?);
    } else {
        for order in &outcome.orders {
            println!("{}", report::render_text(order, &currency));
        }
        for (label, err) in &outcome.rejected {
            println!("Rejected {label}: {err}");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=orderdesk_core=trace` - Trace the core only
/// - Default: INFO, DEBUG for orderdesk crates
///
/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,orderdesk_core=debug,orderdesk_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
