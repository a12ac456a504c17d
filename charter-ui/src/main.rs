use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use charter_core::calculations::common::format_currency;
use charter_core::calculations::extra_price_label;
use charter_core::{PaymentMethod, extras, yachts};
use charter_ui::{config::AppConfig, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Yacht charter booking wizard.
///
/// Opens a window that walks through date, guests, yacht, extras, contact
/// details and payment method, then shows the booking summary.
#[derive(Debug, Parser)]
#[command(name = "CharterBooking", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,charter_core=trace`.
    /// Overrides the configured level.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the yacht, extra and payment catalog and exit.
    #[arg(long)]
    catalog: bool,
}

impl Cli {
    /// Folds command-line flags over the file settings.
    fn apply_overrides(
        &self,
        config: &mut AppConfig,
    ) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

// ─── catalog listing ─────────────────────────────────────────────────────────

fn print_catalog() {
    println!("Yachts");
    for yacht in yachts() {
        println!(
            "  {:<14} {:>6}  {:>8}  {}",
            yacht.name,
            yacht.size,
            format_currency(yacht.price),
            yacht.description
        );
    }

    println!("\nExtras");
    for extra in extras() {
        println!(
            "  {:<18} {:>10}  {}",
            extra.name,
            extra_price_label(extra),
            extra.description
        );
    }

    println!("\nPayment methods");
    for method in PaymentMethod::ALL {
        let badge = if method.is_popular() { " (most popular)" } else { "" };
        println!("  {:<18} {}{badge}", method.name(), method.description());
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    debug!(?cli, "parsed command line");

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_overrides(&mut config);
    logging::apply_config(&config.logging).context("applying logging configuration")?;

    if cli.catalog {
        print_catalog();
        return Ok(());
    }

    info!(month = %config.calendar.initial_month, "starting booking window");
    charter_ui::launch(config);
    Ok(())
}
