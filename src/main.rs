//! xupdate-size-hints
//!
//! Clears selected `WM_NORMAL_HINTS` flags on an X11 window (by default the
//! aspect ratio hint), so the window manager stops enforcing them.

mod cli;
mod config;
mod property;
mod updater;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Args;
use property::X11PropertyStore;
use updater::UpdateOutcome;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "xupdate_size_hints=info,warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    if args.help {
        cli::print_help();
        return Ok(());
    }
    if args.version {
        println!("xupdate-size-hints {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let window = args.window.context("--id is required (see --help)")?;

    let mut config = match &args.config_path {
        Some(path) => config::Config::load_from(path)?,
        None => config::Config::load().context("Failed to load configuration")?,
    };
    if let Some(clear) = args.clear {
        config.update.clear = clear;
    }
    if args.dry_run {
        config.update.dry_run = true;
    }

    let mut store = X11PropertyStore::connect()?;
    let outcome = updater::update_size_hints(&mut store, window, &config.property, &config.update)?;

    match outcome {
        UpdateOutcome::Unchanged { hints } => {
            info!(
                "No requested flags set on window 0x{:x}, leaving it alone (flags {:?})",
                window, hints.flags
            );
        }
        UpdateOutcome::WouldUpdate { before, after } => {
            info!(
                "Dry run: would clear {:?} on window 0x{:x} ({:?} -> {:?})",
                updater::pending_clears(&before, config.update.clear),
                window,
                before.flags,
                after.flags
            );
        }
        UpdateOutcome::Updated { before, after } => {
            info!(
                "Cleared {:?} on window 0x{:x} ({:?} -> {:?})",
                updater::pending_clears(&before, config.update.clear),
                window,
                before.flags,
                after.flags
            );
        }
    }

    Ok(())
}
