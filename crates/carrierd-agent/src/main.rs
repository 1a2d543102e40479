//! carrierd agent
//!
//! Background daemon that detects the carrier currently providing mobile
//! data and publishes it as a persistent low-priority status notification,
//! refreshed on a fixed interval.
//!
//! - Reads modem state from ModemManager (`mmcli`), or fakes it with `--simulate`
//! - Publishes through `notify-send`, or just logs with `--dry-run`
//! - Optionally serves a read-only HTTP status portal

mod lookup;
mod notify;
mod portal;
mod scheduler;
mod service;
mod telephony;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carrierd_common::config::ServiceConfig;

use crate::notify::{DesktopSink, LogSink, NotificationSink};
use crate::scheduler::RefreshScheduler;
use crate::service::{CarrierStatusService, StatusReporter};
use crate::telephony::{ModemManagerTelephony, SimulatedTelephony, TelephonyProvider};

/// carrierd status daemon.
#[derive(Parser, Debug)]
#[command(name = "carrierd-agent", about = "Publishes the active mobile-data carrier as a status notification")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run with a simulated modem (no ModemManager needed).
    #[arg(long, default_value_t = false)]
    simulate: bool,

    /// Log notifications instead of sending them to the desktop.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Refresh interval override in milliseconds.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Locale override for display strings (en, ja).
    #[arg(long)]
    locale: Option<String>,

    /// Status portal listen address, e.g. 127.0.0.1:3002.
    #[arg(long)]
    status_addr: Option<SocketAddr>,

    /// Perform a single refresh, print the result, and exit.
    #[arg(long, default_value_t = false)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(ms) = cli.interval_ms {
        config.refresh_interval_ms = ms;
    }
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }
    let strings = config.display_strings();

    tracing::info!(
        simulate = cli.simulate,
        dry_run = cli.dry_run,
        interval_ms = config.refresh_interval_ms,
        locale = %config.locale,
        "carrierd-agent starting"
    );

    let telephony: Arc<dyn TelephonyProvider> = if cli.simulate {
        Arc::new(SimulatedTelephony::random())
    } else {
        Arc::new(ModemManagerTelephony::new())
    };
    let sink: Arc<dyn NotificationSink> = if cli.dry_run {
        Arc::new(LogSink)
    } else {
        Arc::new(DesktopSink)
    };

    let service = Arc::new(CarrierStatusService::new(
        config.clone(),
        strings,
        telephony,
        sink,
    ));

    if cli.once {
        service.on_start()?;
        if let Some(status) = service.snapshot() {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        service.on_stop();
        return Ok(());
    }

    let scheduler = Arc::new(RefreshScheduler::new(config.refresh_interval()));
    scheduler.start(service.clone()).await;

    if let Some(addr) = cli.status_addr {
        let portal_state = Arc::new(portal::PortalState {
            service: service.clone(),
            scheduler: scheduler.clone(),
            simulate: cli.simulate,
            started_at: Instant::now(),
        });
        tokio::spawn(async move {
            if let Err(e) = portal::serve(portal_state, addr).await {
                tracing::error!(error = %e, "status portal failed");
            }
        });
    }

    tokio::signal::ctrl_c().await?;
    tracing::info!("received SIGINT, shutting down");
    scheduler.stop().await;
    tracing::info!("carrierd-agent stopped");
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<ServiceConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = toml::from_str(&raw)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(config)
}
