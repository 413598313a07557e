//! # VonaTrack
//!
//! Follows live rail vehicle positions over Hungary and keeps a map overlay in
//! step with them. Runs head-less, logging the marker set after every cycle.

mod config;
mod provider;
mod surface;

use anyhow::{Context, Result, anyhow};
use live_map::{DetailToggle, Scheduler, SERVICE, SyncCycle, start_display_thread};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};
use vehicle_feed::VehicleQuery;

use crate::provider::AppContext;
use crate::surface::{LogDetail, LogSurface};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    Registry::default().with(filter).with(fmt::layer()).init();

    let endpoint = config::get_feed_endpoint();
    let period = config::get_refresh_interval();
    let provider = AppContext::new(endpoint.clone(), config::get_request_timeout())?;
    info!(service = %SERVICE, endpoint = %endpoint, "starting");

    let on_select = DetailToggle::new(LogDetail).into_handler();
    let (display, display_thread) = start_display_thread(LogSurface::default, on_select)?;

    let cycle = SyncCycle::new(provider, VehicleQuery::default(), display);
    let scheduler = Scheduler::new(cycle, period).start();

    tokio::signal::ctrl_c().await.context("waiting for ctrl-c")?;
    info!(service = %SERVICE, "shutting down");

    // Cancelling the schedule drops the last display handle, which stops the
    // display thread.
    scheduler.shutdown();
    tokio::task::spawn_blocking(move || display_thread.join())
        .await
        .context("joining display thread")?
        .map_err(|panic| anyhow!("display thread panicked: {panic:?}"))?;

    Ok(())
}
