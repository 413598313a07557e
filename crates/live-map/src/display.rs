//! # Display actor
//!
//! The map surface is not safe for concurrent mutation. It is owned by a
//! single actor that applies vehicle lists sent over a channel, so marker
//! replacement and repaint only ever happen in one place.

use std::thread;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info};
use vehicle_feed::VehiclePosition;

use crate::SERVICE;
use crate::marker::SelectHandler;
use crate::overlay::{MapSurface, OverlaySync};

const QUEUE_DEPTH: usize = 2;

/// Sending side of the display actor. Cheap to clone.
#[derive(Debug, Clone)]
pub struct DisplayHandle {
    tx: mpsc::Sender<Vec<VehiclePosition>>,
}

impl DisplayHandle {
    /// Create a handle and the receiver to pass to [`run_display`].
    #[must_use]
    pub fn channel() -> (Self, mpsc::Receiver<Vec<VehiclePosition>>) {
        let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
        (Self { tx }, rx)
    }

    /// Hand a vehicle list to the display.
    ///
    /// Returns `false` when the display has been torn down; the list is then
    /// dropped.
    pub async fn sync(&self, vehicles: Vec<VehiclePosition>) -> bool {
        if self.tx.send(vehicles).await.is_err() {
            debug!("display closed, dropping vehicle list");
            return false;
        }
        true
    }
}

/// Apply vehicle lists until every [`DisplayHandle`] is dropped, then return
/// the overlay.
///
/// Only the newest of the lists waiting in the queue is shown; older ones are
/// skipped.
pub async fn run_display<M: MapSurface>(
    mut rx: mpsc::Receiver<Vec<VehiclePosition>>, mut overlay: OverlaySync<M>,
) -> OverlaySync<M> {
    while let Some(mut vehicles) = rx.recv().await {
        let mut skipped = 0_usize;
        while let Ok(newer) = rx.try_recv() {
            vehicles = newer;
            skipped += 1;
        }
        if skipped > 0 {
            debug!(skipped, "superseded vehicle lists skipped");
        }
        overlay.sync(vehicles);
    }

    info!(service = %SERVICE, "display actor stopped");
    overlay
}

/// Run the display actor on a dedicated thread.
///
/// The surface is built on that thread by `make_surface` and never leaves
/// it. The thread exits once every [`DisplayHandle`] has been dropped.
///
/// # Errors
///
/// Returns an error if the thread or its runtime cannot be started.
pub fn start_display_thread<M, F>(
    make_surface: F, on_select: SelectHandler,
) -> Result<(DisplayHandle, thread::JoinHandle<()>)>
where
    M: MapSurface + 'static,
    F: FnOnce() -> M + Send + 'static,
{
    let (handle, rx) = DisplayHandle::channel();
    let (started_tx, started_rx) = std::sync::mpsc::channel();

    let thread = thread::Builder::new()
        .name("display".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread().build() {
                Ok(runtime) => runtime,
                Err(e) => {
                    let _ = started_tx.send(Err(e));
                    return;
                }
            };
            let _ = started_tx.send(Ok(()));

            let overlay = OverlaySync::new(make_surface(), on_select);
            runtime.block_on(run_display(rx, overlay));
        })
        .context("spawning display thread")?;

    started_rx
        .recv()
        .context("display thread exited during startup")?
        .context("building display runtime")?;

    Ok((handle, thread))
}
