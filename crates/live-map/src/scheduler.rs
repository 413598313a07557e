//! Fixed-delay scheduling of synchronization cycles.

use std::time::Duration;

use realtime::Provider;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{error, info};

use crate::SERVICE;
use crate::pipeline::SyncCycle;

/// Time between the end of one cycle and the start of the next.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(60);

/// Drives [`SyncCycle`]s: the first immediately, each following one a full
/// period after the previous one finished. Cycles never overlap.
pub struct Scheduler<P> {
    cycle: SyncCycle<P>,
    period: Duration,
}

impl<P: Provider + 'static> Scheduler<P> {
    pub const fn new(cycle: SyncCycle<P>, period: Duration) -> Self {
        Self { cycle, period }
    }

    /// Spawn the schedule on the current runtime.
    #[must_use]
    pub fn start(self) -> SchedulerHandle {
        info!(service = %SERVICE, period_secs = self.period.as_secs(), "starting vehicle sync");
        SchedulerHandle { task: tokio::spawn(self.run()) }
    }

    /// Run cycles until the task is cancelled.
    pub async fn run(self) {
        loop {
            self.tick().await;
            time::sleep(self.period).await;
        }
    }

    // A failed cycle is logged and does not stop the schedule.
    async fn tick(&self) {
        match self.cycle.run_once().await {
            Ok(report) => {
                info!(
                    monotonic_counter.sync_cycles = 1,
                    vehicles = report.vehicles,
                    on_time = report.on_time,
                    minor = report.minor,
                    major = report.major,
                    untracked = report.untracked,
                    delivered = report.delivered,
                    service = %SERVICE,
                    "vehicle positions synchronized"
                );
            }
            Err(e) => {
                error!(
                    monotonic_counter.processing_errors = 1,
                    code = e.code(),
                    error = %e,
                    service = %SERVICE,
                    "sync cycle failed, keeping previous markers"
                );
            }
        }
    }
}

/// Handle to a running schedule. Dropping it cancels the schedule.
#[derive(Debug)]
pub struct SchedulerHandle {
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Cancel the schedule immediately. An in-flight cycle is abandoned at its
    /// next suspension point.
    pub fn shutdown(self) {
        drop(self);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
