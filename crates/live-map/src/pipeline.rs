//! One fetch, decode, evaluate, display cycle.

use chrono::{DateTime, Utc};
use realtime::{Provider, Result};
use vehicle_feed::{Severity, VehiclePosition, VehicleQuery, vehicle_positions};

use crate::display::DisplayHandle;

/// Summary of a completed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub fetched_at: DateTime<Utc>,
    pub vehicles: usize,
    pub on_time: usize,
    pub minor: usize,
    pub major: usize,

    /// Vehicles without a trip, shown with the neutral icon.
    pub untracked: usize,

    /// Whether the display accepted the result. `false` once it has been torn
    /// down.
    pub delivered: bool,
}

impl CycleReport {
    fn tally(vehicles: &[VehiclePosition]) -> Self {
        let mut report = Self {
            fetched_at: Utc::now(),
            vehicles: vehicles.len(),
            on_time: 0,
            minor: 0,
            major: 0,
            untracked: 0,
            delivered: false,
        };

        for vehicle in vehicles {
            match vehicle.severity() {
                Some(Severity::OnTime) => report.on_time += 1,
                Some(Severity::Minor) => report.minor += 1,
                Some(Severity::Major) => report.major += 1,
                None => report.untracked += 1,
            }
        }
        report
    }
}

/// The synchronization pipeline, from the feed to the display.
pub struct SyncCycle<P> {
    provider: P,
    query: VehicleQuery,
    display: DisplayHandle,
}

impl<P: Provider> SyncCycle<P> {
    pub fn new(provider: P, query: VehicleQuery, display: DisplayHandle) -> Self {
        Self { provider, query, display }
    }

    /// Run a single cycle.
    ///
    /// The display is only touched when the fetch and decode succeed, so a
    /// failed cycle leaves the previous markers in place.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` or `Error::Decode` from the feed.
    pub async fn run_once(&self) -> Result<CycleReport> {
        let vehicles = vehicle_positions(&self.query, &self.provider).await?;

        let mut report = CycleReport::tally(&vehicles);
        report.delivered = self.display.sync(vehicles).await;

        Ok(report)
    }
}
