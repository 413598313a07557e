//! Vehicle detail panel shown when a marker is selected.

use std::fmt::{self, Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveTime;
use vehicle_feed::{StopTime, VehiclePosition, max_delay_minutes};

use crate::marker::SelectHandler;

const SECS_PER_DAY: i64 = 86_400;

/// Detail presentation collaborator, e.g. a dismissible bottom sheet.
pub trait DetailSurface {
    /// Show the detail of `vehicle`, replacing anything already shown.
    fn present(&mut self, vehicle: &VehiclePosition);

    /// Close the panel.
    fn dismiss(&mut self);
}

/// Presents a vehicle's detail, or closes it when the same vehicle is
/// selected again.
///
/// Vehicles are matched by feed identifier. Vehicles the feed left without
/// one only match the exact sample that was selected.
pub struct DetailToggle<D> {
    surface: D,
    shown: Option<Arc<VehiclePosition>>,
}

impl<D: DetailSurface> DetailToggle<D> {
    pub const fn new(surface: D) -> Self {
        Self { surface, shown: None }
    }

    pub fn activate(&mut self, vehicle: &Arc<VehiclePosition>) {
        if self.shown.as_ref().is_some_and(|shown| same_vehicle(shown, vehicle)) {
            self.surface.dismiss();
            self.shown = None;
        } else {
            self.surface.present(vehicle);
            self.shown = Some(Arc::clone(vehicle));
        }
    }

    /// The vehicle currently shown.
    #[must_use]
    pub fn shown(&self) -> Option<&VehiclePosition> {
        self.shown.as_deref()
    }

    /// Wrap the toggle in a marker selection handler.
    pub fn into_handler(self) -> SelectHandler
    where
        D: Send + 'static,
    {
        let toggle = Mutex::new(self);
        Arc::new(move |vehicle: &Arc<VehiclePosition>| {
            toggle.lock().unwrap_or_else(PoisonError::into_inner).activate(vehicle);
        })
    }
}

fn same_vehicle(a: &Arc<VehiclePosition>, b: &Arc<VehiclePosition>) -> bool {
    Arc::ptr_eq(a, b) || (!a.vehicle_id.is_empty() && a.vehicle_id == b.vehicle_id)
}

/// One row of the detail timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRow {
    pub scheduled: Option<NaiveTime>,
    pub realtime: Option<NaiveTime>,
    pub delay_secs: Option<i64>,
}

impl From<&StopTime> for TimetableRow {
    fn from(stop: &StopTime) -> Self {
        Self {
            scheduled: stop.scheduled_departure.or(stop.scheduled_arrival).and_then(clock_time),
            realtime: stop.realtime_departure.or(stop.realtime_arrival).and_then(clock_time),
            delay_secs: stop.worst_delay(),
        }
    }
}

/// Detail card content for a selected vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDetail {
    pub title: String,
    pub lines: Vec<String>,
    pub timetable: Vec<TimetableRow>,
}

impl VehicleDetail {
    #[must_use]
    pub fn new(vehicle: &VehiclePosition) -> Self {
        let motion =
            [format!("Speed: {} km/h", vehicle.speed), format!("Heading: {}°", vehicle.heading)];

        let Some(trip) = &vehicle.trip else {
            return Self {
                title: vehicle.title().to_string(),
                lines: motion.to_vec(),
                timetable: vec![],
            };
        };

        let or_na = |value: &Option<String>| value.as_deref().unwrap_or("N/A").to_string();
        let mut lines = vec![
            format!("Destination: {}", or_na(&trip.trip_headsign)),
            format!("Trip: {}", or_na(&trip.trip_short_name)),
            format!("Category: {}", or_na(&trip.train_category_name)),
        ];
        lines.extend(motion);
        lines.push(format!("Max delay: {} min", max_delay_minutes(vehicle)));

        Self {
            title: trip.train_name.clone().unwrap_or_else(|| "Unknown train".to_string()),
            lines,
            timetable: trip.stoptimes.iter().map(TimetableRow::from).collect(),
        }
    }
}

impl Display for VehicleDetail {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        for row in &self.timetable {
            let fmt_time =
                |time: Option<NaiveTime>| time.map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string());
            write!(f, "{} -> {}", fmt_time(row.scheduled), fmt_time(row.realtime))?;
            match row.delay_secs {
                Some(delay) if delay != 0 => writeln!(f, " ({delay:+} s)")?,
                _ => writeln!(f)?,
            }
        }
        Ok(())
    }
}

// Service-day seconds may run past midnight.
fn clock_time(secs: i64) -> Option<NaiveTime> {
    let secs = u32::try_from(secs.rem_euclid(SECS_PER_DAY)).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
}
