//! Delay status derived from a trip's stop-times.

use std::fmt::{self, Display, Formatter};

use crate::model::{StopTime, VehiclePosition};

/// Largest delay, in seconds, still shown as a minor delay.
pub const MINOR_DELAY_LIMIT_SECS: i64 = 300;

/// Delay severity tier used to style a vehicle's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// On time or early.
    OnTime,

    /// Late by at most five minutes.
    Minor,

    /// Late by more than five minutes.
    Major,
}

impl Severity {
    /// Map a delay in seconds onto its tier.
    #[must_use]
    pub const fn from_delay(delay_secs: i64) -> Self {
        if delay_secs <= 0 {
            Self::OnTime
        } else if delay_secs <= MINOR_DELAY_LIMIT_SECS {
            Self::Minor
        } else {
            Self::Major
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTime => "on-time",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StopTime {
    /// The larger of the arrival and departure delay, if either is known.
    #[must_use]
    pub fn worst_delay(&self) -> Option<i64> {
        self.arrival_delay.max(self.departure_delay)
    }
}

/// Worst delay, in seconds, across all stop-times of the vehicle's trip.
///
/// Returns 0 when the vehicle has no trip, the trip has no stop-times, or no
/// stop-time reports a delay. Early running is kept as a negative value.
#[must_use]
pub fn max_delay(vehicle: &VehiclePosition) -> i64 {
    vehicle
        .trip
        .as_ref()
        .and_then(|trip| trip.stoptimes.iter().filter_map(StopTime::worst_delay).max())
        .unwrap_or(0)
}

/// [`max_delay`] in whole minutes, truncated toward zero.
#[must_use]
pub fn max_delay_minutes(vehicle: &VehiclePosition) -> i64 {
    max_delay(vehicle) / 60
}

impl VehiclePosition {
    /// See [`max_delay`].
    #[must_use]
    pub fn max_delay(&self) -> i64 {
        max_delay(self)
    }

    /// Severity tier of the vehicle, or `None` when it has no trip and so no
    /// delay status.
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.trip.as_ref().map(|_| Severity::from_delay(self.max_delay()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Trip;

    fn stop(arrival: i64, departure: i64) -> StopTime {
        StopTime {
            arrival_delay: Some(arrival),
            departure_delay: Some(departure),
            ..StopTime::default()
        }
    }

    fn with_stops(stoptimes: Vec<StopTime>) -> VehiclePosition {
        VehiclePosition {
            vehicle_id: "V1".to_string(),
            lat: 47.5,
            lon: 19.0,
            speed: 80.0,
            heading: 90.0,
            trip: Some(Trip { stoptimes, ..Trip::default() }),
            ..VehiclePosition::default()
        }
    }

    #[test]
    fn tiers() {
        assert_eq!(Severity::from_delay(-50), Severity::OnTime);
        assert_eq!(Severity::from_delay(0), Severity::OnTime);
        assert_eq!(Severity::from_delay(1), Severity::Minor);
        assert_eq!(Severity::from_delay(300), Severity::Minor);
        assert_eq!(Severity::from_delay(301), Severity::Major);
        assert_eq!(Severity::Major.to_string(), "major");
    }

    #[test]
    fn no_trip() {
        let vehicle = VehiclePosition::default();
        assert_eq!(max_delay(&vehicle), 0);
        assert_eq!(vehicle.severity(), None);
    }

    #[test]
    fn empty_stoptimes() {
        let vehicle = with_stops(vec![]);
        assert_eq!(max_delay(&vehicle), 0);
        assert_eq!(vehicle.severity(), Some(Severity::OnTime));
    }

    #[test]
    fn worst_of_arrival_and_departure() {
        let vehicle = with_stops(vec![stop(120, 400)]);
        assert_eq!(max_delay(&vehicle), 400);
        assert_eq!(vehicle.severity(), Some(Severity::Major));

        let vehicle = with_stops(vec![stop(0, 30), stop(240, 180), stop(60, 60)]);
        assert_eq!(max_delay(&vehicle), 240);
        assert_eq!(vehicle.severity(), Some(Severity::Minor));
        assert_eq!(max_delay_minutes(&vehicle), 4);
    }

    // Early running is reported as is, and still maps to on-time.
    #[test]
    fn early_running() {
        let vehicle = with_stops(vec![stop(-120, -90), stop(-50, -60)]);
        assert_eq!(max_delay(&vehicle), -50);
        assert_eq!(vehicle.severity(), Some(Severity::OnTime));
    }

    #[test]
    fn missing_delays() {
        let partial = StopTime { departure_delay: Some(75), ..StopTime::default() };
        let vehicle = with_stops(vec![StopTime::default(), partial]);
        assert_eq!(max_delay(&vehicle), 75);

        let vehicle = with_stops(vec![StopTime::default()]);
        assert_eq!(max_delay(&vehicle), 0);
    }
}
