//! Vehicle position data types, as returned by the OTP `vehiclePositions`
//! query.

use serde::{Deserialize, Deserializer};

/// One real-time sample of a tracked vehicle's location and motion.
///
/// Built fresh every fetch cycle and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehiclePosition {
    /// Feed identifier of the vehicle. Empty when the feed omits it.
    pub vehicle_id: String,

    /// Display label, e.g. the vehicle's fleet number.
    pub label: Option<String>,

    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lon: f64,

    /// Speed as reported by the feed (km/h).
    pub speed: f64,

    /// Heading in degrees, 0-360.
    pub heading: f64,

    /// The trip the vehicle is currently operating, if known.
    pub trip: Option<Trip>,
}

/// The scheduled service a vehicle is operating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trip {
    pub gtfs_id: Option<String>,
    pub trip_short_name: Option<String>,
    pub trip_headsign: Option<String>,
    pub train_name: Option<String>,
    pub train_category_name: Option<String>,

    /// Stop-times in stop sequence order.
    #[serde(deserialize_with = "present_entries")]
    pub stoptimes: Vec<StopTime>,
}

/// Scheduled and real-time arrival/departure at one stop along a trip.
///
/// Times are seconds since midnight of the service day, delays are signed
/// seconds (negative means early).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StopTime {
    pub arrival_delay: Option<i64>,
    pub departure_delay: Option<i64>,
    pub scheduled_arrival: Option<i64>,
    pub scheduled_departure: Option<i64>,
    pub realtime_arrival: Option<i64>,
    pub realtime_departure: Option<i64>,
}

impl VehiclePosition {
    /// Label to show for the vehicle, falling back to a generic title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.label.as_deref().filter(|label| !label.trim().is_empty()).unwrap_or("Vehicle")
    }
}

// A `null` list reads as empty and `null` entries are dropped.
fn present_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().flatten().collect())
}
