//! Marker descriptors handed to the map surface.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use vehicle_feed::{Severity, VehiclePosition, max_delay};

/// Callback run when a marker is activated on the map.
pub type SelectHandler = Arc<dyn Fn(&Arc<VehiclePosition>) + Send + Sync>;

/// Icon used to draw a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerIcon {
    /// Neutral icon for vehicles without a known trip.
    Default,

    /// Delay-tiered icon.
    Severity(Severity),
}

/// One vehicle, for one display cycle.
#[derive(Clone)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,

    /// Rotation in degrees, the vehicle's heading.
    pub rotation: f64,
    pub icon: MarkerIcon,
    pub title: String,

    /// Multi-line snippet shown alongside the marker.
    pub description: String,

    vehicle: Arc<VehiclePosition>,
    on_select: SelectHandler,
}

impl Marker {
    /// Build the marker for `vehicle`.
    #[must_use]
    pub fn new(vehicle: Arc<VehiclePosition>, on_select: SelectHandler) -> Self {
        let icon = vehicle.severity().map_or(MarkerIcon::Default, MarkerIcon::Severity);

        Self {
            lat: vehicle.lat,
            lon: vehicle.lon,
            rotation: vehicle.heading,
            icon,
            title: vehicle.title().to_string(),
            description: describe(&vehicle),
            vehicle,
            on_select,
        }
    }

    /// The vehicle this marker was built from.
    #[must_use]
    pub fn vehicle(&self) -> &Arc<VehiclePosition> {
        &self.vehicle
    }

    /// Activate the marker, e.g. when it is tapped.
    pub fn select(&self) {
        (self.on_select)(&self.vehicle);
    }
}

impl Debug for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marker")
            .field("vehicle_id", &self.vehicle.vehicle_id)
            .field("lat", &self.lat)
            .field("lon", &self.lon)
            .field("rotation", &self.rotation)
            .field("icon", &self.icon)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Marker snippet: motion, plus trip details and max delay when the vehicle
/// has a trip.
#[must_use]
pub fn describe(vehicle: &VehiclePosition) -> String {
    let mut lines =
        vec![format!("Speed: {} km/h", vehicle.speed), format!("Heading: {}°", vehicle.heading)];

    if let Some(trip) = &vehicle.trip {
        let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());

        lines.push(format!("Trip: {}", or_na(&trip.trip_short_name)));
        lines.push(format!("Destination: {}", or_na(&trip.trip_headsign)));
        lines.push(format!("Train name: {}", or_na(&trip.train_name)));
        lines.push(format!("Category: {}", or_na(&trip.train_category_name)));
        lines.push(format!("Max delay: {} sec", max_delay(vehicle)));
    }

    lines.join("\n")
}
