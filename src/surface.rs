//! Log-backed stand-ins for the map and the detail sheet.

use live_map::{DetailSurface, MapSurface, Marker, MarkerIcon, VehicleDetail};
use tracing::{debug, info};
use vehicle_feed::VehiclePosition;

/// Map surface that writes the marker set to the log on each repaint.
#[derive(Debug, Default)]
pub struct LogSurface {
    markers: Vec<Marker>,
}

impl MapSurface for LogSurface {
    fn clear(&mut self) {
        self.markers.clear();
    }

    fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn repaint(&mut self) {
        for marker in &self.markers {
            debug!(
                vehicle_id = %marker.vehicle().vehicle_id,
                title = %marker.title,
                lat = marker.lat,
                lon = marker.lon,
                rotation = marker.rotation,
                icon = icon_name(marker.icon),
                "marker"
            );
        }
        info!(markers = self.markers.len(), "map repainted");
    }
}

fn icon_name(icon: MarkerIcon) -> &'static str {
    match icon {
        MarkerIcon::Default => "default",
        MarkerIcon::Severity(severity) => severity.as_str(),
    }
}

/// Detail sheet that logs the selected vehicle.
#[derive(Debug, Default)]
pub struct LogDetail;

impl DetailSurface for LogDetail {
    fn present(&mut self, vehicle: &VehiclePosition) {
        info!(vehicle_id = %vehicle.vehicle_id, "vehicle detail\n{}", VehicleDetail::new(vehicle));
    }

    fn dismiss(&mut self) {
        info!("vehicle detail dismissed");
    }
}
