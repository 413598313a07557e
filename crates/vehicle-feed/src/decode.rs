//! Lenient decoding of the `vehiclePositions` GraphQL response.
//!
//! Upstream responses are often partial. A missing `data` or
//! `vehiclePositions` is treated as "no vehicles", missing optional fields
//! decode to `None`, and a single unusable record is skipped rather than
//! failing the whole response.

use realtime::{Result, decode as decode_error};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::model::{Trip, VehiclePosition};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Envelope {
    data: Option<Data>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Data {
    vehicle_positions: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawVehiclePosition {
    vehicle_id: Option<String>,
    label: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    speed: Option<f64>,
    heading: Option<f64>,
    trip: Option<Value>,
}

impl RawVehiclePosition {
    // A position without coordinates cannot be placed on the map.
    fn into_position(self, trip: Option<Trip>) -> Option<VehiclePosition> {
        Some(VehiclePosition {
            vehicle_id: self.vehicle_id.unwrap_or_default(),
            label: self.label,
            lat: self.lat?,
            lon: self.lon?,
            speed: self.speed.unwrap_or_default(),
            heading: self.heading.unwrap_or_default(),
            trip,
        })
    }
}

/// Decode a raw response into vehicle positions, in feed order.
///
/// # Errors
///
/// Returns `Error::Decode` when the text is not well-formed JSON or the
/// top-level value is not an object with an object-valued `data`.
pub fn decode(text: &str) -> Result<Vec<VehiclePosition>> {
    let root: Value = serde_json::from_str(text)?;
    if !root.is_object() {
        return Err(decode_error!("expected a JSON object, found {}", kind(&root)));
    }
    let envelope: Envelope = serde_json::from_value(root)?;

    for error in envelope.errors.unwrap_or_default() {
        warn!(monotonic_counter.graphql_errors = 1, error = %error.message, "upstream reported an error");
    }

    let records = envelope.data.and_then(|data| data.vehicle_positions).unwrap_or_default();
    let mut vehicles = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let mut raw = match serde_json::from_value::<RawVehiclePosition>(record) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(monotonic_counter.skipped_vehicles = 1, index, error = %e, "unreadable vehicle record");
                continue;
            }
        };

        let vehicle_id = raw.vehicle_id.clone().unwrap_or_default();

        // An unreadable trip only costs the vehicle its delay status.
        let trip = raw.trip.take().and_then(|value| match serde_json::from_value::<Trip>(value) {
            Ok(trip) => Some(trip),
            Err(e) => {
                warn!(monotonic_counter.unreadable_trips = 1, index, vehicle_id = %vehicle_id, error = %e, "unreadable trip");
                None
            }
        });

        let Some(vehicle) = raw.into_position(trip) else {
            warn!(monotonic_counter.skipped_vehicles = 1, index, vehicle_id = %vehicle_id, "vehicle has no coordinates");
            continue;
        };
        vehicles.push(vehicle);
    }

    Ok(vehicles)
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
