//! GraphQL query for vehicles inside a bounding box.

use std::fmt::{self, Display, Formatter};

use bytes::Bytes;
use serde_json::json;

/// Geographic area to request vehicles for, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub sw_lat: f64,
    pub sw_lon: f64,
    pub ne_lat: f64,
    pub ne_lon: f64,
}

impl BoundingBox {
    /// Hungary, with a small margin around the national border.
    pub const HUNGARY: Self = Self { sw_lat: 45.5, sw_lon: 16.1, ne_lat: 48.7, ne_lon: 22.8 };
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::HUNGARY
    }
}

/// OTP transport mode filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Rail,
    RailReplacementBus,
}

impl TransportMode {
    /// GraphQL enum literal for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rail => "RAIL",
            Self::RailReplacementBus => "RAIL_REPLACEMENT_BUS",
        }
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SELECTION: &str = "
    trip {
      gtfsId
      tripShortName
      tripHeadsign
      trainName
      trainCategoryName
      stoptimes {
        arrivalDelay
        departureDelay
        realtimeArrival
        realtimeDeparture
        scheduledArrival
        scheduledDeparture
      }
    }
    vehicleId
    lat
    lon
    label
    speed
    heading
";

/// Request for all vehicles of the given modes within a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleQuery {
    pub bbox: BoundingBox,
    pub modes: Vec<TransportMode>,
}

impl Default for VehicleQuery {
    fn default() -> Self {
        Self {
            bbox: BoundingBox::HUNGARY,
            modes: vec![TransportMode::Rail, TransportMode::RailReplacementBus],
        }
    }
}

impl VehicleQuery {
    /// The GraphQL document, compacted to a single line.
    #[must_use]
    pub fn document(&self) -> String {
        let BoundingBox { sw_lat, sw_lon, ne_lat, ne_lon } = self.bbox;
        let modes = self.modes.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");

        let document = format!(
            "{{ vehiclePositions(swLat: {sw_lat}, swLon: {sw_lon}, neLat: {ne_lat}, \
             neLon: {ne_lon}, modes: [{modes}]) {{ {SELECTION} }} }}"
        );
        document.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Wire encoding of the request: `{"query": "<document>"}`.
    #[must_use]
    pub fn to_payload(&self) -> Bytes {
        Bytes::from(json!({ "query": self.document() }).to_string())
    }
}
