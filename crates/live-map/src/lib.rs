//! # Live Map
//!
//! Keeps a map surface in step with the live vehicle feed: one marker per
//! vehicle, styled by delay severity, refreshed on a fixed-delay schedule.
//!
//! Display mutation happens only inside the display actor (see [`display`]),
//! which owns the [`MapSurface`]. Network and decode work run on the
//! scheduler's task and hand finished vehicle lists to the actor.

pub mod detail;
pub mod display;
mod marker;
mod overlay;
mod pipeline;
mod scheduler;

pub use self::detail::{DetailSurface, DetailToggle, VehicleDetail};
pub use self::display::{DisplayHandle, run_display, start_display_thread};
pub use self::marker::*;
pub use self::overlay::*;
pub use self::pipeline::*;
pub use self::scheduler::*;

/// Service name attached to log records.
pub const SERVICE: &str = "vonatrack";
