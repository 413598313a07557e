//! # Vehicle Feed
//!
//! Fetches live rail vehicle positions from the OTP GraphQL endpoint and
//! decodes them into [`VehiclePosition`]s with a derived delay status.

mod client;
mod decode;
mod delay;
mod feed;
mod model;
mod query;

pub use self::client::*;
pub use self::decode::decode;
pub use self::delay::*;
pub use self::feed::*;
pub use self::model::*;
pub use self::query::*;
