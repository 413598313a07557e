//! # Realtime Core
//!
//! Errors and external data interfaces shared by the live map crates.

mod error;
mod provider;

pub use crate::error::*;
pub use crate::provider::*;
