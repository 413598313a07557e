//! Single entry point: configured endpoint in, decoded vehicles out.

use anyhow::Context;
use realtime::{Config, Provider, Result};
use tracing::debug;

use crate::client::fetch_feed;
use crate::decode::decode;
use crate::model::VehiclePosition;
use crate::query::VehicleQuery;

/// Configuration key holding the GraphQL endpoint URL.
pub const FEED_ENDPOINT: &str = "FEED_ENDPOINT";

/// Fetch and decode the current vehicle positions for `query`.
///
/// # Errors
///
/// Returns `Error::Transport` or `Error::Decode` from the client and decoder,
/// or `Error::ServerError` when the endpoint is not configured.
pub async fn vehicle_positions<P: Provider>(
    query: &VehicleQuery, provider: &P,
) -> Result<Vec<VehiclePosition>> {
    let endpoint =
        Config::get(provider, FEED_ENDPOINT).await.context("getting `FEED_ENDPOINT`")?;

    let text = fetch_feed(provider, &endpoint, query.to_payload()).await?;
    let vehicles = decode(&text)?;
    debug!(vehicles = vehicles.len(), endpoint = %endpoint, "decoded vehicle positions");

    Ok(vehicles)
}
