#![allow(missing_docs)]
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use live_map::{MapSurface, Marker};
use realtime::{Config, HttpRequest};
use tokio::time::Instant;

pub const ENDPOINT: &str = "http://localhost:8080/otp/routers/default/index/graphql";
pub const FEED: &[u8] = include_bytes!("../../vehicle-feed/data/vehicle-positions.json");

#[derive(Clone)]
pub enum Reply {
    Body(StatusCode, Bytes),
    Unreachable,
}

impl Reply {
    #[must_use]
    pub const fn ok(body: &'static [u8]) -> Self {
        Self::Body(StatusCode::OK, Bytes::from_static(body))
    }
}

/// Serves scripted replies in order. The last reply repeats.
#[derive(Clone)]
pub struct MockProvider {
    script: Arc<Mutex<VecDeque<Reply>>>,
    latency: Duration,
    fetches: Arc<Mutex<Vec<Instant>>>,
}

impl MockProvider {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into_iter().collect())),
            latency: Duration::ZERO,
            fetches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Delay every response by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Instants at which each fetch started.
    #[must_use]
    pub fn fetches(&self) -> Vec<Instant> {
        self.fetches.lock().expect("should lock").clone()
    }

    fn next_reply(&self) -> Result<Reply> {
        let mut script = self.script.lock().map_err(|e| anyhow!("{e}"))?;
        let reply = if script.len() > 1 { script.pop_front() } else { script.front().cloned() };
        reply.context("no scripted reply")
    }
}

impl Config for MockProvider {
    async fn get(&self, key: &str) -> Result<String> {
        match key {
            "FEED_ENDPOINT" => Ok(ENDPOINT.to_string()),
            _ => Err(anyhow!("unknown config key: {key}")),
        }
    }
}

impl HttpRequest for MockProvider {
    async fn fetch(&self, _request: Request<Bytes>) -> Result<Response<Bytes>> {
        self.fetches.lock().map_err(|e| anyhow!("{e}"))?.push(Instant::now());
        let reply = self.next_reply()?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match reply {
            Reply::Body(status, body) => {
                Response::builder().status(status).body(body).context("failed to build response")
            }
            Reply::Unreachable => Err(anyhow!("connection refused")),
        }
    }
}

#[derive(Default)]
pub struct SurfaceState {
    pub markers: Vec<Marker>,
    pub clears: usize,
    pub repaints: usize,
}

/// Map surface that records what it was asked to show.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn vehicle_ids(&self) -> Vec<String> {
        let state = self.state.lock().expect("should lock");
        state.markers.iter().map(|m| m.vehicle().vehicle_id.clone()).collect()
    }

    pub fn with<T>(&self, f: impl FnOnce(&SurfaceState) -> T) -> T {
        f(&self.state.lock().expect("should lock"))
    }
}

impl MapSurface for RecordingSurface {
    fn clear(&mut self) {
        let mut state = self.state.lock().expect("should lock");
        state.markers.clear();
        state.clears += 1;
    }

    fn add(&mut self, marker: Marker) {
        self.state.lock().expect("should lock").markers.push(marker);
    }

    fn repaint(&mut self) {
        self.state.lock().expect("should lock").repaints += 1;
    }
}
