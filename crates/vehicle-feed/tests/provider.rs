#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use bytes::Bytes;
use http::{HeaderMap, Method, Request, Response, StatusCode};
use realtime::{Config, HttpRequest};

pub const ENDPOINT: &str = "http://localhost:8080/otp/routers/default/index/graphql";

#[derive(Clone)]
pub enum Reply {
    Body(StatusCode, Bytes),
    Unreachable,
}

/// Outbound request as seen by the mock.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Clone)]
pub struct MockProvider {
    reply: Reply,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockProvider {
    #[must_use]
    pub fn new(reply: Reply) -> Self {
        Self { reply, requests: Arc::new(Mutex::new(Vec::new())) }
    }

    #[must_use]
    pub fn ok(body: &'static [u8]) -> Self {
        Self::new(Reply::Body(StatusCode::OK, Bytes::from_static(body)))
    }

    #[allow(dead_code)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("should lock").clone()
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
    async fn fetch(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let recorded = Recorded {
            method: request.method().clone(),
            uri: request.uri().to_string(),
            headers: request.headers().clone(),
            body: request.into_body(),
        };
        self.requests.lock().map_err(|e| anyhow!("{e}"))?.push(recorded);

        match &self.reply {
            Reply::Body(status, body) => Response::builder()
                .status(*status)
                .body(body.clone())
                .context("failed to build response"),
            Reply::Unreachable => Err(anyhow!("connection refused")),
        }
    }
}
