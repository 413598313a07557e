use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use bytes::Bytes;
use http::{Request, Response};
use realtime::{Config, HttpRequest};
use vehicle_feed::FEED_ENDPOINT;

const USER_AGENT: &str = concat!("vonatrack/", env!("CARGO_PKG_VERSION"));

/// Host provider backed by `reqwest` and environment configuration.
#[derive(Debug, Clone)]
pub struct AppContext {
    client: reqwest::Client,
    endpoint: String,
}

impl AppContext {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("building http client")?;

        Ok(Self { client, endpoint })
    }
}

impl HttpRequest for AppContext {
    async fn fetch(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "sending request");

        let request = reqwest::Request::try_from(request).context("converting request")?;
        let response = self.client.execute(request).await.context("sending request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.context("reading response body")?;

        let mut reply = Response::new(body);
        *reply.status_mut() = status;
        *reply.headers_mut() = headers;
        Ok(reply)
    }
}

impl Config for AppContext {
    async fn get(&self, key: &str) -> Result<String> {
        match key {
            FEED_ENDPOINT => Ok(self.endpoint.clone()),
            _ => Err(anyhow!("unknown config key: {key}")),
        }
    }
}
