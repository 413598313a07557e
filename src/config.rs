use std::env::{self, VarError};
use std::time::Duration;

const DEFAULT_FEED_ENDPOINT: &str =
    "https://emma.mav.hu/otp2-backend/otp/routers/default/index/graphql";
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub fn get_feed_endpoint() -> String {
    env::var("FEED_ENDPOINT").unwrap_or_else(|_| {
        let default = DEFAULT_FEED_ENDPOINT.to_string();
        tracing::trace!("FEED_ENDPOINT not set, using default: {default}");
        default
    })
}

pub fn get_refresh_interval() -> Duration {
    secs("REFRESH_INTERVAL_SECS", env::var("REFRESH_INTERVAL_SECS"), DEFAULT_REFRESH_INTERVAL_SECS)
}

pub fn get_request_timeout() -> Duration {
    secs("REQUEST_TIMEOUT_SECS", env::var("REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS)
}

// Zero is rejected along with anything that is not a whole number of seconds.
fn secs(key: &str, value: Result<String, VarError>, default: u64) -> Duration {
    let Ok(value) = value else {
        tracing::trace!("{key} not set, using default: {default}");
        return Duration::from_secs(default);
    };

    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            tracing::warn!("{key} is not a positive number of seconds: {value:?}, using default: {default}");
            Duration::from_secs(default)
        }
    }
}
