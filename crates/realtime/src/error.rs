//! Live map errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = anyhow::Result<T, Error>;

/// Domain level error type returned by a synchronization cycle.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Error {
    /// The HTTP exchange could not complete or returned a non-success status.
    #[error("code: transport_error, description: {0}")]
    Transport(String),

    /// The response payload is malformed.
    #[error("code: decode_error, description: {0}")]
    Decode(String),

    /// A non recoverable internal error occurred.
    #[error("code: server_error, description: {0}")]
    ServerError(String),
}

impl Error {
    /// Returns the stable error code associated with the variant.
    #[must_use]
    pub const fn code(&self) -> &str {
        match self {
            Self::Transport(_) => "transport_error",
            Self::Decode(_) => "decode_error",
            Self::ServerError(_) => "server_error",
        }
    }

    /// Returns the error description.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Whether the error originated in the network exchange.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        // if type is Error, return it with the newly added context
        if let Some(inner) = err.downcast_ref::<Self>() {
            tracing::debug!("Error: {err}, caused by: {inner}");

            return match inner {
                Self::Transport(e) => Self::Transport(format!("{err}: {e}")),
                Self::Decode(e) => Self::Decode(format!("{err}: {e}")),
                Self::ServerError(e) => Self::ServerError(format!("{err}: {e}")),
            };
        }

        let chain = err.chain().map(ToString::to_string).collect::<Vec<_>>().join(" -> ");
        Self::ServerError(chain)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[macro_export]
macro_rules! transport {
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::Transport(format!($fmt, $($arg)*))
    };
     ($err:expr $(,)?) => {
        $crate::Error::Transport(format!($err))
    };
}

#[macro_export]
macro_rules! decode {
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::Decode(format!($fmt, $($arg)*))
    };
     ($err:expr $(,)?) => {
        $crate::Error::Decode(format!($err))
    };
}
