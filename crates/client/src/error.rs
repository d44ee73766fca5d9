// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the HTTP boundary.

use serde::Deserialize;
use thiserror::Error;

/// A structured error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    /// The server-reported error message.
    error: String,
}

/// Errors raised by backend and geocoder calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response (DNS, connection, TLS).
    #[error("Request failed: {message}")]
    Transport {
        /// The underlying transport error description.
        message: String,
    },
    /// The server answered with a non-success status.
    ///
    /// The `Display` form is the generic fallback; a structured
    /// server-reported message, when one was parsable, is available via
    /// [`ClientError::server_message`] and takes precedence for display.
    #[error("Server Error {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The server-reported `{"error": ...}` message, if parsable.
        error: Option<String>,
    },
    /// The response body could not be decoded as the expected JSON.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// The underlying decode error description.
        message: String,
    },
    /// The configured base URL cannot be used to build endpoints.
    #[error("Invalid base URL: {message}")]
    InvalidUrl {
        /// What was wrong with the URL.
        message: String,
    },
}

impl ClientError {
    /// Returns the structured server-reported message, if this is a status
    /// error whose body carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl {
            message: err.to_string(),
        }
    }
}

/// Builds a status error from a response body, extracting the structured
/// `{"error": ...}` message when the body parses as one.
pub(crate) fn status_error(status: u16, body: &str) -> ClientError {
    let error: Option<String> = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error);
    ClientError::Status { status, error }
}
