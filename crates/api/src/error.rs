// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the boundary layer.

use lotlytics_client::ClientError;
use lotlytics_domain::DomainError;

/// Boundary-level errors.
///
/// These are distinct from domain/client errors and represent what a view
/// shows the user. Every variant resolves to a stable UI state: loading
/// cleared, message shown, form re-enabled. No error is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A field-level validation error; recoverable, blocks submission.
    Validation {
        /// The inline message to show next to the form.
        message: String,
    },
    /// The server answered with a non-success status.
    Server {
        /// The HTTP status code.
        status: u16,
        /// The server-reported message, or a generic fallback.
        message: String,
    },
    /// The request never completed (network/transport/decode failure).
    Network {
        /// The underlying failure description, for logs.
        message: String,
    },
    /// Login was rejected or could not be completed.
    CredentialsRejected,
}

impl ApiError {
    /// Returns the message a view should surface for this error.
    ///
    /// Network failures collapse to one generic message; their detail is
    /// for logs only.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message } | Self::Server { message, .. } => message.clone(),
            Self::Network { .. } => String::from("Something went wrong. Please try again."),
            Self::CredentialsRejected => {
                String::from("Invalid username or password. Please try again.")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message } => write!(f, "Validation failed: {message}"),
            Self::Server { status, message } => {
                write!(f, "Server error ({status}): {message}")
            }
            Self::Network { message } => write!(f, "Network error: {message}"),
            Self::CredentialsRejected => write!(f, "Login failed"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation {
            message: err.to_string(),
        }
    }
}

/// Translates a client error into a boundary error.
///
/// A structured server-reported message takes precedence over the generic
/// `Server Error {status}` fallback; transport and decode failures become
/// [`ApiError::Network`].
#[must_use]
pub fn translate_client_error(err: ClientError) -> ApiError {
    match err {
        ClientError::Status { status, error } => ApiError::Server {
            status,
            message: error.unwrap_or_else(|| format!("Server Error {status}")),
        },
        ClientError::Transport { message }
        | ClientError::Decode { message }
        | ClientError::InvalidUrl { message } => ApiError::Network { message },
    }
}
