// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication state propagation and account flows.

use tracing::{info, warn};

use crate::error::{ApiError, translate_client_error};
use lotlytics::AuthState;
use lotlytics_client::{BackendClient, ClientError, CreateAccountPayload, LoginPayload};
use lotlytics_domain::{AuthUser, validate_account_fields};

/// Owns the process-wide authentication state.
///
/// This is an explicitly injected container, not a module-level singleton:
/// construct one `AuthService`, pass it through the component graph, and
/// let every view read [`AuthService::state`]. The service's own fetch
/// routines are the single writer.
///
/// `refresh` is idempotent with last-call-wins semantics: each completed
/// fetch replaces the state wholesale, never merges into it.
#[derive(Debug)]
pub struct AuthService {
    client: BackendClient,
    state: AuthState,
}

impl AuthService {
    /// Creates a service in the loading state.
    ///
    /// Callers are expected to run [`AuthService::refresh`] once
    /// immediately after construction, mirroring a provider's on-mount
    /// fetch.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self {
            client,
            state: AuthState::loading(),
        }
    }

    /// Returns the current authentication state.
    #[must_use]
    pub const fn state(&self) -> &AuthState {
        &self.state
    }

    /// Returns the backend client, whose cookie jar carries the session.
    #[must_use]
    pub const fn client(&self) -> &BackendClient {
        &self.client
    }

    /// Re-runs the current-user fetch and updates the state.
    ///
    /// Success with a parsable user body resolves to authenticated; any
    /// non-success status or transport error resolves to anonymous. Errors
    /// are swallowed and logged here, never propagated: an unauthenticated
    /// session is a normal outcome, not a failure of the caller.
    pub async fn refresh(&mut self) {
        self.state = AuthState::loading();
        let outcome: Result<AuthUser, ClientError> = self.client.current_user().await;
        self.apply_refresh(outcome);
    }

    /// Applies a completed current-user fetch to the state.
    pub fn apply_refresh(&mut self, outcome: Result<AuthUser, ClientError>) {
        match outcome {
            Ok(user) => {
                info!(username = %user.username, "session authenticated");
                self.state = AuthState::authenticated(user);
            }
            Err(error) => {
                warn!(%error, "failed to fetch user status");
                self.state = AuthState::anonymous();
            }
        }
    }

    /// Logs in and refreshes the authentication state.
    ///
    /// # Errors
    ///
    /// Any failure, whether rejected credentials or transport, maps to
    /// [`ApiError::CredentialsRejected`]; the reason is logged but not
    /// surfaced to the user.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ApiError> {
        let payload: LoginPayload = LoginPayload {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        if let Err(error) = self.client.login(&payload).await {
            warn!(%error, "login failed");
            return Err(ApiError::CredentialsRejected);
        }
        self.refresh().await;
        Ok(())
    }

    /// Logs out and resets the state to anonymous.
    ///
    /// # Errors
    ///
    /// Returns a server or network error; the local state is reset only
    /// when the backend confirmed the logout.
    pub async fn logout(&mut self) -> Result<(), ApiError> {
        self.client.logout().await.map_err(translate_client_error)?;
        self.state = AuthState::anonymous();
        Ok(())
    }

    /// Creates an account and logs the new user straight in.
    ///
    /// Fields are validated client-side first. A non-2xx response with a
    /// structured `{"error": ...}` body surfaces that message; a
    /// non-JSON body falls back to a generic create-account failure.
    ///
    /// # Errors
    ///
    /// Returns a validation error for rejected fields, a server error for
    /// backend rejections, a network error for transport failures, or
    /// `CredentialsRejected` if the follow-up login failed.
    pub async fn create_account(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        validate_account_fields(username, password)?;

        let payload: CreateAccountPayload = CreateAccountPayload {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        if let Err(error) = self.client.create_account(&payload).await {
            return Err(translate_create_account_error(error));
        }
        self.login(username, password).await
    }
}

/// Maps a failed account-creation call, preserving the structured server
/// message and using the create-account fallback otherwise.
pub(crate) fn translate_create_account_error(error: ClientError) -> ApiError {
    match error {
        ClientError::Status {
            status,
            error: Some(message),
        } => ApiError::Server { status, message },
        ClientError::Status {
            status,
            error: None,
        } => ApiError::Server {
            status,
            message: format!("Failed to Create Account: Server Error {status}"),
        },
        other => translate_client_error(other),
    }
}
