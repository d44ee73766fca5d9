// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reqwest-backed client for the Lotlytics backend REST API.
//!
//! This adapter owns transport details only: endpoint construction,
//! credential forwarding via a cookie store, HTTP error mapping, and JSON
//! decoding into domain records. No retries, timeouts, or cancellation are
//! layered on top; every failure requires explicit re-submission.

use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::error::{ClientError, status_error};
use crate::payloads::{CreateAccountPayload, CreateLotPayload, LoginPayload};
use lotlytics_domain::{AuthUser, Group, Lot};

/// The default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:6600";

/// Client for the Lotlytics backend REST API.
///
/// Session credentials are carried by an in-process cookie store, the
/// equivalent of the browser's credentialed fetch. Cookies live only as
/// long as this client instance.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    /// Creates a client for the given backend base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The backend origin, e.g. `http://localhost:6600`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot serve as a base or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(mut base_url: Url) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                message: format!("'{base_url}' cannot be an API base"),
            });
        }
        // Normalize so relative joins append instead of replacing the path.
        if !base_url.path().ends_with('/') {
            let path: String = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http: Client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(ClientError::from)?;
        Ok(Self { http, base_url })
    }

    /// Builds an endpoint URL under `api/v1/`.
    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(&format!("api/v1/{path}"))
            .map_err(ClientError::from)
    }

    /// Builds the lot-search URL with optional `groupId` and `name` query
    /// parameters.
    pub(crate) fn lots_url(
        &self,
        group_id: Option<i64>,
        name: Option<&str>,
    ) -> Result<Url, ClientError> {
        let mut url: Url = self.endpoint("lot")?;
        if let Some(group_id) = group_id {
            url.query_pairs_mut()
                .append_pair("groupId", &group_id.to_string());
        }
        if let Some(name) = name {
            url.query_pairs_mut().append_pair("name", name);
        }
        Ok(url)
    }

    /// Builds the group-search URL with an optional `name` query parameter.
    pub(crate) fn groups_url(&self, name: Option<&str>) -> Result<Url, ClientError> {
        let mut url: Url = self.endpoint("group")?;
        if let Some(name) = name {
            url.query_pairs_mut().append_pair("name", name);
        }
        Ok(url)
    }

    /// Builds the lot-creation URL scoped to a group.
    pub(crate) fn create_lot_url(&self, group_id: i64) -> Result<Url, ClientError> {
        let mut url: Url = self.endpoint("lot")?;
        url.query_pairs_mut()
            .append_pair("groupId", &group_id.to_string());
        Ok(url)
    }

    /// Passes a response through on 2xx, or maps it to a status error,
    /// preserving a structured `{"error": ...}` body when present.
    async fn expect_success(response: Response) -> Result<Response, ClientError> {
        let status: reqwest::StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: String = response.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), &body))
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns a status error (carrying the server's structured message
    /// when one was sent) or a transport error.
    pub async fn create_account(&self, payload: &CreateAccountPayload) -> Result<(), ClientError> {
        let url: Url = self.endpoint("user")?;
        let response: Response = self.http.post(url).json(payload).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// Logs in, establishing a session cookie on success.
    ///
    /// # Errors
    ///
    /// Returns a status error on rejected credentials or a transport error.
    pub async fn login(&self, payload: &LoginPayload) -> Result<(), ClientError> {
        let url: Url = self.endpoint("user/login")?;
        let response: Response = self.http.post(url).json(payload).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// Logs out, invalidating the session.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let url: Url = self.endpoint("user/logout")?;
        let response: Response = self.http.post(url).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// Fetches the identity of the currently authenticated user.
    ///
    /// # Errors
    ///
    /// Returns a status error when the session is not authenticated, or a
    /// transport/decode error.
    pub async fn current_user(&self) -> Result<AuthUser, ClientError> {
        let url: Url = self.endpoint("user/me")?;
        let response: Response = self.http.get(url).send().await?;
        let user: AuthUser = Self::expect_success(response).await?.json().await?;
        Ok(user)
    }

    /// Searches lots, optionally scoped to a group and a name fragment.
    ///
    /// The backend's ordering is preserved in the returned vector.
    ///
    /// # Errors
    ///
    /// Returns a status, transport, or decode error.
    pub async fn search_lots(
        &self,
        group_id: Option<i64>,
        name: Option<&str>,
    ) -> Result<Vec<Lot>, ClientError> {
        let url: Url = self.lots_url(group_id, name)?;
        debug!(%url, "searching lots");
        let response: Response = self.http.get(url).send().await?;
        let lots: Vec<Lot> = Self::expect_success(response).await?.json().await?;
        Ok(lots)
    }

    /// Creates a lot within a group.
    ///
    /// # Errors
    ///
    /// Returns a status, transport, or decode error.
    pub async fn create_lot(
        &self,
        group_id: i64,
        payload: &CreateLotPayload,
    ) -> Result<(), ClientError> {
        let url: Url = self.create_lot_url(group_id)?;
        let response: Response = self.http.post(url).json(payload).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// Searches groups, optionally by name fragment.
    ///
    /// # Errors
    ///
    /// Returns a status, transport, or decode error.
    pub async fn search_groups(&self, name: Option<&str>) -> Result<Vec<Group>, ClientError> {
        let url: Url = self.groups_url(name)?;
        debug!(%url, "searching groups");
        let response: Response = self.http.get(url).send().await?;
        let groups: Vec<Group> = Self::expect_success(response).await?.json().await?;
        Ok(groups)
    }
}
