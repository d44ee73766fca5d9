// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Search services for lots and groups.
//!
//! Each service owns its list state at this level; views read derived
//! slices through it instead of holding mutable handles of their own.
//! Responses are applied through request tokens so a response belonging to
//! a superseded search is discarded instead of clobbering newer results.

use tracing::debug;

use crate::error::{ApiError, translate_client_error};
use lotlytics::{LotListState, RequestSequence, RequestToken};
use lotlytics_client::{BackendClient, ClientError};
use lotlytics_domain::{Group, Lot};

/// Owns the lot list and runs lot searches against the backend.
#[derive(Debug)]
pub struct LotSearchService {
    client: BackendClient,
    list: LotListState,
    requests: RequestSequence,
}

impl LotSearchService {
    /// Creates a service with an empty lot list.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self {
            client,
            list: LotListState::new(),
            requests: RequestSequence::new(),
        }
    }

    /// Returns the lot list state for reading derived slices.
    #[must_use]
    pub const fn list(&self) -> &LotListState {
        &self.list
    }

    /// Returns the lot list state for filter and page controls.
    pub const fn list_mut(&mut self) -> &mut LotListState {
        &mut self.list
    }

    /// Issues a token for a new search, superseding any in-flight one.
    pub const fn begin_search(&mut self) -> RequestToken {
        self.requests.begin()
    }

    /// Applies a completed search response.
    ///
    /// A response whose token has been superseded is discarded and reported
    /// as not applied.
    ///
    /// # Returns
    ///
    /// Whether the response was applied to the list.
    ///
    /// # Errors
    ///
    /// Returns the translated error when the search itself failed and was
    /// still current.
    pub fn apply_search(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<Lot>, ClientError>,
    ) -> Result<bool, ApiError> {
        if !self.requests.is_current(token) {
            debug!("discarding lot search response for superseded request");
            return Ok(false);
        }
        let lots: Vec<Lot> = outcome.map_err(translate_client_error)?;
        self.list.set_lots(lots);
        Ok(true)
    }

    /// Searches lots, optionally scoped to a group and a name fragment,
    /// and replaces the list with the results.
    ///
    /// # Errors
    ///
    /// Returns a server or network error; the existing list is kept on
    /// failure.
    pub async fn search(
        &mut self,
        group_id: Option<i64>,
        name: Option<&str>,
    ) -> Result<(), ApiError> {
        let token: RequestToken = self.begin_search();
        let outcome: Result<Vec<Lot>, ClientError> = self.client.search_lots(group_id, name).await;
        self.apply_search(token, outcome).map(|_| ())
    }

    /// Empties the lot list.
    pub fn clear(&mut self) {
        self.list.clear_lots();
    }
}

/// Owns the group list and runs group searches against the backend.
#[derive(Debug)]
pub struct GroupSearchService {
    client: BackendClient,
    groups: Vec<Group>,
    requests: RequestSequence,
}

impl GroupSearchService {
    /// Creates a service with an empty group list.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self {
            client,
            groups: Vec::new(),
            requests: RequestSequence::new(),
        }
    }

    /// Returns the groups from the most recent search, in arrival order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Issues a token for a new search, superseding any in-flight one.
    pub const fn begin_search(&mut self) -> RequestToken {
        self.requests.begin()
    }

    /// Applies a completed group search response.
    ///
    /// # Returns
    ///
    /// Whether the response was applied.
    ///
    /// # Errors
    ///
    /// Returns the translated error when the search itself failed and was
    /// still current.
    pub fn apply_search(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<Group>, ClientError>,
    ) -> Result<bool, ApiError> {
        if !self.requests.is_current(token) {
            debug!("discarding group search response for superseded request");
            return Ok(false);
        }
        self.groups = outcome.map_err(translate_client_error)?;
        Ok(true)
    }

    /// Searches groups, optionally by name fragment, and replaces the
    /// group list with the results.
    ///
    /// # Errors
    ///
    /// Returns a server or network error; the existing list is kept on
    /// failure.
    pub async fn search(&mut self, name: Option<&str>) -> Result<(), ApiError> {
        let token: RequestToken = self.begin_search();
        let outcome: Result<Vec<Group>, ClientError> = self.client.search_groups(name).await;
        self.apply_search(token, outcome).map(|_| ())
    }

    /// Empties the group list.
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
