// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nominatim geocoder client for address lookup.

use reqwest::{Client, Response};
use serde::Deserialize;
use url::Url;

use crate::error::{ClientError, status_error};
use lotlytics_domain::{Address, AddressObject};

/// The public Nominatim instance used by default.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim's usage policy requires an identifying user agent.
const USER_AGENT: &str = "lotlytics-client/0.1";

/// The number of candidates requested per search.
const RESULT_LIMIT: u8 = 5;

/// One candidate address returned by the geocoder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeocoderCandidate {
    /// Latitude as reported by the geocoder (decimal-degree string).
    pub lat: String,
    /// Longitude as reported by the geocoder (decimal-degree string).
    pub lon: String,
    /// The full display name of the candidate.
    pub display_name: String,
    /// The structured address record, when detail was returned.
    #[serde(default)]
    pub address: Option<AddressObject>,
}

impl GeocoderCandidate {
    /// Normalizes this candidate's structured address, when present.
    #[must_use]
    pub fn normalized_address(&self) -> Option<Address> {
        self.address.as_ref().map(Address::from_address_object)
    }
}

/// Client for the Nominatim search endpoint.
#[derive(Debug, Clone)]
pub struct GeocoderClient {
    http: Client,
    base_url: Url,
}

impl GeocoderClient {
    /// Creates a geocoder client for the given Nominatim base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot serve as a base or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(mut base_url: Url) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                message: format!("'{base_url}' cannot be a geocoder base"),
            });
        }
        if !base_url.path().ends_with('/') {
            let path: String = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http: Client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::from)?;
        Ok(Self { http, base_url })
    }

    /// Builds the search URL for a free-text query.
    pub(crate) fn search_url(&self, query: &str) -> Result<Url, ClientError> {
        let mut url: Url = self.base_url.join("search").map_err(ClientError::from)?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", query)
            .append_pair("limit", &RESULT_LIMIT.to_string())
            .append_pair("addressdetails", "1");
        Ok(url)
    }

    /// Searches for candidate addresses matching a free-text query.
    ///
    /// Returns at most five candidates; the first is the geocoder's best
    /// match. The caller picks one and normalizes it into an [`Address`].
    ///
    /// # Errors
    ///
    /// Returns a status, transport, or decode error.
    pub async fn search(&self, query: &str) -> Result<Vec<GeocoderCandidate>, ClientError> {
        let url: Url = self.search_url(query)?;
        let response: Response = self.http.get(url).send().await?;
        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            let body: String = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }
        let candidates: Vec<GeocoderCandidate> = response.json().await?;
        Ok(candidates)
    }
}
