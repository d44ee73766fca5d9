// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BackendClient, ClientError, DEFAULT_BASE_URL, GeocoderClient};
use url::Url;

fn create_test_client() -> BackendClient {
    BackendClient::new(Url::parse(DEFAULT_BASE_URL).unwrap()).unwrap()
}

fn create_test_geocoder() -> GeocoderClient {
    GeocoderClient::new(Url::parse("https://nominatim.openstreetmap.org").unwrap()).unwrap()
}

#[test]
fn test_lots_url_without_parameters() {
    let url: Url = create_test_client().lots_url(None, None).unwrap();
    assert_eq!(url.as_str(), "http://localhost:6600/api/v1/lot");
}

#[test]
fn test_lots_url_with_group_and_name() {
    let url: Url = create_test_client()
        .lots_url(Some(3), Some("wilkes"))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:6600/api/v1/lot?groupId=3&name=wilkes"
    );
}

#[test]
fn test_lots_url_with_name_only() {
    let url: Url = create_test_client().lots_url(None, Some("wilkes")).unwrap();
    assert_eq!(url.as_str(), "http://localhost:6600/api/v1/lot?name=wilkes");
}

#[test]
fn test_groups_url_with_name() {
    let url: Url = create_test_client().groups_url(Some("wilkes")).unwrap();
    assert_eq!(url.as_str(), "http://localhost:6600/api/v1/group?name=wilkes");
}

#[test]
fn test_create_lot_url_carries_group_id() {
    let url: Url = create_test_client().create_lot_url(7).unwrap();
    assert_eq!(url.as_str(), "http://localhost:6600/api/v1/lot?groupId=7");
}

#[test]
fn test_base_url_with_trailing_slash_is_equivalent() {
    let client: BackendClient =
        BackendClient::new(Url::parse("http://localhost:6600/").unwrap()).unwrap();
    let url: Url = client.lots_url(None, None).unwrap();
    assert_eq!(url.as_str(), "http://localhost:6600/api/v1/lot");
}

#[test]
fn test_non_base_url_is_rejected() {
    let result: Result<BackendClient, ClientError> =
        BackendClient::new(Url::parse("mailto:ops@lotlytics.example").unwrap());
    assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
}

#[test]
fn test_geocoder_search_url_query_parameters() {
    let url: Url = create_test_geocoder()
        .search_url("84 South Main Street")
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://nominatim.openstreetmap.org/search?format=json&q=84+South+Main+Street&limit=5&addressdetails=1"
    );
}
