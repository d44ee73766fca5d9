// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for api crate tests.

use lotlytics_client::{BackendClient, DEFAULT_BASE_URL};
use lotlytics_domain::Lot;
use url::Url;

/// Creates a backend client pointed at the default base URL.
///
/// Tests drive service state through the `apply_*` seams, so the client
/// never actually sends a request.
pub fn create_test_client() -> BackendClient {
    let base: Url = Url::parse(DEFAULT_BASE_URL).expect("default base URL must parse");
    BackendClient::new(base).expect("default base URL must be accepted")
}

/// Creates a test lot with the given identifier, volume, and capacity.
pub fn create_test_lot(id: i64, current_volume: u32, capacity: u32) -> Lot {
    Lot {
        id,
        group_id: 1,
        name: format!("Lot {id}"),
        current_volume,
        capacity,
        street: String::from("101 Main St"),
        city: String::from("Wilkes-Barre"),
        state: String::from("PA"),
        zip: String::from("18701"),
        created_at: String::from("2026-01-05T10:00:00Z"),
        updated_at: String::from("2026-01-05T10:00:00Z"),
    }
}
