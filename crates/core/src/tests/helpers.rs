// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for core crate tests.

use lotlytics_domain::Lot;

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

/// Creates `count` test lots with identifiers `1..=count`, all low
/// occupancy.
pub fn create_test_lots(count: i64) -> Vec<Lot> {
    (1..=count).map(|id| create_test_lot(id, 0, 100)).collect()
}
