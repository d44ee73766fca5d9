// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod occupancy;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use occupancy::{OccupancyBadge, OccupancyLevel, classify};
pub use types::{Address, AddressObject, AuthUser, Group, Lot};
pub use validation::{validate_account_fields, validate_capacity, validate_volume};
