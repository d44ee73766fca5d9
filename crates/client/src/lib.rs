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
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod error;
mod geocoder;
mod payloads;

#[cfg(test)]
mod tests;

pub use backend::{BackendClient, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use geocoder::{DEFAULT_GEOCODER_URL, GeocoderCandidate, GeocoderClient};
pub use payloads::{CreateAccountPayload, CreateLotPayload, LoginPayload};
