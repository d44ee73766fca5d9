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

mod auth;
mod form;
mod lot_list;
mod request;

#[cfg(test)]
mod tests;

pub use auth::AuthState;
pub use form::CapacityVolumeForm;
pub use lot_list::{LotFilter, LotListState, PAGE_SIZE};
pub use request::{RequestSequence, RequestToken};
