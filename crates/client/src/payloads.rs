// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire payloads for the backend REST API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/user` — account creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountPayload {
    /// The requested login name.
    pub username: String,
    /// The account's contact email.
    pub email: String,
    /// The requested password.
    pub password: String,
}

/// Body of `POST /api/v1/user/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    /// The login name.
    pub username: String,
    /// The password.
    pub password: String,
}

/// Body of `POST /api/v1/lot?groupId=` — lot creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLotPayload {
    /// The lot's display name.
    pub name: String,
    /// The lot's maximum capacity.
    pub capacity: u32,
    /// The lot's current volume.
    pub volume: u32,
    /// Street line of the lot's address.
    pub street: String,
    /// City of the lot's address.
    pub city: String,
    /// State of the lot's address.
    pub state: String,
    /// ZIP code of the lot's address.
    pub zip: String,
}
