// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Represents a parking lot record as returned by the backend.
///
/// Lots are constructed from backend JSON on fetch, live only in transient
/// UI state, and are discarded on navigation. The `capacity >=
/// current_volume` invariant is enforced at form-entry time only; records
/// read from the backend are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    /// The canonical numeric identifier assigned by the backend.
    pub id: i64,
    /// The group this lot belongs to.
    pub group_id: i64,
    /// The lot's display name.
    pub name: String,
    /// The number of vehicles currently in the lot.
    pub current_volume: u32,
    /// The maximum number of vehicles the lot can hold.
    pub capacity: u32,
    /// Street line of the lot's address.
    pub street: String,
    /// City of the lot's address.
    pub city: String,
    /// State of the lot's address.
    pub state: String,
    /// ZIP code of the lot's address.
    pub zip: String,
    /// Creation timestamp (ISO 8601, backend-assigned).
    pub created_at: String,
    /// Last-update timestamp (ISO 8601, backend-assigned).
    pub updated_at: String,
}

/// Represents a group: an ownership/administrative collection of lots.
///
/// Constructed from backend JSON; never mutated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// The canonical numeric identifier assigned by the backend.
    pub id: i64,
    /// The group's display name.
    pub name: String,
}

/// The authenticated user identity returned by the current-user endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// The user's login name.
    pub username: String,
}

/// The rich address record returned by the Nominatim geocoder.
///
/// Every field is optional: the geocoder omits keys that do not apply to a
/// result, so missing fields deserialize as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressObject {
    /// House or building number.
    pub house_number: Option<String>,
    /// Road or street name.
    pub road: Option<String>,
    /// Neighbourhood within the city.
    pub neighbourhood: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// State or province name.
    pub state: Option<String>,
    /// Postal code.
    pub postcode: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// ISO country code.
    pub country_code: Option<String>,
}

/// A normalized postal address used by lot-creation forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line (house number and road).
    pub street: String,
    /// City name.
    pub city: String,
    /// State or province name.
    pub state: String,
    /// ZIP / postal code.
    pub zip: String,
}

impl Address {
    /// Creates a new `Address` from its four parts.
    #[must_use]
    pub const fn new(street: String, city: String, state: String, zip: String) -> Self {
        Self {
            street,
            city,
            state,
            zip,
        }
    }

    /// Normalizes a geocoder [`AddressObject`] into an `Address`.
    ///
    /// The street line joins the house number and road with a space; when
    /// either is missing the other stands alone. The geocoder's `postcode`
    /// maps to `zip`. Fields missing from the geocoder record become empty
    /// strings.
    #[must_use]
    pub fn from_address_object(object: &AddressObject) -> Self {
        let house_number: &str = object.house_number.as_deref().unwrap_or_default();
        let road: &str = object.road.as_deref().unwrap_or_default();
        let street: String = if house_number.is_empty() {
            road.to_owned()
        } else if road.is_empty() {
            house_number.to_owned()
        } else {
            format!("{house_number} {road}")
        };

        Self {
            street,
            city: object.city.clone().unwrap_or_default(),
            state: object.state.clone().unwrap_or_default(),
            zip: object.postcode.clone().unwrap_or_default(),
        }
    }
}
