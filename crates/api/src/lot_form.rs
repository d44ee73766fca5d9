// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The lot-creation form controller.

use crate::error::{ApiError, translate_client_error};
use lotlytics::CapacityVolumeForm;
use lotlytics_client::{BackendClient, CreateLotPayload};
use lotlytics_domain::Address;

/// State of the create-lot form: name, capacity/volume pair, and the
/// geocoder-autofilled address.
///
/// Address fields are read-only on the form; they can only be populated
/// from a geocoder result, so the whole address arrives at once via
/// [`CreateLotForm::set_address`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateLotForm {
    name: String,
    fields: CapacityVolumeForm,
    address: Option<Address>,
}

impl CreateLotForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lot name.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    /// Returns the lot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates a volume entry; see [`CapacityVolumeForm::enter_volume`].
    pub fn enter_volume(&mut self, text: &str) -> bool {
        self.fields.enter_volume(text)
    }

    /// Validates a capacity entry; see
    /// [`CapacityVolumeForm::enter_capacity`].
    pub fn enter_capacity(&mut self, text: &str) -> bool {
        self.fields.enter_capacity(text)
    }

    /// Autofills the address from a geocoder result.
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Returns the autofilled address, if any.
    #[must_use]
    pub const fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Returns the inline message for the most recent validation error.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.fields.error_message()
    }

    /// Returns whether the numeric fields currently permit submission.
    #[must_use]
    pub const fn is_submittable(&self) -> bool {
        self.fields.is_submittable()
    }

    /// Builds the lot-creation payload from the current form state.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the numeric fields are invalid, the
    /// name is empty, or no address has been autofilled.
    pub fn payload(&self) -> Result<CreateLotPayload, ApiError> {
        if !self.fields.is_submittable() {
            let message: String = self
                .fields
                .error_message()
                .unwrap_or_else(|| String::from("Please fix the highlighted fields."));
            return Err(ApiError::Validation { message });
        }
        if self.name.is_empty() {
            return Err(ApiError::Validation {
                message: String::from("Lot name is required."),
            });
        }
        let Some(address) = self.address.clone() else {
            return Err(ApiError::Validation {
                message: String::from("Lot address must be autofilled from a search."),
            });
        };
        Ok(CreateLotPayload {
            name: self.name.clone(),
            capacity: self.fields.capacity(),
            volume: self.fields.volume(),
            street: address.street,
            city: address.city,
            state: address.state,
            zip: address.zip,
        })
    }

    /// Submits the form to the backend, creating the lot within a group.
    ///
    /// # Errors
    ///
    /// Returns a validation error without touching the network when the
    /// form is incomplete, or a server/network error from the backend.
    pub async fn submit(&self, client: &BackendClient, group_id: i64) -> Result<(), ApiError> {
        let payload: CreateLotPayload = self.payload()?;
        client
            .create_lot(group_id, &payload)
            .await
            .map_err(translate_client_error)
    }
}
