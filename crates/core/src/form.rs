// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State for the capacity/volume pair on the lot-creation form.

use lotlytics_domain::{DomainError, validate_capacity, validate_volume};

/// Tracks the capacity and volume fields of the lot-creation form.
///
/// Each field holds its last accepted value and a validity flag. The
/// capacity cross-check always compares against the last *accepted* volume
/// (initially 0), not a live re-parse of the volume field, so validating
/// capacity before volume uses a stale baseline of 0. Volume changes do
/// not re-validate an already accepted capacity. Both asymmetries match
/// the deployed form behaviour and are covered by tests rather than fixed.
///
/// Only one error message is held at a time: the most recent validation
/// wins, and a successful validation clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityVolumeForm {
    /// Last accepted volume value.
    volume: u32,
    /// Last accepted capacity value.
    capacity: u32,
    /// Whether the most recent volume entry was valid.
    volume_valid: bool,
    /// Whether the most recent capacity entry was valid.
    capacity_valid: bool,
    /// The most recent validation error, if any.
    error: Option<DomainError>,
}

impl CapacityVolumeForm {
    /// Creates a pristine form: both fields valid, both values 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            volume: 0,
            capacity: 0,
            volume_valid: true,
            capacity_valid: true,
            error: None,
        }
    }

    /// Validates a volume entry and stores it when accepted.
    ///
    /// On success the value becomes the new capacity baseline and any held
    /// error is cleared. On failure the previous accepted value is kept and
    /// the field is marked invalid.
    ///
    /// # Returns
    ///
    /// Whether the entry was accepted.
    pub fn enter_volume(&mut self, text: &str) -> bool {
        match validate_volume(text) {
            Ok(volume) => {
                self.volume = volume;
                self.volume_valid = true;
                self.error = None;
                true
            }
            Err(error) => {
                self.volume_valid = false;
                self.error = Some(error);
                false
            }
        }
    }

    /// Validates a capacity entry against the stored volume baseline and
    /// stores it when accepted.
    ///
    /// # Returns
    ///
    /// Whether the entry was accepted.
    pub fn enter_capacity(&mut self, text: &str) -> bool {
        match validate_capacity(text, self.volume) {
            Ok(capacity) => {
                self.capacity = capacity;
                self.capacity_valid = true;
                self.error = None;
                true
            }
            Err(error) => {
                self.capacity_valid = false;
                self.error = Some(error);
                false
            }
        }
    }

    /// Returns the last accepted volume value.
    #[must_use]
    pub const fn volume(&self) -> u32 {
        self.volume
    }

    /// Returns the last accepted capacity value.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the inline message for the most recent validation error.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(std::string::ToString::to_string)
    }

    /// Returns whether the form may be submitted.
    ///
    /// Submission requires both fields to be currently valid.
    #[must_use]
    pub const fn is_submittable(&self) -> bool {
        self.volume_valid && self.capacity_valid
    }
}

impl Default for CapacityVolumeForm {
    fn default() -> Self {
        Self::new()
    }
}
