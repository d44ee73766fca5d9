// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure field validators for the lot-creation and account forms.
//!
//! Validators return `Result` values rather than raising; expected
//! validation failures are never modelled as panics or exceptions.

use crate::error::DomainError;

/// Minimum username length accepted by the account form.
const MIN_USERNAME_LENGTH: usize = 6;

/// Parses a text field as a natural number (a non-negative integer).
///
/// Returns `None` for anything unparsable, negative, or out of `u32` range.
fn parse_natural(text: &str) -> Option<u32> {
    let value: i64 = text.trim().parse::<i64>().ok()?;
    u32::try_from(value).ok()
}

/// Validates the current-volume field of the lot form.
///
/// # Arguments
///
/// * `text` - The raw field contents
///
/// # Returns
///
/// The parsed volume on success.
///
/// # Errors
///
/// Returns `DomainError::VolumeNotNatural` if the field is not a
/// non-negative integer.
pub fn validate_volume(text: &str) -> Result<u32, DomainError> {
    parse_natural(text).ok_or(DomainError::VolumeNotNatural)
}

/// Validates the capacity field of the lot form.
///
/// The cross-field rule compares against the supplied volume baseline,
/// which callers take from the last accepted volume value. Validating
/// capacity before any volume has been accepted therefore compares against
/// a baseline of 0. That staleness is part of the form contract, not a
/// defect to fix here.
///
/// # Arguments
///
/// * `text` - The raw field contents
/// * `volume` - The last accepted volume value
///
/// # Returns
///
/// The parsed capacity on success.
///
/// # Errors
///
/// Returns an error if the field is not a non-negative integer
/// (`CapacityNotNatural`), is zero (`CapacityZero`), or is below the
/// volume baseline (`CapacityBelowVolume`).
pub fn validate_capacity(text: &str, volume: u32) -> Result<u32, DomainError> {
    let capacity: u32 = parse_natural(text).ok_or(DomainError::CapacityNotNatural)?;
    if capacity < 1 {
        return Err(DomainError::CapacityZero);
    }
    if capacity < volume {
        return Err(DomainError::CapacityBelowVolume);
    }
    Ok(capacity)
}

/// Validates the account-creation form fields before submission.
///
/// # Arguments
///
/// * `username` - The requested login name
/// * `password` - The requested password
///
/// # Errors
///
/// Returns `DomainError::AccountFieldsEmpty` if either field is empty, or
/// `DomainError::UsernameTooShort` if the username is under 6 characters.
pub fn validate_account_fields(username: &str, password: &str) -> Result<(), DomainError> {
    if username.is_empty() || password.is_empty() {
        return Err(DomainError::AccountFieldsEmpty);
    }
    if username.len() < MIN_USERNAME_LENGTH {
        return Err(DomainError::UsernameTooShort);
    }
    Ok(())
}
