// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// The `Display` form of the field-validation variants is the exact inline
/// message shown to the user, so they must not be reworded without
/// revisiting the forms that surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The volume field did not parse as a non-negative integer.
    VolumeNotNatural,
    /// The capacity field did not parse as a non-negative integer.
    CapacityNotNatural,
    /// The capacity field parsed as zero.
    CapacityZero,
    /// The capacity field is below the last accepted volume.
    CapacityBelowVolume,
    /// Username or password was left empty on the account form.
    AccountFieldsEmpty,
    /// The requested username is shorter than the minimum length.
    UsernameTooShort,
    /// A string did not parse as an occupancy level or filter.
    InvalidOccupancyLevel(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VolumeNotNatural => write!(f, "Volume must be a natural number"),
            Self::CapacityNotNatural => write!(f, "Capacity must be a natural number."),
            Self::CapacityZero => write!(f, "Capacity must be greater than 0."),
            Self::CapacityBelowVolume => {
                write!(f, "Capacity must be greater than or equal to the volume.")
            }
            Self::AccountFieldsEmpty => write!(f, "Please fill in the form."),
            Self::UsernameTooShort => write!(f, "Username must be at least 6 characters."),
            Self::InvalidOccupancyLevel(value) => {
                write!(f, "Unknown occupancy level: {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
