// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy classification for parking lots.
//!
//! A lot's occupancy level is a pure derived view over `(current_volume,
//! capacity)`; it is never stored and is recomputed on demand.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three occupancy buckets a lot can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyLevel {
    /// At most 33% full.
    Low,
    /// Strictly between 33% and 66% full.
    Medium,
    /// At least 66% full.
    High,
}

impl OccupancyLevel {
    /// Converts this level to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for OccupancyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(DomainError::InvalidOccupancyLevel(s.to_owned())),
        }
    }
}

impl std::fmt::Display for OccupancyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The classifier result: a level plus its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyBadge {
    /// The occupancy bucket.
    pub level: OccupancyLevel,
    /// The human-readable label for the bucket.
    pub label: &'static str,
    /// The colour token associated with the bucket.
    pub color: &'static str,
}

const LOW_BADGE: OccupancyBadge = OccupancyBadge {
    level: OccupancyLevel::Low,
    label: "Low",
    color: "#66BB6A",
};

const MEDIUM_BADGE: OccupancyBadge = OccupancyBadge {
    level: OccupancyLevel::Medium,
    label: "Medium",
    color: "#BDBDBD",
};

const HIGH_BADGE: OccupancyBadge = OccupancyBadge {
    level: OccupancyLevel::High,
    label: "High",
    color: "#E57373",
};

/// Classifies a lot's occupancy into one of three buckets.
///
/// The percentage boundaries are deliberately asymmetric: exactly 33% is
/// `Low` while exactly 66% is `High`. Downstream consumers depend on this
/// boundary behaviour, so it must not be "corrected".
///
/// A capacity of zero would divide by zero; it is treated as 0% and
/// therefore `Low` for any volume.
///
/// Comparisons use integer cross-multiplication (`100 * volume` against
/// `33 * capacity` and `66 * capacity`) so the boundaries are exact.
///
/// # Arguments
///
/// * `volume` - The lot's current volume
/// * `capacity` - The lot's capacity
#[must_use]
pub fn classify(volume: u32, capacity: u32) -> OccupancyBadge {
    if capacity == 0 {
        return LOW_BADGE;
    }

    let scaled_volume: u64 = 100 * u64::from(volume);
    let capacity: u64 = u64::from(capacity);

    if scaled_volume <= 33 * capacity {
        LOW_BADGE
    } else if scaled_volume < 66 * capacity {
        MEDIUM_BADGE
    } else {
        HIGH_BADGE
    }
}
