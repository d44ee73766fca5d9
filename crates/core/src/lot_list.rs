// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The lot list filter/paginate engine.
//!
//! Holds the full list of lots as it arrived from the backend, the selected
//! occupancy filter, and the current page, and derives the visible slice
//! from them. Replacing the list or changing the filter always re-anchors
//! to page 1 so the view can never silently show an out-of-range page.

use lotlytics_domain::{DomainError, Lot, OccupancyLevel, classify};
use std::str::FromStr;

/// The fixed number of lots shown per page.
pub const PAGE_SIZE: usize = 6;

/// The occupancy filter applied to the lot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LotFilter {
    /// Show every lot.
    #[default]
    All,
    /// Show only lots whose classifier level matches.
    Level(OccupancyLevel),
}

impl LotFilter {
    /// Converts this filter to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Level(level) => level.as_str(),
        }
    }
}

impl FromStr for LotFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        OccupancyLevel::from_str(s).map(Self::Level)
    }
}

impl std::fmt::Display for LotFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The lot list state: all fetched lots, the selected filter, and the
/// current page.
///
/// Lot order is arrival order from the backend; filtering preserves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotListState {
    /// All lots from the most recent search, in arrival order.
    lots: Vec<Lot>,
    /// The currently selected occupancy filter.
    filter: LotFilter,
    /// The current page, 1-based.
    current_page: usize,
}

impl LotListState {
    /// Creates a new empty lot list on page 1 with no filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lots: Vec::new(),
            filter: LotFilter::All,
            current_page: 1,
        }
    }

    /// Replaces the whole list and re-anchors to page 1.
    ///
    /// The selected filter is deliberately kept: a user who filtered to
    /// "high" and then re-searched still wants high lots.
    pub fn set_lots(&mut self, lots: Vec<Lot>) {
        self.lots = lots;
        self.current_page = 1;
    }

    /// Empties the list and re-anchors to page 1.
    pub fn clear_lots(&mut self) {
        self.lots.clear();
        self.current_page = 1;
    }

    /// Selects a filter and re-anchors to page 1.
    pub const fn set_filter(&mut self, filter: LotFilter) {
        self.filter = filter;
        self.current_page = 1;
    }

    /// Returns the currently selected filter.
    #[must_use]
    pub const fn filter(&self) -> LotFilter {
        self.filter
    }

    /// Returns all lots from the most recent search, unfiltered.
    #[must_use]
    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    /// Returns the lots matching the selected filter, in arrival order.
    ///
    /// With the `All` filter this is the full list; otherwise it is the
    /// order-preserving subsequence whose classifier level matches.
    #[must_use]
    pub fn filtered_lots(&self) -> Vec<&Lot> {
        match self.filter {
            LotFilter::All => self.lots.iter().collect(),
            LotFilter::Level(level) => self
                .lots
                .iter()
                .filter(|lot| classify(lot.current_volume, lot.capacity).level == level)
                .collect(),
        }
    }

    /// Returns the number of pages the filtered list spans.
    ///
    /// An empty filtered list has zero pages; the current page is still
    /// reported as 1 in that case.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered_lots().len().div_ceil(PAGE_SIZE)
    }

    /// Returns the current page, 1-based.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the slice of filtered lots on the current page.
    ///
    /// Never longer than [`PAGE_SIZE`].
    #[must_use]
    pub fn visible_lots(&self) -> Vec<&Lot> {
        self.filtered_lots()
            .into_iter()
            .skip((self.current_page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    /// Requests a specific page, clamped to the valid range.
    ///
    /// Requests past either bound are no-ops at the boundary page.
    pub fn set_page(&mut self, page: usize) {
        let last_page: usize = self.page_count().max(1);
        self.current_page = page.clamp(1, last_page);
    }

    /// Advances to the next page, if any.
    pub fn next_page(&mut self) {
        self.set_page(self.current_page.saturating_add(1));
    }

    /// Returns to the previous page, if any.
    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }
}

impl Default for LotListState {
    fn default() -> Self {
        Self::new()
    }
}
