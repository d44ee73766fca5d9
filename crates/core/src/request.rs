// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request-generation tracking for overlapping fetches.
//!
//! Search requests carry no cancellation, so two overlapping searches race
//! and whichever response lands last would win regardless of issue order.
//! A [`RequestSequence`] assigns each request a monotonically increasing
//! token; a completed response is applied only while its token is still the
//! newest one issued, and a superseded response is discarded.

/// A token identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// A monotonically increasing request-generation counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestSequence {
    /// The generation of the most recently issued request.
    issued: u64,
}

impl RequestSequence {
    /// Creates a new sequence with no requests issued.
    #[must_use]
    pub const fn new() -> Self {
        Self { issued: 0 }
    }

    /// Issues a token for a new request, superseding all earlier ones.
    pub const fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Returns whether a token still belongs to the newest request.
    #[must_use]
    pub const fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }
}
