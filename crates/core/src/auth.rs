// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The authentication state record shared by every view.

use lotlytics_domain::AuthUser;

/// The current session's authentication status and user identity.
///
/// The state starts as loading, and resolves to authenticated or anonymous
/// after the current-user fetch completes. There is no client-side
/// persistence: the state is rebuilt from the backend on each load.
///
/// Consumers read this to gate navigation; the redirect policy itself
/// lives in each consuming view, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    /// The authenticated user, if any.
    pub user: Option<AuthUser>,
    /// Whether the session is authenticated.
    pub is_authenticated: bool,
    /// Whether the current-user fetch is still in flight.
    pub is_loading: bool,
}

impl AuthState {
    /// The initial state: unresolved, fetch in flight.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }

    /// The state after a successful current-user fetch.
    #[must_use]
    pub const fn authenticated(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
        }
    }

    /// The state after a failed current-user fetch of any kind.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
        }
    }

    /// Returns whether the state has resolved either way.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !self.is_loading
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}
