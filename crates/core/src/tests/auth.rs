// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::AuthState;
use lotlytics_domain::AuthUser;

#[test]
fn test_initial_state_is_loading() {
    let state: AuthState = AuthState::default();
    assert!(state.is_loading);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
    assert!(!state.is_resolved());
}

#[test]
fn test_authenticated_state_carries_the_user() {
    let state: AuthState = AuthState::authenticated(AuthUser {
        username: String::from("nmartes"),
    });
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.user.unwrap().username, "nmartes");
}

#[test]
fn test_anonymous_state_is_resolved_without_a_user() {
    let state: AuthState = AuthState::anonymous();
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.user.is_none());
    assert!(state.is_resolved());
}
