// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the authentication service.

use crate::auth::translate_create_account_error;
use crate::tests::helpers::create_test_client;
use crate::{ApiError, AuthService};
use lotlytics_client::ClientError;
use lotlytics_domain::AuthUser;

#[test]
fn test_new_service_starts_loading() {
    let service = AuthService::new(create_test_client());

    let state = service.state();
    assert!(state.is_loading);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
    assert!(!state.is_resolved());
}

#[test]
fn test_apply_refresh_success_resolves_authenticated() {
    let mut service = AuthService::new(create_test_client());

    service.apply_refresh(Ok(AuthUser {
        username: String::from("parker"),
    }));

    let state = service.state();
    assert!(state.is_resolved());
    assert!(state.is_authenticated);
    assert_eq!(
        state.user.as_ref().map(|user| user.username.as_str()),
        Some("parker")
    );
}

#[test]
fn test_apply_refresh_unauthorized_resolves_anonymous() {
    let mut service = AuthService::new(create_test_client());

    service.apply_refresh(Err(ClientError::Status {
        status: 401,
        error: None,
    }));

    let state = service.state();
    assert!(state.is_resolved());
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn test_apply_refresh_transport_failure_resolves_anonymous() {
    let mut service = AuthService::new(create_test_client());

    service.apply_refresh(Err(ClientError::Transport {
        message: String::from("connection refused"),
    }));

    assert!(service.state().is_resolved());
    assert!(!service.state().is_authenticated);
}

#[test]
fn test_apply_refresh_replaces_previous_user_wholesale() {
    let mut service = AuthService::new(create_test_client());
    service.apply_refresh(Ok(AuthUser {
        username: String::from("parker"),
    }));

    service.apply_refresh(Err(ClientError::Status {
        status: 401,
        error: None,
    }));

    assert!(service.state().user.is_none());
    assert!(!service.state().is_authenticated);
}

#[test]
fn test_create_account_rejects_empty_fields_with_form_message() {
    let mut service = AuthService::new(create_test_client());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let result = runtime.block_on(service.create_account("", "a@b.com", ""));

    assert_eq!(
        result,
        Err(ApiError::Validation {
            message: String::from("Please fill in the form."),
        })
    );
}

#[test]
fn test_create_account_rejects_short_username() {
    let mut service = AuthService::new(create_test_client());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let result = runtime.block_on(service.create_account("bob", "bob@example.com", "hunter2"));

    assert_eq!(
        result,
        Err(ApiError::Validation {
            message: String::from("Username must be at least 6 characters."),
        })
    );
}

#[test]
fn test_translate_create_account_error_keeps_server_message() {
    let translated = translate_create_account_error(ClientError::Status {
        status: 409,
        error: Some(String::from("Username already taken.")),
    });

    assert_eq!(
        translated,
        ApiError::Server {
            status: 409,
            message: String::from("Username already taken."),
        }
    );
}

#[test]
fn test_translate_create_account_error_falls_back_on_unstructured_body() {
    let translated = translate_create_account_error(ClientError::Status {
        status: 500,
        error: None,
    });

    assert_eq!(
        translated,
        ApiError::Server {
            status: 500,
            message: String::from("Failed to Create Account: Server Error 500"),
        }
    );
}

#[test]
fn test_translate_create_account_error_maps_transport_to_network() {
    let translated = translate_create_account_error(ClientError::Transport {
        message: String::from("timed out"),
    });

    assert_eq!(
        translated,
        ApiError::Network {
            message: String::from("timed out"),
        }
    );
}
