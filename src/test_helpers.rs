//! Shared fixtures for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::reactive::owner::Owner;
use serde_json::json;

use crate::net::api::{ApiError, UserApi};
use crate::net::gateway::LoginCanceller;
use crate::net::types::{Credentials, NewUser, User, UserPatch};

/// Run `f` under a fresh reactive owner so signals have somewhere to live.
pub fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    Owner::new().with(f)
}

#[must_use]
pub fn sample_user() -> User {
    User {
        id: 1,
        email: "a@b.com".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        full_name: "A B".to_owned(),
    }
}

#[must_use]
pub fn sample_login_body() -> serde_json::Value {
    json!({
        "success": true,
        "user": { "id": 1, "email": "a@b.com", "fullName": "A B", "name": "A", "surname": "B" }
    })
}

// =========================================================================
// MockApi
// =========================================================================

/// In-memory `UserApi` returning a canned login result.
pub struct MockApi {
    login_result: Result<serde_json::Value, ApiError>,
    login_calls: AtomicUsize,
    last_credentials: Mutex<Option<Credentials>>,
    cancel_during_login: Mutex<Option<LoginCanceller>>,
}

impl MockApi {
    pub fn login_ok(body: serde_json::Value) -> Self {
        Self::with_login_result(Ok(body))
    }

    pub fn login_err(err: ApiError) -> Self {
        Self::with_login_result(Err(err))
    }

    fn with_login_result(login_result: Result<serde_json::Value, ApiError>) -> Self {
        Self {
            login_result,
            login_calls: AtomicUsize::new(0),
            last_credentials: Mutex::new(None),
            cancel_during_login: Mutex::new(None),
        }
    }

    /// Simulate the user leaving the login flow while the request is in flight.
    pub fn cancel_during_login(&self, canceller: LoginCanceller) {
        *self.cancel_during_login.lock().unwrap() = Some(canceller);
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn last_credentials(&self) -> Option<Credentials> {
        self.last_credentials.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl UserApi for MockApi {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Ok(vec![sample_user()])
    }

    async fn get(&self, id: i64) -> Result<User, ApiError> {
        if id == sample_user().id { Ok(sample_user()) } else { Err(ApiError::Status { status: 404 }) }
    }

    async fn create(&self, data: &NewUser) -> Result<User, ApiError> {
        Ok(User {
            id: 2,
            email: data.email.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            full_name: format!("{} {}", data.first_name, data.last_name),
        })
    }

    async fn update(&self, id: i64, data: &UserPatch) -> Result<User, ApiError> {
        let mut user = self.get(id).await?;
        if let Some(email) = &data.email {
            user.email.clone_from(email);
        }
        if let Some(first_name) = &data.first_name {
            user.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &data.last_name {
            user.last_name.clone_from(last_name);
        }
        Ok(user)
    }

    async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_credentials.lock().unwrap() = Some(credentials.clone());
        if let Some(canceller) = self.cancel_during_login.lock().unwrap().as_ref() {
            canceller.cancel();
        }
        self.login_result.clone()
    }
}
