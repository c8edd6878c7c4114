//! Auth gateway: bridges the remote user API and the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of `SessionStore`. Login responses are mapped into `User`
//! here and applied atomically; a failure of any kind leaves the session as it
//! was.
//!
//! STALE RESPONSES
//! ===============
//! Each login takes a number from a shared epoch. Leaving the login flow (or
//! starting a newer login) advances the epoch, and a response that comes back
//! for an older number is dropped instead of authenticating a dead flow.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::api::{ApiError, UserApi};
use super::types::{Credentials, LoginPayload, LoginResponse, NewUser, User, UserPatch};
use crate::state::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("credentials rejected")]
    Rejected,

    /// The server answered but broke the login response contract.
    #[error("login response did not match contract: {0}")]
    Mapping(String),

    /// A newer attempt or a navigation away made this response irrelevant.
    #[error("login superseded")]
    Superseded,
}

/// Shared handle that invalidates in-flight login attempts.
#[derive(Clone, Debug, Default)]
pub struct LoginCanceller(Arc<AtomicU64>);

impl LoginCanceller {
    /// Invalidate every attempt started before this call.
    pub fn cancel(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.0.load(Ordering::SeqCst) == attempt
    }
}

#[derive(Clone)]
pub struct AuthGateway {
    api: Arc<dyn UserApi>,
    session: SessionStore,
    attempts: LoginCanceller,
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway").field("session", &self.session).finish_non_exhaustive()
    }
}

impl AuthGateway {
    #[must_use]
    pub fn new(api: Arc<dyn UserApi>, session: SessionStore) -> Self {
        Self { api, session, attempts: LoginCanceller::default() }
    }

    #[must_use]
    pub fn session(&self) -> SessionStore {
        self.session
    }

    #[must_use]
    pub fn canceller(&self) -> LoginCanceller {
        self.attempts.clone()
    }

    /// Drop whatever login is currently in flight.
    pub fn cancel_pending(&self) {
        self.attempts.cancel();
    }

    /// Authenticate and, on success, install the user in the session.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Api`] on transport failure or a non-2xx status.
    /// - [`AuthError::Rejected`] when the server reports `success: false`.
    /// - [`AuthError::Mapping`] when the body lacks a required field.
    /// - [`AuthError::Superseded`] when the attempt was cancelled mid-flight.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let attempt = self.attempts.begin();
        let response = self.api.login(credentials).await;
        if !self.attempts.is_current(attempt) {
            log::info!("login: discarding stale response for attempt {attempt}");
            return Err(AuthError::Superseded);
        }

        let raw = match response {
            Ok(raw) => raw,
            Err(ApiError::Decode(detail)) => return Err(mapping_failure(detail)),
            Err(e) => {
                log::info!("login: request failed: {e}");
                return Err(e.into());
            }
        };

        let user = match LoginResponse::parse(&raw) {
            Ok(LoginPayload::Accepted(user)) => user,
            Ok(LoginPayload::Rejected) => {
                log::info!("login: credentials rejected");
                return Err(AuthError::Rejected);
            }
            Err(detail) => return Err(mapping_failure(detail)),
        };

        self.session.set_user(user.clone());
        log::info!("login: signed in as {}", user.full_name);
        Ok(user)
    }

    /// Local-only sign-out.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// # Errors
    ///
    /// Propagates the API error unchanged.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.api.list().await
    }

    /// # Errors
    ///
    /// Propagates the API error unchanged.
    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        self.api.get(id).await
    }

    /// # Errors
    ///
    /// Propagates the API error unchanged.
    pub async fn create(&self, data: &NewUser) -> Result<User, ApiError> {
        self.api.create(data).await
    }

    /// # Errors
    ///
    /// Propagates the API error unchanged.
    pub async fn update(&self, id: i64, data: &UserPatch) -> Result<User, ApiError> {
        self.api.update(id, data).await
    }
}

fn mapping_failure(detail: String) -> AuthError {
    log::warn!("login: response violated API contract: {detail}");
    AuthError::Mapping(detail)
}
