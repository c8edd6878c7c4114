//! REST client for the user API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: every call returns [`ApiError::Unavailable`],
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies are distinct
//! variants so the gateway can tell a rejected login from a broken contract.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, NewUser, User, UserPatch};
use crate::config::ApiConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16 },

    /// The body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    #[error("not available outside the browser")]
    Unavailable,
}

/// Remote user API. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait UserApi: Send + Sync {
    /// `GET {base}`
    async fn list(&self) -> Result<Vec<User>, ApiError>;

    /// `GET {base}/{id}`
    async fn get(&self, id: i64) -> Result<User, ApiError>;

    /// `POST {base}`
    async fn create(&self, data: &NewUser) -> Result<User, ApiError>;

    /// `PATCH {base}/{id}`
    async fn update(&self, id: i64, data: &UserPatch) -> Result<User, ApiError>;

    /// `POST {base}/login`
    ///
    /// Returns the raw body; mapping it into a `User` belongs to the gateway.
    async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, ApiError>;
}

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(base: &str, id: i64) -> String {
    format!("{base}/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/login")
}

/// Browser implementation of [`UserApi`].
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    base: String,
}

impl HttpUserApi {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self { base: config.base_url.clone() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait::async_trait(?Send)]
impl UserApi for HttpUserApi {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.base).send().await.map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn get(&self, id: i64) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = user_endpoint(&self.base, id);
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn create(&self, data: &NewUser) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.base)
                .json(data)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = data;
            Err(ApiError::Unavailable)
        }
    }

    async fn update(&self, id: i64, data: &UserPatch) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = user_endpoint(&self.base, id);
            let resp = gloo_net::http::Request::patch(&url)
                .json(data)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, data);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = login_endpoint(&self.base);
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }
}
