//! Wire DTOs for the user API and the mapped client-side `User`.
//!
//! DESIGN
//! ======
//! The login endpoint speaks a different user shape (`name`/`surname`) than
//! the CRUD endpoints (`firstName`/`lastName`). Both land in the same `User`
//! value; the login shape goes through `LoginResponse::into_user`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as held by the session store.
///
/// Every field is required on the wire, so a `User` is never partially
/// populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Display name as composed by the server.
    pub full_name: String,
}

/// User payload nested inside a login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub name: String,
    pub surname: String,
}

impl From<ApiUser> for User {
    fn from(api: ApiUser) -> Self {
        Self {
            id: api.id,
            email: api.email,
            first_name: api.name,
            last_name: api.surname,
            full_name: api.full_name,
        }
    }
}

/// Body of a `POST {base}/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Whether the server accepted the credentials.
    pub success: bool,
    /// Present when `success` is true.
    #[serde(default)]
    pub user: Option<ApiUser>,
}

/// Outcome of mapping a raw login body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginPayload {
    Accepted(User),
    Rejected,
}

impl LoginResponse {
    /// Parse a raw login body.
    ///
    /// # Errors
    ///
    /// Returns the decode error text when a required field is missing or has
    /// the wrong type, or when an accepted response carries no user.
    pub fn parse(raw: &serde_json::Value) -> Result<LoginPayload, String> {
        let response = Self::deserialize(raw).map_err(|e| e.to_string())?;
        response.into_payload()
    }

    fn into_payload(self) -> Result<LoginPayload, String> {
        if !self.success {
            return Ok(LoginPayload::Rejected);
        }
        let user = self.user.ok_or_else(|| "missing field `user`".to_owned())?;
        Ok(LoginPayload::Accepted(user.into()))
    }
}

/// Login form submission body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body for `POST {base}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body for `PATCH {base}/{id}`. Unset fields are left out of the request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
