// SPDX-License-Identifier: MPL-2.0
//! Session provider over the hosted auth REST endpoints.
//!
//! Sign-in and sign-up exchange credentials for a `Session` carrying the
//! access token and the user record; sign-out revokes the token server-side.
//! The provider is `Clone` (the inner HTTP client is reference-counted) so
//! async tasks can take an owned copy.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::json;

/// Metadata attached to the user at sign-up.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    pub name: Option<String>,
}

/// The authenticated user as returned by the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// An active session: token plus the user it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

impl Session {
    /// The user's display name from sign-up metadata, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.user_metadata.name.as_deref()
    }
}

/// Successful auth responses carry the token and user at the top level.
#[derive(Debug, Deserialize)]
struct AuthEnvelope {
    access_token: Option<String>,
    user: Option<AuthUser>,
}

/// Error payloads vary between auth endpoints; take the first message found.
#[derive(Debug, Deserialize)]
struct AuthErrorPayload {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl AuthErrorPayload {
    fn into_message(self, fallback: &str) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[derive(Clone)]
pub struct SessionProvider {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SessionProvider {
    pub fn new(client: reqwest::Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Registers a new account and returns the session opened for it.
    pub async fn sign_up(self, email: String, password: String, name: String) -> Result<Session> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        let body = json!({
            "email": email,
            "password": password,
            "data": { "name": name },
        });
        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;
        Self::session_from_response(response).await
    }

    /// Exchanges email + password for a session.
    pub async fn sign_in(self, email: String, password: String) -> Result<Session> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let body = json!({ "email": email, "password": password });
        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;
        Self::session_from_response(response).await
    }

    /// Revokes the session's token. The local session is discarded by the
    /// caller regardless of the outcome reported here.
    pub async fn sign_out(self, access_token: String) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&access_token)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn session_from_response(response: reqwest::Response) -> Result<Session> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let envelope: AuthEnvelope = response.json().await?;
        match (envelope.access_token, envelope.user) {
            (Some(access_token), Some(user)) => Ok(Session { access_token, user }),
            _ => Err(Error::Auth(
                "Sign-in did not return an active session".to_string(),
            )),
        }
    }

    async fn error_from_response(response: reqwest::Response) -> Error {
        let fallback = format!("Authentication failed ({})", response.status());
        match response.json::<AuthErrorPayload>().await {
            Ok(payload) => Error::Auth(payload.into_message(&fallback)),
            Err(_) => Error::Auth(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_prefers_error_description() {
        let payload: AuthErrorPayload = serde_json::from_str(
            r#"{"error_description": "Invalid login credentials", "msg": "other"}"#,
        )
        .unwrap();
        assert_eq!(
            payload.into_message("fallback"),
            "Invalid login credentials"
        );
    }

    #[test]
    fn error_payload_falls_back_when_empty() {
        let payload: AuthErrorPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.into_message("fallback"), "fallback");
    }

    #[test]
    fn session_exposes_metadata_name() {
        let user: AuthUser = serde_json::from_str(
            r#"{"id": "u1", "email": "lucy@example.com", "user_metadata": {"name": "Lucy"}}"#,
        )
        .unwrap();
        let session = Session {
            access_token: "token".to_string(),
            user,
        };
        assert_eq!(session.display_name(), Some("Lucy"));
    }

    #[test]
    fn metadata_defaults_when_absent() {
        let user: AuthUser = serde_json::from_str(r#"{"id": "u1", "email": null}"#).unwrap();
        assert!(user.user_metadata.name.is_none());
    }
}
