//! Service-account authentication for Google APIs.
//!
//! A signed JWT assertion is exchanged at the key's token endpoint for a
//! short-lived bearer token (OAuth 2.0 JWT bearer grant).

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SheetsError;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Google caps assertion lifetime at one hour
const ASSERTION_LIFETIME_MINUTES: i64 = 60;

pub const SCOPES: [&str; 4] = [
    "https://spreadsheets.google.com/feeds",
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/drive",
];

/// The fields of a downloaded service-account JSON key that we use.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("project_id", &self.project_id)
            .field("token_uri", &self.token_uri)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Claims<'a> {
    iss: &'a str,
    scope: String,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

fn build_claims(key: &ServiceAccountKey, issued_at: DateTime<Utc>) -> Claims<'_> {
    Claims {
        iss: &key.client_email,
        scope: SCOPES.join(" "),
        aud: &key.token_uri,
        iat: issued_at.timestamp(),
        exp: (issued_at + Duration::minutes(ASSERTION_LIFETIME_MINUTES)).timestamp(),
    }
}

fn signed_assertion(key: &ServiceAccountKey, issued_at: DateTime<Utc>) -> Result<String> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .context("Service account private key is not a valid RSA PEM key")?;

    encode(&header, &build_claims(key, issued_at), &encoding_key)
        .context("Failed to sign service account assertion")
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Exchange a signed assertion for an access token
pub async fn fetch_access_token(client: &Client, key: &ServiceAccountKey) -> Result<String> {
    let assertion = signed_assertion(key, Utc::now())?;

    let response = client
        .post(&key.token_uri)
        .form(&[
            ("grant_type", JWT_BEARER_GRANT_TYPE),
            ("assertion", assertion.as_str()),
        ])
        .send()
        .await
        .context("Failed to send token request")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SheetsError::from_status(status, &body).into());
    }

    let token: TokenResponse = response
        .json()
        .await
        .context("Failed to parse token response")?;

    debug!(
        client_email = %key.client_email,
        expires_in = ?token.expires_in,
        "Service account token issued"
    );
    Ok(token.access_token)
}
