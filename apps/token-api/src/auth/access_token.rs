//! LiveKit access tokens: HS256 JWTs carrying a video grant.
//!
//! The API key is the issuer, the participant identity is the subject and the
//! API secret is the signing key. LiveKit validates the token on join; nothing
//! here keeps track of issued tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Participant token TTL in seconds (24 hours).
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error("API key and secret must be set")]
    MissingKeys,
    #[error("identity is required for a room-join grant")]
    MissingIdentity,
    #[error("signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Room permissions, serialized under the `video` claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub room_join: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub room: String,
}

impl VideoGrant {
    /// Grant permission to join `room`.
    pub fn join(room: impl Into<String>) -> Self {
        Self {
            room_join: true,
            room: room.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Issuer, the API key.
    pub iss: String,
    /// Subject, the participant identity.
    pub sub: String,
    /// Not-before (unix timestamp).
    pub nbf: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub video: VideoGrant,
}

/// Builder for a single access token.
#[derive(Debug, Clone)]
pub struct AccessToken {
    api_key: String,
    api_secret: String,
    identity: String,
    name: Option<String>,
    grant: VideoGrant,
    ttl: Duration,
}

impl AccessToken {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            identity: String::new(),
            name: None,
            grant: VideoGrant::default(),
            ttl: Duration::seconds(TOKEN_TTL_SECS),
        }
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }

    /// Display name shown to other participants. Defaults to the identity on the LiveKit side.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_grant(mut self, grant: VideoGrant) -> Self {
        self.grant = grant;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sign the token. The validity window starts now.
    pub fn to_jwt(&self) -> Result<String, IssueError> {
        if self.api_key.is_empty() || self.api_secret.is_empty() {
            return Err(IssueError::MissingKeys);
        }
        if self.grant.room_join && self.identity.is_empty() {
            return Err(IssueError::MissingIdentity);
        }

        let now = Utc::now();
        let claims = AccessTokenClaims {
            iss: self.api_key.clone(),
            sub: self.identity.clone(),
            nbf: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            name: self.name.clone(),
            video: self.grant.clone(),
        };

        let key = EncodingKey::from_secret(self.api_secret.as_bytes());
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &key,
        )?)
    }
}

/// Mint a 24-hour token that lets `participant_name` join `room_name`.
pub fn issue_token(
    api_key: &str,
    api_secret: &str,
    room_name: &str,
    participant_name: &str,
) -> Result<String, IssueError> {
    AccessToken::new(api_key, api_secret)
        .with_identity(participant_name)
        .with_grant(VideoGrant::join(room_name))
        .to_jwt()
}

/// Verify a token's signature and expiry and return its claims.
pub fn decode_token(
    api_secret: &str,
    token: &str,
) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(api_secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);
    jsonwebtoken::decode::<AccessTokenClaims>(token, &key, &validation).map(|data| data.claims)
}
