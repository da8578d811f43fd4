//! JWT access token validation
//!
//! Tokens are issued by the account service and signed with HS256 using the
//! shared `ACCESS_TOKEN_KEY`. This side only decodes them; `issue` exists so
//! tests and tooling can mint tokens with the same key.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub id: String,
    /// Username, used as the owner of created resources
    pub username: String,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
    /// Expiration time (Unix timestamp); without it the token ages out
    /// `access_token_age` seconds after `iat`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// JWT service for validating access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_age: i64,
}

impl JwtService {
    /// Create a new JWT service with the given key and token lifetime in seconds
    #[must_use]
    pub fn new(access_token_key: &str, access_token_age: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(access_token_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(access_token_key.as_bytes()),
            access_token_age,
        }
    }

    /// Sign an access token for the given user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, id: &str, username: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            id: id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: Some((now + Duration::seconds(self.access_token_age)).timestamp()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns `TokenExpired` for expired tokens and `InvalidToken` for
    /// anything else that fails verification
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        let claims = token_data.claims;
        if claims.exp.is_none() && Utc::now().timestamp() - claims.iat > self.access_token_age {
            return Err(AppError::TokenExpired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_age", &self.access_token_age)
            .finish_non_exhaustive()
    }
}
