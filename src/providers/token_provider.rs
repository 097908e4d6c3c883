use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::SecretManager;
use crate::errors::internal::JwtValidationError;
use crate::errors::InternalError;
use crate::types::internal::auth::Claims;

/// Cookie the sign-in form stores the access token in
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Issues and validates the HS256 access tokens checked by the authorization gate
pub struct TokenProvider {
    secret_manager: Arc<SecretManager>,
}

impl TokenProvider {
    pub fn new(secret_manager: Arc<SecretManager>) -> Self {
        Self { secret_manager }
    }

    /// Generate a JWT for `subject` valid for `ttl_minutes`
    ///
    /// # Returns
    /// * `Ok(String)` - The encoded token
    /// * `Err(InternalError)` - Non-positive lifetime or encoding failure
    pub fn issue_token(&self, subject: &str, ttl_minutes: i64) -> Result<String, InternalError> {
        if ttl_minutes <= 0 {
            return Err(InternalError::parse(
                "token_lifetime",
                format!("lifetime must be positive, got {} minutes", ttl_minutes),
            ));
        }

        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + Duration::minutes(ttl_minutes)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
        )
        .map_err(|e| InternalError::crypto("jwt_generation", format!("Failed to generate JWT: {}", e)))?;

        tracing::debug!(subject = %claims.sub, jti = %claims.jti, "Issued access token");

        Ok(token)
    }

    /// Validate a JWT and return its claims
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, InternalError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            let err = JwtValidationError::from(e);
            tracing::debug!(class = ?err.class, note = err.note, "Rejected bearer token");
            InternalError::from(err)
        })
    }
}
