use std::fmt;
use std::sync::Arc;

use crate::config::errors::SecretError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

const JWT_SECRET_VAR: &str = "JWT_SECRET";
const JWT_SECRET_MIN_LENGTH: usize = 32;

/// Holds the secrets the authorization gate depends on
pub struct SecretManager {
    jwt_secret: String,
}

impl SecretManager {
    /// Load and validate secrets from the process environment
    pub fn init() -> Result<Self, SecretError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, SecretError> {
        let jwt_secret = env_provider
            .get_var(JWT_SECRET_VAR)
            .ok_or_else(|| SecretError::Missing {
                secret_name: JWT_SECRET_VAR.to_string(),
            })?;
        Self::with_jwt_secret(jwt_secret)
    }

    /// Build from an explicit secret, applying the same length rule
    pub fn with_jwt_secret(jwt_secret: impl Into<String>) -> Result<Self, SecretError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < JWT_SECRET_MIN_LENGTH {
            return Err(SecretError::InvalidLength {
                secret_name: JWT_SECRET_VAR.to_string(),
                expected: JWT_SECRET_MIN_LENGTH,
                actual: jwt_secret.len(),
            });
        }
        Ok(Self { jwt_secret })
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}
