use std::sync::Arc;

use crate::config::SecretManager;
use crate::errors::InternalError;
use crate::providers::TokenProvider;

/// Issue a bearer token for `subject`, valid for `minutes`
pub fn issue_token(
    secret_manager: Arc<SecretManager>,
    subject: &str,
    minutes: i64,
) -> Result<String, InternalError> {
    let token = TokenProvider::new(secret_manager).issue_token(subject, minutes)?;
    tracing::info!(subject = %subject, minutes, "Issued bearer token");
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::TEST_JWT_SECRET;

    fn secrets() -> Arc<SecretManager> {
        Arc::new(SecretManager::with_jwt_secret(TEST_JWT_SECRET).unwrap())
    }

    #[test]
    fn test_issued_token_validates_with_same_secret() {
        let token = issue_token(secrets(), "clerk", 5).unwrap();

        let claims = TokenProvider::new(secrets()).validate_jwt(&token).unwrap();
        assert_eq!(claims.sub, "clerk");
    }

    #[test]
    fn test_non_positive_lifetime_is_rejected() {
        assert!(issue_token(secrets(), "clerk", 0).is_err());
    }
}
