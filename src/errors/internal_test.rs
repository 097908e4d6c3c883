#[cfg(test)]
mod tests {
    use crate::errors::internal::{InternalError, JwtFailClass, JwtValidationError};
    use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::Custom("disk full".to_string());
        let error = InternalError::database("insert_item", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("insert_item"));
        assert!(error_string.contains("Database error"));
        assert!(!error.is_record_not_found());
    }

    #[test]
    fn test_record_not_updated_is_record_not_found() {
        let error = InternalError::database("update_item", DbErr::RecordNotUpdated);
        assert!(error.is_record_not_found());

        let error = InternalError::database("find_item", DbErr::RecordNotFound("items".into()));
        assert!(error.is_record_not_found());
    }

    #[test]
    fn test_parse_error_includes_value_type() {
        let error = InternalError::parse("timestamp", "out of range");

        let error_string = error.to_string();
        assert!(error_string.contains("timestamp"));
        assert!(error_string.contains("out of range"));
        assert!(error_string.contains("Parse error"));
    }

    #[test]
    fn test_crypto_error_includes_operation() {
        let error = InternalError::crypto("jwt_generation", "invalid key");

        let error_string = error.to_string();
        assert!(error_string.contains("jwt_generation"));
        assert!(error_string.contains("Crypto error"));
    }

    #[test]
    fn test_jwt_errors_are_classified() {
        let expired = JwtValidationError::from(JwtError::from(ErrorKind::ExpiredSignature));
        assert_eq!(expired.class, JwtFailClass::ClaimsRejected);
        assert_eq!(expired.note, "expired");

        let tampered = JwtValidationError::from(JwtError::from(ErrorKind::InvalidSignature));
        assert_eq!(tampered.class, JwtFailClass::Invalid);

        let garbage = JwtValidationError::from(JwtError::from(ErrorKind::InvalidToken));
        assert_eq!(garbage.class, JwtFailClass::Malformed);

        let wrapped = InternalError::from(garbage);
        assert!(wrapped.to_string().contains("Malformed"));
    }
}
