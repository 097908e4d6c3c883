use thiserror::Error;

pub mod database;
pub mod jwt_validation;

pub use database::DatabaseError;
pub use jwt_validation::{JwtFailClass, JwtValidationError};

/// Internal error type for store, provider and startup operations
///
/// Never rendered to a caller. Stores map these onto the repository
/// contract and the coordinator maps that onto an `Outcome`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    #[error(transparent)]
    JwtValidation(#[from] JwtValidationError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: &str, message: impl Into<String>) -> InternalError {
        InternalError::Parse {
            value_type: value_type.to_string(),
            message: message.into(),
        }
    }

    pub fn crypto(operation: &str, message: impl Into<String>) -> InternalError {
        InternalError::Crypto {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    /// True when the underlying database error means no row matched
    pub fn is_record_not_found(&self) -> bool {
        matches!(
            self,
            InternalError::Database(DatabaseError::Operation {
                source: sea_orm::DbErr::RecordNotFound(_) | sea_orm::DbErr::RecordNotUpdated,
                ..
            })
        )
    }
}
