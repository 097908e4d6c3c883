use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JwtFailClass {
    /// Token is not structurally a JWT or cannot be decoded
    Malformed,

    /// Token is structurally valid but cryptographic verification failed
    Invalid,

    /// Token verified but rejected by claim validation (exp, nbf, ...)
    ClaimsRejected,

    /// Token uses a disallowed algorithm or key format
    Unsupported,

    /// Failure inside the validation machinery itself
    Internal,
}

#[derive(Debug, Error)]
#[error("JWT validation failed: {class:?} ({note})")]
pub struct JwtValidationError {
    pub class: JwtFailClass,

    /// Small, stable hint like "expired", "signature", "malformed"
    pub note: &'static str,

    #[source]
    pub source: jsonwebtoken::errors::Error,
}

impl From<jsonwebtoken::errors::Error> for JwtValidationError {
    fn from(source: jsonwebtoken::errors::Error) -> Self {
        let (class, note) = classify_jwt_error(&source);
        Self {
            class,
            note,
            source,
        }
    }
}

fn classify_jwt_error(err: &jsonwebtoken::errors::Error) -> (JwtFailClass, &'static str) {
    use jsonwebtoken::errors::ErrorKind::*;

    match err.kind() {
        InvalidToken | Base64(_) | Json(_) | Utf8(_) => (JwtFailClass::Malformed, "malformed"),

        InvalidSignature | InvalidAlgorithm => (JwtFailClass::Invalid, "signature"),

        ExpiredSignature => (JwtFailClass::ClaimsRejected, "expired"),

        ImmatureSignature
        | InvalidAudience
        | InvalidIssuer
        | InvalidSubject
        | MissingRequiredClaim(_) => (JwtFailClass::ClaimsRejected, "claims"),

        MissingAlgorithm | InvalidAlgorithmName | InvalidKeyFormat => {
            (JwtFailClass::Unsupported, "algorithm")
        }

        _ => (JwtFailClass::Internal, "internal"),
    }
}
