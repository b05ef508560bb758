/// Errors produced by credential checks and token validation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No Authorization header was present on the request.
    #[error("Missing authorization: {0}")]
    MissingAuthorization(String),

    /// The Authorization header or token structure could not be parsed.
    #[error("Malformed authorization: {0}")]
    MalformedAuthorization(String),

    /// Username unknown or password mismatch. Carries no detail so the two
    /// cases are indistinguishable to the caller.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The token's `exp` claim is in the past.
    #[error("Token has expired")]
    TokenExpired,

    /// Signature verification failed.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// The token's `iss` claim is not in the trusted list.
    #[error("Untrusted issuer: {0}")]
    UntrustedIssuer(String),

    /// A required claim is absent or empty.
    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    /// bcrypt or JWT encoding failed internally.
    #[error("Hashing error: {0}")]
    HashingError(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
