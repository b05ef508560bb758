// JWT issuance and validation module

use crate::error::{AuthError, AuthResult};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Default JWT expiration time in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default issuer for portal tokens
pub const PORTAL_ISSUER: &str = "portal";

/// JWT claims structure for portal session tokens.
///
/// Standard JWT claims plus the username custom claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID, stringified)
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    /// Username (custom claim)
    pub username: String,
}

impl JwtClaims {
    /// Create new claims for a user.
    ///
    /// # Arguments
    /// * `user_id` - User's unique identifier
    /// * `username` - Username
    /// * `issuer` - Issuer to stamp into the `iss` claim
    /// * `expiry_hours` - Token expiration in hours (defaults to DEFAULT_JWT_EXPIRY_HOURS)
    pub fn new(user_id: u64, username: &str, issuer: &str, expiry_hours: Option<i64>) -> Self {
        let now = chrono::Utc::now();
        let exp_hours = expiry_hours.unwrap_or(DEFAULT_JWT_EXPIRY_HOURS);
        let exp = now + chrono::Duration::hours(exp_hours);

        Self {
            sub: user_id.to_string(),
            iss: issuer.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
            username: username.to_string(),
        }
    }

    /// Parse the `sub` claim back into a numeric user id.
    ///
    /// # Errors
    /// Returns `AuthError::MissingClaim` if `sub` is empty or not numeric
    pub fn user_id(&self) -> AuthResult<u64> {
        self.sub
            .parse::<u64>()
            .map_err(|_| AuthError::MissingClaim("sub".to_string()))
    }
}

/// Generate a signed JWT from prepared claims.
///
/// # Errors
/// Returns `AuthError::HashingError` if encoding fails
pub fn generate_jwt_token(claims: &JwtClaims, secret: &str) -> AuthResult<String> {
    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &encoding_key)
        .map_err(|e| AuthError::HashingError(format!("JWT encoding error: {}", e)))
}

/// Create and sign a new session token in one step.
///
/// This is the preferred way to generate tokens to ensure consistency.
pub fn create_and_sign_token(
    user_id: u64,
    username: &str,
    issuer: &str,
    expiry_hours: Option<i64>,
    secret: &str,
) -> AuthResult<(String, JwtClaims)> {
    let claims = JwtClaims::new(user_id, username, issuer, expiry_hours);
    let token = generate_jwt_token(&claims, secret)?;
    Ok((token, claims))
}

/// Validate a JWT token and extract claims.
///
/// Verifies:
/// - Token signature (using provided secret)
/// - Token expiration
/// - Issuer is in trusted list
/// - Required claims are present
///
/// # Arguments
/// * `token` - JWT token string (without "Bearer " prefix)
/// * `secret` - Secret key for signature verification
/// * `trusted_issuers` - List of trusted issuers
///
/// # Errors
/// - `AuthError::InvalidSignature` if signature verification fails
/// - `AuthError::TokenExpired` if token has expired
/// - `AuthError::UntrustedIssuer` if issuer is not in trusted list
/// - `AuthError::MissingClaim` if required claim is missing
pub fn validate_jwt_token(
    token: &str,
    secret: &str,
    trusted_issuers: &[String],
) -> AuthResult<JwtClaims> {
    // Decode token header first so structurally broken tokens fail early
    let _header = decode_header(token)
        .map_err(|e| AuthError::MalformedAuthorization(format!("Invalid JWT header: {}", e)))?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.validate_nbf = false;

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data =
        decode::<JwtClaims>(token, &decoding_key, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::MalformedAuthorization(format!("JWT decode error: {}", e)),
        })?;

    let claims = token_data.claims;

    verify_issuer(&claims.iss, trusted_issuers)?;

    if claims.sub.is_empty() {
        return Err(AuthError::MissingClaim("sub".to_string()));
    }
    if claims.username.is_empty() {
        return Err(AuthError::MissingClaim("username".to_string()));
    }

    Ok(claims)
}

/// Verify the JWT issuer is in the trusted list.
///
/// # Security Note
/// If no trusted issuers are configured, ALL issuers are rejected.
/// This is a secure-by-default approach to prevent accepting arbitrary tokens.
fn verify_issuer(issuer: &str, trusted_issuers: &[String]) -> AuthResult<()> {
    if trusted_issuers.is_empty() {
        return Err(AuthError::UntrustedIssuer(format!(
            "No trusted issuers configured. Rejecting issuer: {}",
            issuer
        )));
    }

    if trusted_issuers.iter().any(|i| i == issuer) {
        Ok(())
    } else {
        Err(AuthError::UntrustedIssuer(issuer.to_string()))
    }
}
