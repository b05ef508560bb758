// Portal Authentication Library
// Provides password hashing, JWT issuance/validation, and credential lookup

pub mod credentials;
pub mod error;
pub mod extractor;
pub mod jwt;
pub mod password;
pub mod settings;

// Re-export commonly used types
pub use credentials::{authenticate, Credential, CredentialStore, StaticCredentialStore};
pub use error::{AuthError, AuthResult};
pub use extractor::extract_bearer_token;
pub use jwt::{create_and_sign_token, validate_jwt_token, JwtClaims, DEFAULT_JWT_EXPIRY_HOURS};
pub use settings::AuthSettings;
