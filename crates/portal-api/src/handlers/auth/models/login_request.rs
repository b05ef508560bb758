//! Login request model

use serde::{Deserialize, Serialize};

/// Maximum username length (prevent memory exhaustion)
const MAX_USERNAME_LENGTH: usize = 128;
/// Maximum password length (bcrypt limit is 72 bytes, but allow some headroom for encoding)
const MAX_PASSWORD_LENGTH: usize = 256;

/// Login request body
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Username for authentication
    #[serde(deserialize_with = "validate_username_length")]
    pub username: String,
    /// Password for authentication
    #[serde(deserialize_with = "validate_password_length")]
    pub password: String,
}

fn validate_username_length<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.len() > MAX_USERNAME_LENGTH {
        return Err(serde::de::Error::custom(format!(
            "username exceeds maximum length of {} characters",
            MAX_USERNAME_LENGTH
        )));
    }
    Ok(s)
}

fn validate_password_length<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.len() > MAX_PASSWORD_LENGTH {
        return Err(serde::de::Error::custom(format!(
            "password exceeds maximum length of {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_valid_body() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"admin","password":"secret"}"#).unwrap();
        assert_eq!(req.username, "admin");
        assert_eq!(req.password, "secret");
    }

    #[test]
    fn test_missing_password_is_an_error() {
        let result = serde_json::from_str::<LoginRequest>(r#"{"username":"admin"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_username_rejected() {
        let body = format!(r#"{{"username":"{}","password":"x"}}"#, "a".repeat(129));
        assert!(serde_json::from_str::<LoginRequest>(&body).is_err());
    }

    #[test]
    fn test_oversized_password_rejected() {
        let body = format!(r#"{{"username":"admin","password":"{}"}}"#, "x".repeat(257));
        assert!(serde_json::from_str::<LoginRequest>(&body).is_err());
    }
}
