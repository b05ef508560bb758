// Configuration module
use anyhow::{bail, Context};
use portal_auth::{AuthSettings, Credential};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable consulted for the JWT secret when the config file
/// does not set one.
pub const JWT_SECRET_ENV: &str = "PORTAL_JWT_SECRET";

/// Main server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub auth: AuthSection,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// 0 means one worker per CPU core
    #[serde(default)]
    pub workers: usize,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Auth settings: the single credential and the token signing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSection {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_user_id")]
    pub user_id: u64,
    /// Bcrypt hash of the password (preferred)
    #[serde(default)]
    pub password_hash: Option<String>,
    /// Plaintext password; hashed once at startup. Prefer `password_hash`.
    #[serde(default)]
    pub password: Option<String>,
    /// HS256 signing secret. Falls back to the PORTAL_JWT_SECRET environment
    /// variable; startup fails if neither is set.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    #[serde(default = "default_jwt_expiry_hours")]
    pub jwt_expiry_hours: i64,
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        let config: ServerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Resolve the token settings, failing closed when no secret is
    /// configured. There is deliberately no built-in default secret.
    pub fn auth_settings(&self) -> anyhow::Result<AuthSettings> {
        let secret = self
            .auth
            .jwt_secret
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| std::env::var(JWT_SECRET_ENV).ok().filter(|s| !s.is_empty()));

        let Some(secret) = secret else {
            bail!(
                "No JWT secret configured. Set [auth] jwt_secret in config.toml \
                 or the {} environment variable",
                JWT_SECRET_ENV
            );
        };

        if self.auth.jwt_expiry_hours <= 0 {
            bail!("[auth] jwt_expiry_hours must be positive");
        }

        Ok(AuthSettings::new(secret, self.auth.jwt_expiry_hours, self.auth.issuer.clone()))
    }

    /// Build the single credential record, hashing a configured plaintext
    /// password at startup if no hash was provided. Exactly one of
    /// `password_hash` and `password` must be set.
    pub async fn credential(&self) -> anyhow::Result<Credential> {
        let password_hash = match (&self.auth.password_hash, &self.auth.password) {
            (Some(_), Some(_)) => {
                bail!("[auth] password and password_hash are mutually exclusive; set one")
            },
            (Some(hash), None) => hash.clone(),
            (None, Some(password)) => {
                log::warn!(
                    "[auth] password is set in plaintext; replace it with password_hash"
                );
                portal_auth::password::hash_password(password, None)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to hash configured password: {}", e))?
            },
            (None, None) => {
                bail!("No credential configured. Set [auth] password_hash (or password)")
            },
        };

        if self.auth.username.is_empty() {
            bail!("[auth] username must not be empty");
        }

        Ok(Credential {
            user_id: self.auth.user_id,
            username: self.auth.username.clone(),
            password_hash,
        })
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: default_log_file(),
            log_to_console: true,
            format: default_log_format(),
        }
    }
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            username: default_username(),
            user_id: default_user_id(),
            password_hash: None,
            password: None,
            jwt_secret: None,
            jwt_expiry_hours: default_jwt_expiry_hours(),
            issuer: default_issuer(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/portal-server.log".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_true() -> bool {
    true
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_user_id() -> u64 {
    1
}

fn default_jwt_expiry_hours() -> i64 {
    portal_auth::DEFAULT_JWT_EXPIRY_HOURS
}

fn default_issuer() -> String {
    "portal".to_string()
}
