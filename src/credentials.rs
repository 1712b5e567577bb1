use serde::{Deserialize, Serialize};

use crate::error::JdUnionError;
use crate::UnionResult;

/// Environment variable holding the application key.
pub const APP_KEY_VAR: &str = "JD_UNION_APP_KEY";
/// Environment variable holding the application secret.
pub const SECRET_VAR: &str = "JD_UNION_SECRET";

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Credentials for the client.
pub struct Credentials {
    /// The application key, sent as `app_key`.
    pub app_key: String,
    /// The shared secret used to sign requests. Never sent over the wire.
    pub secret: String,
}

impl Credentials {
    /// Creates a new `Credentials` struct.
    pub fn new(app_key: &str, secret: &str) -> Credentials {
        Credentials {
            app_key: app_key.to_string(),
            secret: secret.to_string(),
        }
    }

    /// Reads the credentials from `JD_UNION_APP_KEY` and `JD_UNION_SECRET`.
    pub fn from_env() -> UnionResult<Credentials> {
        let app_key =
            std::env::var(APP_KEY_VAR).map_err(|_| JdUnionError::MissingCredentials(APP_KEY_VAR))?;
        let secret =
            std::env::var(SECRET_VAR).map_err(|_| JdUnionError::MissingCredentials(SECRET_VAR))?;
        Ok(Credentials { app_key, secret })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &self.app_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}
