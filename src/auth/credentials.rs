//! The v1/v2 bearer key pair.

use secrecy::{ExposeSecret, SecretString};

use crate::{ApiVersion, Error, Result};

/// Environment variable holding the v1 secret key.
pub const ENV_API_KEY_V1: &str = "REVENUECAT_API_KEY_V1";

/// Environment variable holding the v2 secret key.
pub const ENV_API_KEY_V2: &str = "REVENUECAT_API_KEY_V2";

/// Secret API keys, one per API version.
///
/// Keys are held as [`SecretString`] so they never show up in `Debug`
/// output or log lines.
#[derive(Clone)]
pub struct Credentials {
    v1: SecretString,
    v2: SecretString,
}

impl Credentials {
    /// Create credentials from the v1 and v2 secret keys.
    pub fn new(api_key_v1: impl Into<String>, api_key_v2: impl Into<String>) -> Self {
        Self {
            v1: SecretString::from(api_key_v1.into()),
            v2: SecretString::from(api_key_v2.into()),
        }
    }

    /// Read both keys from `REVENUECAT_API_KEY_V1` and `REVENUECAT_API_KEY_V2`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either variable is unset or not valid
    /// unicode.
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name).map_err(|e| Error::Config(format!("{name}: {e}")))
        };
        Ok(Self::new(read(ENV_API_KEY_V1)?, read(ENV_API_KEY_V2)?))
    }

    /// The key that authorizes calls against `version`.
    pub fn key_for(&self, version: ApiVersion) -> &SecretString {
        match version {
            ApiVersion::V1 => &self.v1,
            ApiVersion::V2 => &self.v2,
        }
    }

    /// The `Authorization` header value for `version`.
    pub(crate) fn bearer(&self, version: ApiVersion) -> String {
        format!("Bearer {}", self.key_for(version).expose_secret())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("v1", &"[REDACTED]")
            .field("v2", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_selected_by_version() {
        let credentials = Credentials::new("key-one", "key-two");
        assert_eq!(credentials.key_for(ApiVersion::V1).expose_secret(), "key-one");
        assert_eq!(credentials.key_for(ApiVersion::V2).expose_secret(), "key-two");
        assert_eq!(credentials.bearer(ApiVersion::V1), "Bearer key-one");
        assert_eq!(credentials.bearer(ApiVersion::V2), "Bearer key-two");
    }

    #[test]
    fn test_debug_redacts_keys() {
        let credentials = Credentials::new("sk_live_secret", "sk_v2_secret");
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("sk_live_secret"));
        assert!(!debug.contains("sk_v2_secret"));
        assert!(debug.contains("REDACTED"));
    }
}
