//! Primitive types and newtypes for type-safe API interactions.
//!
//! Identifiers are wrapped in distinct types so a project ID can't be
//! passed where an app ID is expected. They are interpolated into request
//! paths as-is; callers must not pass values containing `/`, `?` or `#`.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// A RevenueCat project identifier (e.g. `proj1ab2c3d4`).
    ///
    /// # Example
    ///
    /// ```
    /// use revenuecat_rs::ProjectId;
    ///
    /// let project = ProjectId::new("proj1ab2c3d4");
    /// assert_eq!(project.to_string(), "proj1ab2c3d4");
    /// ```
    ProjectId
}

string_id! {
    /// An app identifier within a project.
    AppId
}

string_id! {
    /// An offering identifier within a project.
    OfferingId
}

string_id! {
    /// The app user ID a subscriber is known by.
    ///
    /// This is whatever ID the app passed to the SDK, or an anonymous
    /// `$RCAnonymousID:` value.
    AppUserId
}

/// The API generation a call targets.
///
/// Selects both the URL segment (`v1/` or `v2/`) and the secret key sent
/// with the call. A single call never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The v1 API (subscribers).
    V1,
    /// The v2 API (projects, apps, offerings, products).
    V2,
}

impl ApiVersion {
    /// Numeric version, `1` or `2`.
    pub fn number(&self) -> u8 {
        match self {
            ApiVersion::V1 => 1,
            ApiVersion::V2 => 2,
        }
    }

    /// Select a version by number.
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `1` or `2`.
    pub fn from_number(version: u8) -> crate::Result<Self> {
        match version {
            1 => Ok(ApiVersion::V1),
            2 => Ok(ApiVersion::V2),
            other => Err(crate::Error::InvalidInput(format!(
                "Unsupported API version: {other}. Expected 1 or 2"
            ))),
        }
    }

    /// URL path segment, without slashes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        let project = ProjectId::new("proj1");
        assert_eq!(project.as_str(), "proj1");
        assert_eq!(project.to_string(), "proj1");

        let user: AppUserId = "user_1".into();
        assert_eq!(user.as_ref(), "user_1");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = OfferingId::new("ofrng123");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""ofrng123""#);
        let back: OfferingId = serde_json::from_str(r#""ofrng123""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_api_version_segments() {
        assert_eq!(ApiVersion::V1.to_string(), "v1");
        assert_eq!(ApiVersion::V2.to_string(), "v2");
        assert_eq!(ApiVersion::V2.number(), 2);
    }

    #[test]
    fn test_api_version_from_number() {
        assert_eq!(ApiVersion::from_number(1).unwrap(), ApiVersion::V1);
        assert_eq!(ApiVersion::from_number(2).unwrap(), ApiVersion::V2);
        assert!(ApiVersion::from_number(0).is_err());
        assert!(ApiVersion::from_number(3).is_err());
    }
}
