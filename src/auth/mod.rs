//! API credentials for the RevenueCat API.
//!
//! RevenueCat issues separate secret keys for its v1 and v2 APIs. Every call
//! targets exactly one version and carries exactly that version's key:
//!
//! ```
//! use revenuecat_rs::{ApiVersion, Credentials};
//! use secrecy::ExposeSecret;
//!
//! let credentials = Credentials::new("sk_v1_key", "sk_v2_key");
//! assert_eq!(credentials.key_for(ApiVersion::V2).expose_secret(), "sk_v2_key");
//! ```

mod credentials;

pub use credentials::{Credentials, ENV_API_KEY_V1, ENV_API_KEY_V2};
