//! Enumeration types for the RevenueCat API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store a purchase was made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Store {
    /// Apple App Store
    AppStore,
    /// Mac App Store
    MacAppStore,
    /// Google Play Store
    PlayStore,
    /// Amazon Appstore
    Amazon,
    /// Stripe
    Stripe,
    /// Granted from the RevenueCat dashboard or API
    Promotional,
    /// A store this client does not know about yet
    #[serde(other)]
    #[default]
    Unknown,
}

impl Store {
    /// Returns `true` for Apple's stores.
    pub fn is_apple(&self) -> bool {
        matches!(self, Store::AppStore | Store::MacAppStore)
    }
}

/// Period type of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    /// Regular, full-price period
    #[default]
    Normal,
    /// Free trial
    Trial,
    /// Introductory price period
    Intro,
    /// A period type this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// Calling platform, sent as the `X-Platform` header.
///
/// RevenueCat uses it to record the subscriber's `last_seen` per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS
    Ios,
    /// Android
    Android,
    /// Amazon devices
    Amazon,
    /// macOS
    Macos,
    /// Catalyst apps
    Uikitformac,
    /// Web purchases through Stripe
    Stripe,
}

impl Platform {
    /// Header value for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Amazon => "amazon",
            Platform::Macos => "macos",
            Platform::Uikitformac => "uikitformac",
            Platform::Stripe => "stripe",
        }
    }
}

impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_wire_names() {
        let store: Store = serde_json::from_str(r#""mac_app_store""#).unwrap();
        assert_eq!(store, Store::MacAppStore);
        assert!(store.is_apple());
        assert_eq!(serde_json::to_string(&Store::PlayStore).unwrap(), r#""play_store""#);
    }

    #[test]
    fn test_unknown_values_tolerated() {
        let store: Store = serde_json::from_str(r#""rc_billing""#).unwrap();
        assert_eq!(store, Store::Unknown);
        let period: PeriodType = serde_json::from_str(r#""prepaid""#).unwrap();
        assert_eq!(period, PeriodType::Unknown);
    }

    #[test]
    fn test_platform_header_values() {
        assert_eq!(Platform::Ios.as_str(), "ios");
        assert_eq!(Platform::Uikitformac.to_string(), "uikitformac");
        assert_eq!(Platform::Stripe.as_ref(), "stripe");
        assert_eq!(
            serde_json::to_string(&Platform::Android).unwrap(),
            r#""android""#
        );
    }
}
