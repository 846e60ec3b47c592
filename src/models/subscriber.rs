//! Subscriber models.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::enums::{PeriodType, Store};

/// Envelope of the get-subscriber response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberResponse {
    /// Server time the response was generated at
    pub request_date: DateTime<Utc>,
    /// Same instant as `request_date`, in milliseconds since the Unix epoch
    pub request_date_ms: i64,
    /// The subscriber
    pub subscriber: Subscriber,
}

/// A subscriber and everything they have purchased.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Entitlements keyed by entitlement identifier, expired ones included
    #[serde(default)]
    pub entitlements: HashMap<String, Entitlement>,
    /// When the subscriber was first seen
    #[serde(default)]
    pub first_seen: Option<DateTime<Utc>>,
    /// When the subscriber was last seen
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
    /// Link to the store's subscription management page
    #[serde(default)]
    pub management_url: Option<String>,
    /// First app user ID this subscriber was known by
    #[serde(default)]
    pub original_app_user_id: String,
    /// App version of the first purchase (App Store only)
    #[serde(default)]
    pub original_application_version: Option<String>,
    /// Date of the first purchase (App Store only)
    #[serde(default)]
    pub original_purchase_date: Option<DateTime<Utc>>,
    /// Subscriptions keyed by product identifier
    #[serde(default)]
    pub subscriptions: HashMap<String, Subscription>,
    /// Non-subscription purchases keyed by product identifier
    #[serde(default)]
    pub non_subscriptions: HashMap<String, Vec<NonSubscription>>,
    /// Custom and reserved attributes keyed by name
    #[serde(default)]
    pub subscriber_attributes: HashMap<String, SubscriberAttribute>,
}

impl Subscriber {
    /// Returns `true` if the subscriber holds `entitlement` right now.
    ///
    /// The clock is read on every call, so a subscriber fetched a while ago
    /// still reports expiry correctly.
    pub fn is_entitled_to(&self, entitlement: &str) -> bool {
        self.is_entitled_to_at(entitlement, Utc::now())
    }

    /// Returns `true` if the subscriber holds `entitlement` at `now`.
    pub fn is_entitled_to_at(&self, entitlement: &str, now: DateTime<Utc>) -> bool {
        self.entitlements
            .get(entitlement)
            .is_some_and(|e| e.is_active_at(now))
    }

    /// Identifiers of the entitlements active right now, sorted.
    pub fn active_entitlements(&self) -> Vec<&str> {
        self.active_entitlements_at(Utc::now())
    }

    /// Identifiers of the entitlements active at `now`, sorted.
    pub fn active_entitlements_at(&self, now: DateTime<Utc>) -> Vec<&str> {
        let mut active: Vec<&str> = self
            .entitlements
            .iter()
            .filter(|(_, e)| e.is_active_at(now))
            .map(|(key, _)| key.as_str())
            .collect();
        active.sort_unstable();
        active
    }
}

/// Access granted to a subscriber.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    /// Expiry of the grant
    #[serde(default)]
    pub expires_date: Option<DateTime<Utc>>,
    /// End of the billing grace period, if one is running
    #[serde(default)]
    pub grace_period_expires_date: Option<DateTime<Utc>>,
    /// Date of the latest purchase that unlocked the entitlement
    #[serde(default)]
    pub purchase_date: Option<DateTime<Utc>>,
    /// Product that unlocked the entitlement
    #[serde(default)]
    pub product_identifier: String,
}

impl Entitlement {
    /// Returns `true` if the expiry is not before `now`.
    ///
    /// An entitlement without an expiry is not active.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_date.is_some_and(|expires| expires >= now)
    }
}

/// A subscription purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Expiry of the current period; `None` for lifetime purchases
    #[serde(default)]
    pub expires_date: Option<DateTime<Utc>>,
    /// Date of the latest renewal
    #[serde(default)]
    pub purchase_date: Option<DateTime<Utc>>,
    /// Date of the first purchase
    #[serde(default)]
    pub original_purchase_date: Option<DateTime<Utc>>,
    /// Current period type
    #[serde(default)]
    pub period_type: PeriodType,
    /// Store the subscription was bought in
    #[serde(default)]
    pub store: Store,
    /// Whether this is a sandbox purchase
    #[serde(default)]
    pub is_sandbox: bool,
    /// When an auto-renew opt-out was detected
    #[serde(default)]
    pub unsubscribe_detected_at: Option<DateTime<Utc>>,
    /// When a billing problem was detected
    #[serde(default)]
    pub billing_issues_detected_at: Option<DateTime<Utc>>,
    /// End of the billing grace period, if one is running
    #[serde(default)]
    pub grace_period_expires_date: Option<DateTime<Utc>>,
}

/// A one-off (consumable or lifetime) purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NonSubscription {
    /// RevenueCat transaction identifier
    #[serde(default)]
    pub id: String,
    /// Whether this is a sandbox purchase
    #[serde(default)]
    pub is_sandbox: bool,
    /// Date of the first purchase
    #[serde(default)]
    pub original_purchase_date: Option<DateTime<Utc>>,
    /// Date of the purchase
    #[serde(default)]
    pub purchase_date: Option<DateTime<Utc>>,
    /// Store the product was bought in
    #[serde(default)]
    pub store: Store,
    /// Transaction identifier in the store
    #[serde(default)]
    pub store_transaction_id: String,
}

/// A named attribute stored on a subscriber.
///
/// `updated_at_ms` of `0` means "unset". An unset timestamp is left out of
/// the encoded JSON, so the server stamps the update with its own clock;
/// decoding leaves it unset unless the payload holds a positive value.
///
/// ```
/// use revenuecat_rs::models::SubscriberAttribute;
///
/// let attribute = SubscriberAttribute::new("blue");
/// assert_eq!(serde_json::to_string(&attribute).unwrap(), r#"{"value":"blue"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriberAttribute {
    /// Attribute value; an empty string deletes the attribute
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
    /// Update time in milliseconds since the Unix epoch, `0` when unset
    #[serde(
        default,
        skip_serializing_if = "is_unset",
        deserialize_with = "positive_millis"
    )]
    pub updated_at_ms: i64,
}

impl SubscriberAttribute {
    /// An attribute with no explicit update time.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            updated_at_ms: 0,
        }
    }

    /// Stamp the attribute with an explicit update time.
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at_ms = updated_at.timestamp_millis();
        self
    }

    /// The update time, or `None` when unset.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        if is_unset(&self.updated_at_ms) {
            return None;
        }
        Utc.timestamp_millis_opt(self.updated_at_ms).single()
    }
}

fn is_unset(millis: &i64) -> bool {
    *millis == 0
}

fn positive_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = Option::<i64>::deserialize(deserializer)?;
    Ok(millis.filter(|ms| *ms > 0).unwrap_or(0))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
