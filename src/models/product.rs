//! Package and product models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A package inside an offering, grouping equivalent products across stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Package identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Package lookup key, e.g. `$rc_monthly`
    pub identifier: String,
    /// Product identifier on the store platform
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub platform_product_identifier: String,
    /// Display name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    /// Owning offering
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub offering_id: String,
    /// Store the package belongs to
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub store: String,
    /// Products attached to the package
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
}

/// A store product known to RevenueCat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: String,
    /// Identifier of the product in its store
    pub store_identifier: String,
    /// Product type, e.g. `subscription`, `one_time`
    #[serde(rename = "type")]
    pub product_type: String,
    /// App the product belongs to
    #[serde(default)]
    pub app_id: String,
    /// Object discriminator, `"product"`
    #[serde(default)]
    pub object: String,
    /// Creation time, milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,
    /// Display name; shape is not fixed by the API
    #[serde(default)]
    pub display_name: Value,
    /// Subscription terms, for subscription products
    #[serde(default)]
    pub subscription: Option<ProductSubscription>,
}

/// Durations of a subscription product, passed through uninterpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSubscription {
    /// Billing period, e.g. `P1M`
    #[serde(default)]
    pub duration: Value,
    /// Grace period after a failed renewal
    #[serde(default)]
    pub grace_period_duration: Value,
    /// Free trial length
    #[serde(default)]
    pub trial_duration: Value,
}
