//! Offering models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A set of packages presented to users on a paywall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    /// Offering identifier
    pub id: String,
    /// Key the SDK looks the offering up by
    pub lookup_key: String,
    /// Display name
    #[serde(default)]
    pub display_name: String,
    /// Whether this is the project's current offering
    #[serde(default)]
    pub is_current: bool,
    /// Object discriminator, `"offering"`
    #[serde(default)]
    pub object: String,
    /// Owning project
    pub project_id: String,
    /// Creation time, milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,
    /// Free-form metadata attached in the dashboard
    #[serde(default)]
    pub metadata: Value,
}
