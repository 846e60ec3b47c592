//! Project and app models.

use serde::{Deserialize, Serialize};

/// A RevenueCat project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Object discriminator, `"project"`
    #[serde(default)]
    pub object: String,
    /// Creation time, milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,
}

/// An app registered in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// App identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Object discriminator, `"app"`
    #[serde(default)]
    pub object: String,
    /// Owning project
    pub project_id: String,
    /// Store type, e.g. `app_store`, `play_store`, `stripe`
    #[serde(rename = "type")]
    pub app_type: String,
    /// Creation time, milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,
    /// App Store settings, present for Apple apps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_store: Option<AppStoreApp>,
    /// Play Store settings, present for Android apps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_store: Option<PlayStoreApp>,
}

/// App Store details of an [`App`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStoreApp {
    /// Bundle identifier
    pub bundle_id: String,
}

/// Play Store details of an [`App`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStoreApp {
    /// Android package name
    pub package_name: String,
}
