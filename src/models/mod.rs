//! Data models for the RevenueCat API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Identifiers and the API version selector
//! - [`enums`] - Stores, period types and platforms
//! - [`project`] - Projects and apps
//! - [`offering`] - Offerings
//! - [`product`] - Packages and products
//! - [`subscriber`] - Subscribers, entitlements, purchases and attributes
//!
//! Fields whose shape the API leaves open (metadata, product display names,
//! subscription durations) are kept as raw [`serde_json::Value`]s.

pub mod primitives;
pub mod enums;
pub mod project;
pub mod offering;
pub mod product;
pub mod subscriber;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use project::*;
pub use offering::*;
pub use product::*;
pub use subscriber::*;
