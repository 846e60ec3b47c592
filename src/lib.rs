//! # revenuecat-rs
//!
//! A typed async Rust client for the RevenueCat subscription API.
//!
//! The crate wraps the v1 (subscribers) and v2 (projects, apps, offerings,
//! products) REST APIs: it builds the authenticated request, sends it,
//! decodes the JSON response into typed models and turns error responses
//! into a structured [`Error`].
//!
//! ## Features
//!
//! - **Versioned authentication**: separate v1 and v2 secret keys, picked
//!   per call and held as secrets
//! - **Projects**: list projects, apps, offerings and products
//! - **Subscribers**: fetch, update attributes, delete, check entitlements
//! - **Type Safety**: distinct ID types and strongly-typed models
//! - **Async-first**: built on `reqwest`; one request per call, no retries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use revenuecat_rs::{AppUserId, ProjectId, RevenueCatClient};
//!
//! #[tokio::main]
//! async fn main() -> revenuecat_rs::Result<()> {
//!     let client = RevenueCatClient::new("sk_v1_key", "sk_v2_key")?;
//!
//!     // v2: projects and their offerings
//!     let projects = client.projects().list().await?;
//!     if let Some(project) = projects.items.first() {
//!         let offerings = client.offerings().list(&ProjectId::new(&project.id)).await?;
//!         println!("{} offerings in {}", offerings.len(), project.name);
//!     }
//!
//!     // v1: subscriber entitlements
//!     let response = client.subscribers().get(&AppUserId::new("user_1")).await?;
//!     if response.subscriber.is_entitled_to("pro") {
//!         println!("user_1 has pro");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use revenuecat_rs::{AppUserId, Error, RevenueCatClient};
//!
//! # async fn example(client: RevenueCatClient) {
//! match client.subscribers().delete(&AppUserId::new("user_1")).await {
//!     Ok(()) => println!("deleted"),
//!     Err(Error::Api { status, error }) => println!("{status}: {}", error.message),
//!     Err(other) => println!("request failed: {other}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{ApiErrorBody, Error, Result};
pub use models::{ApiVersion, AppId, AppUserId, OfferingId, Platform, ProjectId};
pub use client::{ClientConfig, Page, Pager, RevenueCatClient};
pub use auth::Credentials;

/// Prelude module for convenient imports.
///
/// ```rust
/// use revenuecat_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ApiErrorBody, Error, Result};
    pub use crate::models::{
        // Primitives
        ApiVersion, AppId, AppUserId, OfferingId, ProjectId,
        // Enums
        PeriodType, Platform, Store,
        // Project models
        App, Offering, Package, Product, Project,
        // Subscriber models
        Entitlement, NonSubscription, Subscriber, SubscriberAttribute, SubscriberResponse,
        Subscription,
    };
    pub use crate::client::{ClientConfig, Page, Pager, RevenueCatClient};
    pub use crate::auth::Credentials;
}
