//! HTTP client and request executor for the RevenueCat API.
//!
//! This module provides the main entry point [`RevenueCatClient`].
//!
//! # Example
//!
//! ```no_run
//! use revenuecat_rs::{ProjectId, RevenueCatClient};
//!
//! # async fn example() -> revenuecat_rs::Result<()> {
//! let client = RevenueCatClient::new("sk_v1_key", "sk_v2_key")?;
//!
//! let offerings = client.offerings().list(&ProjectId::new("proj1a2b3c")).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
mod request;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use http::{RevenueCatClient, PLATFORM_HEADER};
pub use paginated::{Page, Pager};
pub(crate) use http::ClientInner;
pub(crate) use request::ApiRequest;
