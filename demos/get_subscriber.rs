//! Subscriber lookup example.
//!
//! Fetches a subscriber, prints their active entitlements and lists the
//! projects visible to the v2 key.
//!
//! Run with: REVENUECAT_API_KEY_V1=... REVENUECAT_API_KEY_V2=... \
//!     cargo run --example get_subscriber -- <app_user_id>

use revenuecat_rs::{AppUserId, Platform, RevenueCatClient};

#[tokio::main]
async fn main() -> revenuecat_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let user_id = std::env::args()
        .nth(1)
        .expect("usage: get_subscriber <app_user_id>");

    let client = RevenueCatClient::from_env()?;

    let response = client
        .subscribers()
        .get_with_platform(&AppUserId::new(&user_id), Platform::Ios)
        .await?;
    let subscriber = &response.subscriber;

    println!("Subscriber {} (first seen {:?})", user_id, subscriber.first_seen);
    let active = subscriber.active_entitlements();
    if active.is_empty() {
        println!("  no active entitlements");
    }
    for key in active {
        let entitlement = &subscriber.entitlements[key];
        println!(
            "  - {} via {} (expires {:?})",
            key, entitlement.product_identifier, entitlement.expires_date
        );
    }

    let projects = client.projects().list().await?;
    println!("\nFound {} project(s):", projects.len());
    for project in &projects.items {
        println!("  - {} ({})", project.name, project.id);
    }

    Ok(())
}
