//! Subscribers service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::{ApiRequest, ClientInner};
use crate::models::{ApiVersion, AppUserId, SubscriberAttribute, SubscriberResponse};
use crate::Result;

/// Service for subscriber operations (v1 API).
///
/// # Example
///
/// ```no_run
/// use std::collections::HashMap;
/// use revenuecat_rs::AppUserId;
/// use revenuecat_rs::models::SubscriberAttribute;
///
/// # async fn example(client: revenuecat_rs::RevenueCatClient) -> revenuecat_rs::Result<()> {
/// let user = AppUserId::new("user_1");
///
/// let response = client.subscribers().get(&user).await?;
/// println!("pro: {}", response.subscriber.is_entitled_to("pro"));
///
/// let mut attributes = HashMap::new();
/// attributes.insert("favorite_color".to_string(), SubscriberAttribute::new("blue"));
/// client.subscribers().update_attributes(&user, &attributes).await?;
/// # Ok(())
/// # }
/// ```
pub struct SubscribersService {
    inner: Arc<ClientInner>,
}

impl SubscribersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the latest subscriber info, creating the subscriber if it
    /// doesn't exist yet.
    pub async fn get(&self, user_id: &AppUserId) -> Result<SubscriberResponse> {
        self.inner
            .execute(ApiRequest::get(ApiVersion::V1, format!("subscribers/{}", user_id)))
            .await
    }

    /// Like [`get`](Self::get), also updating the subscriber's `last_seen`
    /// for `platform`.
    ///
    /// Accepts a [`Platform`](crate::Platform) or any raw header value. An
    /// empty value sends no `X-Platform` header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the
    /// value is not a valid header value; nothing is sent in that case.
    pub async fn get_with_platform(
        &self,
        user_id: &AppUserId,
        platform: impl AsRef<str>,
    ) -> Result<SubscriberResponse> {
        self.inner
            .execute(
                ApiRequest::get(ApiVersion::V1, format!("subscribers/{}", user_id))
                    .platform(platform.as_ref()),
            )
            .await
    }

    /// Set or update attributes of a subscriber.
    ///
    /// Attributes without an update time are stamped by the server.
    pub async fn update_attributes(
        &self,
        user_id: &AppUserId,
        attributes: &HashMap<String, SubscriberAttribute>,
    ) -> Result<()> {
        #[derive(serde::Serialize)]
        struct Request<'a> {
            attributes: &'a HashMap<String, SubscriberAttribute>,
        }

        let request = ApiRequest::post(
            ApiVersion::V1,
            format!("subscribers/{}/attributes", user_id),
        )
        .json(&Request { attributes })?;
        self.inner.execute_empty(request).await
    }

    /// Permanently delete a subscriber and their purchase history.
    pub async fn delete(&self, user_id: &AppUserId) -> Result<()> {
        self.inner
            .execute_empty(ApiRequest::delete(
                ApiVersion::V1,
                format!("subscribers/{}", user_id),
            ))
            .await
    }
}
