//! Offerings service.

use std::sync::Arc;

use crate::client::{ApiRequest, ClientInner, Page};
use crate::models::{ApiVersion, Offering, OfferingId, ProjectId};
use crate::Result;

/// Service for the offerings of a project.
///
/// # Example
///
/// ```no_run
/// use revenuecat_rs::ProjectId;
///
/// # async fn example(client: revenuecat_rs::RevenueCatClient) -> revenuecat_rs::Result<()> {
/// let project = ProjectId::new("proj1ab2c3d4");
/// let offerings = client.offerings().list(&project).await?;
/// let current = offerings.items.iter().find(|o| o.is_current);
/// # Ok(())
/// # }
/// ```
pub struct OfferingsService {
    inner: Arc<ClientInner>,
}

impl OfferingsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the offerings in a project.
    pub async fn list(&self, project_id: &ProjectId) -> Result<Page<Offering>> {
        self.inner
            .execute(ApiRequest::get(
                ApiVersion::V2,
                format!("projects/{}/offerings", project_id),
            ))
            .await
    }

    /// Get a single offering.
    pub async fn get(
        &self,
        project_id: &ProjectId,
        offering_id: &OfferingId,
    ) -> Result<Offering> {
        self.inner
            .execute(ApiRequest::get(
                ApiVersion::V2,
                format!("projects/{}/offerings/{}", project_id, offering_id),
            ))
            .await
    }
}
