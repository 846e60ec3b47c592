//! Projects service.

use std::sync::Arc;

use crate::client::{ApiRequest, ClientInner, Page};
use crate::models::{ApiVersion, Project};
use crate::Result;

/// Service for project operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: revenuecat_rs::RevenueCatClient) -> revenuecat_rs::Result<()> {
/// let projects = client.projects().list().await?;
/// for project in &projects.items {
///     println!("Project: {}", project.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProjectsService {
    inner: Arc<ClientInner>,
}

impl ProjectsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the projects the v2 key has access to.
    pub async fn list(&self) -> Result<Page<Project>> {
        self.inner
            .execute(ApiRequest::get(ApiVersion::V2, "projects"))
            .await
    }
}
