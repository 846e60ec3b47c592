//! Apps service.

use std::sync::Arc;

use crate::client::{ApiRequest, ClientInner, Page};
use crate::models::{ApiVersion, App, AppId, ProjectId};
use crate::Result;

/// Service for the apps of a project.
pub struct AppsService {
    inner: Arc<ClientInner>,
}

impl AppsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the apps in a project.
    pub async fn list(&self, project_id: &ProjectId) -> Result<Page<App>> {
        self.inner
            .execute(ApiRequest::get(
                ApiVersion::V2,
                format!("projects/{}/apps", project_id),
            ))
            .await
    }

    /// Get a single app.
    pub async fn get(&self, project_id: &ProjectId, app_id: &AppId) -> Result<App> {
        self.inner
            .execute(ApiRequest::get(
                ApiVersion::V2,
                format!("projects/{}/apps/{}", project_id, app_id),
            ))
            .await
    }
}
