//! Products service.

use std::sync::Arc;

use crate::client::{ApiRequest, ClientInner, Page};
use crate::models::{ApiVersion, Product, ProjectId};
use crate::Result;

/// Service for the products of a project.
pub struct ProductsService {
    inner: Arc<ClientInner>,
}

impl ProductsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the products in a project.
    pub async fn list(&self, project_id: &ProjectId) -> Result<Page<Product>> {
        self.inner
            .execute(ApiRequest::get(
                ApiVersion::V2,
                format!("projects/{}/products", project_id),
            ))
            .await
    }
}
