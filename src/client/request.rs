//! Description of a single API call.

use reqwest::Method;
use serde::Serialize;

use crate::{ApiVersion, Error, Result};

/// One call against the API: method, version, fully formatted path, and
/// the optional JSON body and platform header.
///
/// The path is used verbatim; no templating or escaping is applied.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) version: ApiVersion,
    pub(crate) path: String,
    pub(crate) body: Option<Vec<u8>>,
    pub(crate) platform: Option<String>,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, version: ApiVersion, path: impl Into<String>) -> Self {
        Self {
            method,
            version,
            path: path.into(),
            body: None,
            platform: None,
        }
    }

    pub(crate) fn get(version: ApiVersion, path: impl Into<String>) -> Self {
        Self::new(Method::GET, version, path)
    }

    pub(crate) fn post(version: ApiVersion, path: impl Into<String>) -> Self {
        Self::new(Method::POST, version, path)
    }

    pub(crate) fn delete(version: ApiVersion, path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, version, path)
    }

    /// Attach `body` encoded as JSON.
    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body).map_err(Error::Serialization)?);
        Ok(self)
    }

    /// Send `platform` as the `X-Platform` header. Empty values are dropped.
    pub(crate) fn platform(mut self, platform: impl Into<String>) -> Self {
        let platform = platform.into();
        self.platform = (!platform.is_empty()).then_some(platform);
        self
    }
}
