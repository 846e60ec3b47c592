//! HTTP client implementation for the RevenueCat API.

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{field, instrument, Span};

use crate::api::{
    AppsService, OfferingsService, ProductsService, ProjectsService, SubscribersService,
};
use crate::auth::Credentials;
use crate::error::ApiErrorBody;
use crate::{ApiVersion, Error, Result};

use super::config::ClientConfig;
use super::request::ApiRequest;

/// Name of the header that scopes a subscriber's `last_seen` to a platform.
pub const PLATFORM_HEADER: &str = "X-Platform";

/// The main client for interacting with the RevenueCat API.
///
/// The client is cheap to clone and safe to share between tasks; it holds
/// only the credentials, the configuration and a pooled HTTP transport.
///
/// # Example
///
/// ```no_run
/// use revenuecat_rs::{AppUserId, RevenueCatClient};
///
/// # async fn example() -> revenuecat_rs::Result<()> {
/// let client = RevenueCatClient::new("sk_v1_key", "sk_v2_key")?;
///
/// let projects = client.projects().list().await?;
/// for project in &projects.items {
///     println!("{} ({})", project.name, project.id);
/// }
///
/// let response = client.subscribers().get(&AppUserId::new("user_1")).await?;
/// if response.subscriber.is_entitled_to("pro") {
///     println!("pro features unlocked");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RevenueCatClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
}

impl RevenueCatClient {
    /// Create a client with the default configuration.
    pub fn new(api_key_v1: impl Into<String>, api_key_v2: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(api_key_v1, api_key_v2), ClientConfig::default())
    }

    /// Create a client from `REVENUECAT_API_KEY_V1` and `REVENUECAT_API_KEY_V2`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Self::with_http_client(credentials, config, http)
    }

    /// Create a client that sends requests through `http`.
    ///
    /// The transport's own timeout and user agent apply; those fields of
    /// `config` are ignored.
    pub fn with_http_client(
        credentials: Credentials,
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                config,
            }),
        })
    }

    /// Get the projects service.
    pub fn projects(&self) -> ProjectsService {
        ProjectsService::new(self.inner.clone())
    }

    /// Get the apps service.
    pub fn apps(&self) -> AppsService {
        AppsService::new(self.inner.clone())
    }

    /// Get the offerings service.
    pub fn offerings(&self) -> OfferingsService {
        OfferingsService::new(self.inner.clone())
    }

    /// Get the products service.
    pub fn products(&self) -> ProductsService {
        ProductsService::new(self.inner.clone())
    }

    /// Get the subscribers service.
    pub fn subscribers(&self) -> SubscribersService {
        SubscribersService::new(self.inner.clone())
    }

    /// The absolute URL a call to `path` on `version` is sent to.
    ///
    /// Useful for following a page cursor by hand.
    pub fn endpoint_url(&self, version: ApiVersion, path: &str) -> String {
        self.inner.endpoint_url(version, path)
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Origin, then `v1/` or `v2/`, then the path.
    pub(crate) fn endpoint_url(&self, version: ApiVersion, path: &str) -> String {
        format!("{}{}/{}", self.config.base_url, version, path)
    }

    /// Perform `request` and decode the response body into `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(Error::Deserialization)
    }

    /// Perform `request` for an endpoint that answers with an empty body.
    ///
    /// The body is never read, so an empty or non-JSON body is not an error.
    pub(crate) async fn execute_empty(&self, request: ApiRequest) -> Result<()> {
        self.send(request).await?;
        Ok(())
    }

    /// Send the request and turn any status of 400 or above into an error.
    #[instrument(
        name = "revenuecat_request",
        skip(self, request),
        fields(
            http.method = %request.method,
            http.url = field::Empty,
            api.version = %request.version,
            http.status_code = field::Empty,
        )
    )]
    async fn send(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let url = self.endpoint_url(request.version, &request.path);
        Span::current().record("http.url", url.as_str());

        let mut builder = self
            .http
            .request(request.method, &url)
            .header(AUTHORIZATION, self.credentials.bearer(request.version))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(platform) = request.platform {
            let value = HeaderValue::from_str(&platform)
                .map_err(|_| Error::InvalidInput(format!("invalid platform: {platform:?}")))?;
            builder = builder.header(PLATFORM_HEADER, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);
        tracing::debug!(status, "RevenueCat request completed");

        if status >= 400 {
            return Err(Self::error_from_response(status, response).await);
        }
        Ok(response)
    }

    /// Decode the body of a failed response into an [`Error`].
    async fn error_from_response(status: u16, response: reqwest::Response) -> Error {
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return Error::Http(err),
        };
        match serde_json::from_slice::<ApiErrorBody>(&body) {
            Ok(error) => Error::Api { status, error },
            Err(source) => {
                tracing::warn!(status, error = %source, "undecodable RevenueCat error body");
                Error::MalformedErrorBody {
                    status,
                    body: String::from_utf8_lossy(&body).into_owned(),
                    source,
                }
            }
        }
    }
}

impl std::fmt::Debug for RevenueCatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevenueCatClient")
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .finish()
    }
}
