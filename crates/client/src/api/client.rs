use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use super::normalize::Normalized;
use super::{ApiError, ApiRequest};

/// Client for the password-manager backend.
///
/// Every call is a fresh single attempt: no retry, no backoff, no timeout,
/// no caching. Failures surface as [`ApiError`] exactly as the transport or
/// the backend produced them.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base: &Url) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let http = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            base: base.clone(),
            http,
        })
    }

    /// Send a typed endpoint request and decode its reply.
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let builder = request.build_request(&self.base, &self.http);
        let normalized = self.dispatch(builder).await?;
        T::decode(normalized)
    }

    /// One-shot request against a relative path, normalized but undecoded.
    ///
    /// The typed [`call`](Self::call) layer is built on the same pipeline;
    /// this door stays open for endpoints the typed layer does not cover.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Normalized, ApiError> {
        let url = self.base.join(path)?;
        tracing::debug!(%method, %url, "dispatching request");
        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.dispatch(builder).await
    }

    /// Send, gate on the status code, and normalize the body.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Normalized, ApiError> {
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("").to_string();
            tracing::warn!(%status, "backend rejected request");
            return Err(ApiError::Status { status, reason });
        }

        let text = response.text().await?;
        let normalized = Normalized::from_body(text);
        tracing::debug!(kind = normalized.kind(), "response normalized");
        Ok(normalized)
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.base
    }
}
