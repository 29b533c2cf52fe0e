//! HTTP plumbing shared by the resource modules.

use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};

/// Handle to the backend. Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client for `base_url`, e.g. `https://api.yafue.app` or
    /// `http://10.0.2.2:3000/api`. A path prefix is kept.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Like [`ApiClient::new`] but reusing an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Result<Self> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(invalid("expected an http(s) URL".to_string()));
        }

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments against the base URL. Segments are
    /// percent-encoded. Empty, `.` and `..` segments are rejected since the
    /// URL parser would drop or collapse them.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .copied()
            .find(|s| matches!(*s, "" | "." | ".."))
        {
            return Err(ApiError::InvalidPathSegment(bad.to_string()));
        }

        let mut url = self.base_url.clone();
        // checked in `with_http`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send(Method::GET, segments, None::<&()>).await
    }

    pub(crate) async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, segments, Some(body)).await
    }

    pub(crate) async fn put<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, segments, Some(body)).await
    }

    pub(crate) async fn patch<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, segments, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send(Method::DELETE, segments, None::<&()>).await
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments).map_err(|e| {
            warn!(%method, error = %e, "API request rejected");
            e
        })?;
        let path = url.path().to_string();

        debug!(%method, path = %path, "API request");

        let mut request: RequestBuilder = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            warn!(%method, path = %path, status = status.as_u16(), "API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                path,
                body,
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| {
            warn!(%method, path = %path, error = %source, "Malformed API response");
            ApiError::Decode { path, source }
        })
    }
}
