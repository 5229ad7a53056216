//! REST API client for the ISP management backend.
//!
//! Wraps the `/api/mikrotiks`, `/api/profiles` and `/api/customers`
//! endpoints using [`reqwest`]. Every JSON body is an [`Envelope`] whose
//! `status` must be `"success"`.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ConsoleError;
use crate::types::{Envelope, NewCustomer, Profile, ProfileQuery, Router};

use super::ConsoleBackend;

/// HTTP client for one backend instance.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client with default settings (no timeout).
    ///
    /// * `base_url` - e.g. `http://localhost:8080`, without the `/api` suffix.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConsoleError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl AsRef<str>,
    ) -> Result<Self, ConsoleError> {
        let raw = base_url.as_ref();
        let invalid = |reason: String| ConsoleError::InvalidBaseUrl {
            url: raw.to_string(),
            reason,
        };

        let base_url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// Build a client from [`Config`], applying the request timeout if set.
    pub fn from_config(config: &Config) -> Result<Self, ConsoleError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(builder.build()?, &config.api_base_url)
    }

    /// base URL 뒤에 path segment 를 붙인다. 각 segment 는 percent-encode 되므로
    /// id 안의 `/`, `?` 가 다른 endpoint 로 새지 않음
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot-be-a-base URL 은 생성 시점에 거부됨
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // ---- private helpers ----

    /// Non-2xx 응답을 [`ConsoleError::Http`] 로 변환. Body 가 envelope 이면
    /// `message` 를 함께 담는다.
    ///
    /// Body 가 JSON 이 아니면 (예: 프록시 HTML 502) transport 에러가 아니라
    /// `Http { message: None }` 이고, 화면에는 "Unknown error" 로 표시된다.
    /// 2xx 인 sync / delete 응답의 body 는 읽지 않는다.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ConsoleError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.message);

        Err(ConsoleError::Http {
            status: status.as_u16(),
            message,
        })
    }

    /// 2xx 응답의 envelope 를 파싱하고 `status == "success"` 확인
    async fn parse_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>, ConsoleError> {
        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<Envelope<T>>().await?;

        if !envelope.is_success() {
            return Err(ConsoleError::Application {
                status: envelope.status.unwrap_or_default(),
                message: envelope.message,
            });
        }
        Ok(envelope.data)
    }

    /// Status code 만 확인, body 무시
    async fn check_status(response: reqwest::Response) -> Result<(), ConsoleError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl ConsoleBackend for ApiClient {
    async fn list_routers(&self) -> Result<Vec<Router>, ConsoleError> {
        let url = self.endpoint(&["api", "mikrotiks"]);
        tracing::debug!(%url, "fetching routers");

        let response = self.client.get(url).send().await?;
        Ok(Self::parse_envelope(response).await?.unwrap_or_default())
    }

    async fn list_profiles(&self, query: &ProfileQuery) -> Result<Vec<Profile>, ConsoleError> {
        let url = self.endpoint(&["api", "profiles"]);
        tracing::debug!(%url, mikrotik_id = ?query.mikrotik_id, limit = query.limit, "fetching profiles");

        let response = self.client.get(url).query(query).send().await?;
        Ok(Self::parse_envelope(response).await?.unwrap_or_default())
    }

    async fn sync_profile(&self, profile_id: &str) -> Result<(), ConsoleError> {
        let url = self.endpoint(&["api", "profiles", profile_id, "sync"]);
        tracing::debug!(%url, "syncing profile");

        let response = self.client.post(url).send().await?;
        Self::check_status(response).await
    }

    async fn delete_profile(&self, profile_id: &str) -> Result<(), ConsoleError> {
        let url = self.endpoint(&["api", "profiles", profile_id]);
        tracing::debug!(%url, "deleting profile");

        let response = self.client.delete(url).send().await?;
        Self::check_status(response).await
    }

    async fn sync_all_profiles(&self, mikrotik_id: &str) -> Result<u16, ConsoleError> {
        let url = self.endpoint(&["api", "profiles", "sync-all", mikrotik_id]);
        tracing::debug!(%url, "syncing all profiles");

        let response = self.client.post(url).send().await?;
        Ok(response.status().as_u16())
    }

    async fn create_customer(&self, customer: &NewCustomer) -> Result<(), ConsoleError> {
        let url = self.endpoint(&["api", "customers"]);
        tracing::debug!(%url, username = %customer.username, "creating customer");

        let response = self.client.post(url).json(customer).send().await?;
        Self::parse_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }
}
