//! Request dispatcher shared by every resource client.
//!
//! # Design
//! `Unsent` holds the immutable `ClientConfig` and a shared `Transport`, and
//! carries no mutable state between calls. Each call is split into
//! `build_request`, which produces an `HttpRequest`, and `parse_response`,
//! which consumes an `HttpResponse`. Both halves are pure; `request` glues
//! them around a single `Transport::execute`. Resource clients borrow the
//! dispatcher and only describe paths, queries, and payloads.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, Error, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::query::Query;
use crate::resources::{
    Activity, Analytics, ApiKeys, Campaigns, ContactBooks, Contacts, Domains, Emails, Events,
    Metrics, Settings, Stats, Suppressions, System, Teams, Templates, Webhooks,
};

/// Placeholder body type for calls that send none.
pub(crate) const NO_BODY: Option<&()> = None;

/// Extra headers attached to a single request.
///
/// A header set here replaces a default header of the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets `Idempotency-Key`, letting the API deduplicate retried sends.
    pub fn idempotency_key(self, key: impl Into<String>) -> Self {
        self.header("Idempotency-Key", key)
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Client for the Unsent API.
///
/// Cheap to clone; clones share the same transport.
#[derive(Clone)]
pub struct Unsent {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Unsent {
    /// Client for the default base URL (or `UNSENT_BASE_URL`) with the given
    /// key. An empty key falls back to `UNSENT_API_KEY`.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let config = ClientConfig::builder().api_key(api_key).build()?;
        Ok(Self::with_config(config))
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }

    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request for `method` on `<base>/v1/<segments...>`.
    ///
    /// Segments are percent-encoded individually, so ids may contain `/` or
    /// `@`. The query string is only added when `query` has a value.
    pub fn build_request<B>(
        &self,
        method: HttpMethod,
        segments: &[&str],
        query: &Query,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<HttpRequest>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(Error::Serialization)?;

        let mut url = self.config.api_url().clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl {
                url: self.config.api_url().to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }

        let mut headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.api_key()),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), self.config.user_agent().to_string()),
        ];
        for (name, value) in options.headers() {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    /// Check the status and decode the body.
    ///
    /// Non-2xx responses become `Error::Api`. An empty 2xx body is decoded
    /// as JSON `null`.
    pub fn parse_response<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R> {
        if !response.is_success() {
            let error = ApiError::from_response_body(response.status, &response.body);
            warn!(
                status = response.status,
                code = %error.code,
                message = %error.message,
                "API request failed"
            );
            return Err(Error::Api {
                status: response.status,
                error,
            });
        }

        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(Error::Deserialization)
    }

    /// Build, execute, and parse one call.
    pub fn request<B, R>(
        &self,
        method: HttpMethod,
        segments: &[&str],
        query: &Query,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.build_request(method, segments, query, body, options)?;
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request).map_err(Error::Transport)?;
        debug!(status = response.status, "received response");
        self.parse_response(response)
    }

    pub(crate) fn get<R: DeserializeOwned>(&self, segments: &[&str], query: &Query) -> Result<R> {
        self.request(
            HttpMethod::Get,
            segments,
            query,
            NO_BODY,
            &RequestOptions::default(),
        )
    }

    pub(crate) fn post<B, R>(
        &self,
        segments: &[&str],
        body: &B,
        options: &RequestOptions,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(
            HttpMethod::Post,
            segments,
            &Query::new(),
            Some(body),
            options,
        )
    }

    pub(crate) fn put<B, R>(&self, segments: &[&str], body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(
            HttpMethod::Put,
            segments,
            &Query::new(),
            body,
            &RequestOptions::default(),
        )
    }

    pub(crate) fn patch<B, R>(&self, segments: &[&str], body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(
            HttpMethod::Patch,
            segments,
            &Query::new(),
            Some(body),
            &RequestOptions::default(),
        )
    }

    pub(crate) fn delete<R: DeserializeOwned>(&self, segments: &[&str]) -> Result<R> {
        self.request(
            HttpMethod::Delete,
            segments,
            &Query::new(),
            NO_BODY,
            &RequestOptions::default(),
        )
    }

    pub fn emails(&self) -> Emails<'_> {
        Emails::new(self)
    }

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    pub fn contact_books(&self) -> ContactBooks<'_> {
        ContactBooks::new(self)
    }

    pub fn campaigns(&self) -> Campaigns<'_> {
        Campaigns::new(self)
    }

    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self)
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates::new(self)
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    pub fn suppressions(&self) -> Suppressions<'_> {
        Suppressions::new(self)
    }

    pub fn analytics(&self) -> Analytics<'_> {
        Analytics::new(self)
    }

    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys::new(self)
    }

    pub fn settings(&self) -> Settings<'_> {
        Settings::new(self)
    }

    pub fn system(&self) -> System<'_> {
        System::new(self)
    }

    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }

    pub fn metrics(&self) -> Metrics<'_> {
        Metrics::new(self)
    }

    pub fn stats(&self) -> Stats<'_> {
        Stats::new(self)
    }

    pub fn activity(&self) -> Activity<'_> {
        Activity::new(self)
    }

    pub fn teams(&self) -> Teams<'_> {
        Teams::new(self)
    }
}

impl fmt::Debug for Unsent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsent")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
