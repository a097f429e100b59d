//! Client configuration.
//!
//! The API key and base URL are resolved once, when the config is built:
//! explicit values win, then the `UNSENT_API_KEY` / `UNSENT_BASE_URL`
//! environment variables, then the public endpoint. The versioned path
//! (`/v1`) is always appended to the base URL.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.unsent.dev";
pub const API_VERSION: &str = "v1";
pub const API_KEY_ENV: &str = "UNSENT_API_KEY";
pub const BASE_URL_ENV: &str = "UNSENT_BASE_URL";

/// Default `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("unsent-rust/", env!("CARGO_PKG_VERSION"));

/// Immutable settings captured when the client is constructed.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    api_url: Url,
    user_agent: String,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Build entirely from the environment.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL with the version segment, e.g. `https://api.unsent.dev/v1`.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[derive(Debug, Default, Clone)]
pub struct ClientConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Base URL without the version segment, e.g. `http://localhost:3000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .or_else(|| env_var(API_KEY_ENV))
            .ok_or(Error::MissingApiKey)?;

        let base_url = self
            .base_url
            .filter(|u| !u.is_empty())
            .or_else(|| env_var(BASE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(ClientConfig {
            api_key,
            api_url: versioned_url(&base_url)?,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn versioned_url(base: &str) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidBaseUrl {
        url: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot be a base".to_string()))?
        .pop_if_empty()
        .push(API_VERSION);
    Ok(url)
}
