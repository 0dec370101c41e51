//! Configuration constants and utilities for storeline
//!
//! Each setting is resolved from the command line first, then from its
//! environment variable, then from the built-in default.

use crate::cmd_args::CommandLineArgs;
use anyhow::{bail, Context, Result};
use reqwest::Url;

/// Default shop API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/weblarek";

/// Default image CDN base URL
pub const DEFAULT_CDN_URL: &str = "http://localhost:3000/content/weblarek";

/// Environment variable name for overriding the API base URL
pub const API_URL_ENV_VAR: &str = "STORELINE_API_URL";

/// Environment variable name for overriding the CDN base URL
pub const CDN_URL_ENV_VAR: &str = "STORELINE_CDN_URL";

/// Environment variable holding the tracing filter
pub const LOG_LEVEL_ENV_VAR: &str = "STORELINE_LOG_LEVEL";

fn env_or(name: &str, default: &str) -> String {
    std::env::var_os(name)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Get the API base URL, checking the environment variable first
pub fn get_api_url() -> String {
    env_or(API_URL_ENV_VAR, DEFAULT_API_URL)
}

/// Get the CDN base URL, checking the environment variable first
pub fn get_cdn_url() -> String {
    env_or(CDN_URL_ENV_VAR, DEFAULT_CDN_URL)
}

/// Validated endpoints of the shop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    api_url: String,
    cdn_url: String,
}

impl StoreConfig {
    pub fn new(api_url: &str, cdn_url: &str) -> Result<Self> {
        Ok(Self {
            api_url: normalize_url(api_url).context("invalid API URL")?,
            cdn_url: normalize_url(cdn_url).context("invalid CDN URL")?,
        })
    }

    /// Resolve both URLs from arguments, environment and defaults
    pub fn from_args(args: &CommandLineArgs) -> Result<Self> {
        let api_url = args
            .api_url()
            .map(str::to_string)
            .unwrap_or_else(get_api_url);
        let cdn_url = args
            .cdn_url()
            .map(str::to_string)
            .unwrap_or_else(get_cdn_url);
        Self::new(&api_url, &cdn_url)
    }

    /// API base URL without a trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// CDN base URL without a trailing slash
    pub fn cdn_url(&self) -> &str {
        &self.cdn_url
    }
}

fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).with_context(|| format!("cannot parse '{trimmed}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("'{trimmed}' must use http or https");
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
