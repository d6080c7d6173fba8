//! Remote API and probe configuration.
//!
//! Native builds read the process environment; browser builds bake the same
//! variables in at compile time. Both funnel through [`ApiConfig::from_lookup`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://kasuwan-gizo.onrender.com";
pub const DEFAULT_TENANT: &str = "kasuwan-gizo";
pub const DEFAULT_PROBE_PATH: &str = "/favicon.ico";
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;

pub const API_BASE_URL_VAR: &str = "KASUWA_API_BASE_URL";
pub const TENANT_VAR: &str = "KASUWA_TENANT";

/// Where the marketplace API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host, without a trailing slash.
    pub base_url: String,
    /// Path segment naming the marketplace tenant (`/api/v1/{tenant}/...`).
    pub tenant: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_TENANT)
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str, tenant: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            tenant: tenant.trim_matches('/').to_owned(),
        }
    }

    /// Build from any key lookup. Blank values fall back to defaults.
    ///
    /// Keys:
    /// - `KASUWA_API_BASE_URL`: default `https://kasuwan-gizo.onrender.com`
    /// - `KASUWA_TENANT`: default `kasuwan-gizo`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let base_url = non_blank(API_BASE_URL_VAR).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let tenant = non_blank(TENANT_VAR).unwrap_or_else(|| DEFAULT_TENANT.to_owned());
        Self::new(base_url.trim(), tenant.trim())
    }

    /// Build from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from variables captured when the crate was compiled. Used by the
    /// browser bundle, which has no process environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            API_BASE_URL_VAR => option_env!("KASUWA_API_BASE_URL").map(ToOwned::to_owned),
            TENANT_VAR => option_env!("KASUWA_TENANT").map(ToOwned::to_owned),
            _ => None,
        })
    }

    /// Absolute URL for an auth endpoint, e.g. `auth_url("login")`.
    #[must_use]
    pub fn auth_url(&self, action: &str) -> String {
        format!("{}/api/v1/{}/auth/{action}", self.base_url, self.tenant)
    }
}

/// Navigation capability probe settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Same-origin static resource to probe.
    pub path: String,
    /// Upper bound on each probe attempt.
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PROBE_PATH.to_owned(),
            timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
        }
    }
}
