//! Navigation capability prober.
//!
//! Algorithm, once per shell mount:
//! 1. No-cache same-origin `HEAD` of a static resource, bounded by the timeout.
//! 2. If that mechanism is unavailable or errors, load the same resource as an
//!    image with a cache-busting query parameter, bounded by the same timeout.
//! 3. Success clears the fallback flag and reports [`NavHealth::Ok`].
//! 4. Any failure (error, timeout) sets the flag and reports
//!    [`NavHealth::Degraded`].
//!
//! A `HEAD` that times out counts as a failure directly; the image fallback is
//! only for a mechanism that could not run.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

use std::time::Duration;

use async_trait::async_trait;

use super::race::{Raced, first_of};
use crate::config::ProbeConfig;
use crate::storage::SessionStore;

/// Persisted flag read by navigation components. Independent of the session.
pub const FORCE_FULL_NAV_KEY: &str = "forceFullNav";
const FORCE_FULL_NAV_ON: &str = "1";
const CACHE_BUST_PARAM: &str = "__rsc_check";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The runtime lacks this probe mechanism.
    #[error("probe mechanism unavailable")]
    Unavailable,
    #[error("probe failed: {0}")]
    Failed(String),
}

/// The two probe mechanisms.
#[async_trait(?Send)]
pub trait ProbeTransport {
    /// No-cache, same-origin `HEAD` request for `url`.
    async fn head(&self, url: &str) -> Result<(), ProbeError>;
    /// Load `url` as an image.
    async fn load_image(&self, url: &str) -> Result<(), ProbeError>;
}

/// Timer and wall clock for the probe.
#[async_trait(?Send)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// In-memory view of the last probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavHealth {
    /// No probe has finished yet.
    #[default]
    Unknown,
    Ok,
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable(String),
}

pub struct NavigationProber<P, C> {
    transport: P,
    clock: C,
    config: ProbeConfig,
}

impl<P, C> NavigationProber<P, C>
where
    P: ProbeTransport,
    C: Clock,
{
    pub fn new(transport: P, clock: C, config: ProbeConfig) -> Self {
        Self { transport, clock, config }
    }

    /// Run the probe without touching storage.
    pub async fn check(&self) -> ProbeOutcome {
        let timeout = self.config.timeout;

        match first_of(self.transport.head(&self.config.path), self.clock.sleep(timeout)).await {
            Raced::Completed(Ok(())) => return ProbeOutcome::Reachable,
            Raced::TimedOut => return ProbeOutcome::Unreachable("timeout".to_owned()),
            Raced::Completed(Err(e)) => log::debug!("fetch probe unusable ({e}); trying image probe"),
        }

        let url = cache_busted_url(&self.config.path, self.clock.now_ms());
        match first_of(self.transport.load_image(&url), self.clock.sleep(timeout)).await {
            Raced::Completed(Ok(())) => ProbeOutcome::Reachable,
            Raced::Completed(Err(e)) => ProbeOutcome::Unreachable(e.to_string()),
            Raced::TimedOut => ProbeOutcome::Unreachable("timeout".to_owned()),
        }
    }

    /// Probe, then persist the result.
    pub async fn run(&self, store: &dyn SessionStore) -> NavHealth {
        let outcome = self.check().await;
        record_outcome(store, &outcome)
    }
}

/// Persist a probe outcome: clear the flag on success, set it on failure.
pub fn record_outcome(store: &dyn SessionStore, outcome: &ProbeOutcome) -> NavHealth {
    match outcome {
        ProbeOutcome::Reachable => {
            store.remove(FORCE_FULL_NAV_KEY);
            NavHealth::Ok
        }
        ProbeOutcome::Unreachable(reason) => {
            store.set(FORCE_FULL_NAV_KEY, FORCE_FULL_NAV_ON);
            log::warn!("Client fetch check failed - falling back to full page navigation ({reason})");
            NavHealth::Degraded
        }
    }
}

/// Whether navigation should use full page loads. A flag left by an earlier
/// session counts until a probe clears it.
pub fn force_full_nav(health: NavHealth, store: &dyn SessionStore) -> bool {
    health == NavHealth::Degraded || store.get(FORCE_FULL_NAV_KEY).as_deref() == Some(FORCE_FULL_NAV_ON)
}

fn cache_busted_url(path: &str, now_ms: u64) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}{CACHE_BUST_PARAM}={now_ms}")
}
