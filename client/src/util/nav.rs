//! Navigation capability probe wiring for the app shell.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use kasuwa::nav::{NavHealth, ProbeOutcome, record_outcome};
use kasuwa::storage::SessionStore;
use leptos::prelude::*;

pub fn install_nav_probe(health: RwSignal<NavHealth>, store: Arc<dyn SessionStore>) {
    #[cfg(feature = "hydrate")]
    {
        use kasuwa::config::ProbeConfig;
        use kasuwa::nav::browser::browser_prober;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = browser_prober(ProbeConfig::default()).check().await;
            if let Some(next) = settle_nav_check(&alive_task, store.as_ref(), &outcome) {
                health.set(next);
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (health, store);
    }
}

/// Records a finished check unless the shell unmounted while it ran.
/// A discarded outcome leaves storage untouched.
pub fn settle_nav_check(alive: &AtomicBool, store: &dyn SessionStore, outcome: &ProbeOutcome) -> Option<NavHealth> {
    if !alive.load(Ordering::Relaxed) {
        return None;
    }
    Some(record_outcome(store, outcome))
}
