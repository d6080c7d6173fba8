//! Navigation capability probing.
//!
//! SYSTEM CONTEXT
//! ==============
//! On every app-shell mount the client checks whether lightweight same-origin
//! fetches work. If not, it persists a fallback flag that tells navigation
//! components to use full page loads instead of client-side route changes.
//! The outcome is advisory: a failed probe degrades navigation, it never
//! errors.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod probe;
pub mod race;

pub use probe::{
    Clock, FORCE_FULL_NAV_KEY, NavHealth, NavigationProber, ProbeError, ProbeOutcome, ProbeTransport,
    force_full_nav, record_outcome,
};
pub use race::{Raced, first_of};
