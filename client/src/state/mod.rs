//! Client-side reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persisted session lives in the `kasuwa` core. These modules hold the
//! render-facing snapshots that components read from Leptos context.

pub mod auth;
