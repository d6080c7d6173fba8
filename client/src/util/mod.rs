//! Utility modules shared across pages and components.

pub mod auth;
pub mod nav;
