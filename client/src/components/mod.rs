//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome (header, sidebar) and the protected-page wrapper. All of them
//! read shared state from Leptos context providers set up in `app`.

pub mod app_layout;
pub mod header;
pub mod protected;
pub mod sidebar;
