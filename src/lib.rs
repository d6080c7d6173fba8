//! # kasuwa
//!
//! Client-side session core for the Kasuwan Gizo merchant marketplace.
//!
//! This crate owns everything with state in the merchant client: the
//! persisted session (token, user record, email-verified flag), the auth
//! service that talks to the remote marketplace API, the guard that gates
//! protected pages, and the navigation capability prober that decides whether
//! the app shell can trust client-side routing.
//!
//! It is framework-free. The Leptos UI in `client/` and the command line in
//! `cli/` both build on it. Browser bindings live behind the `hydrate`
//! feature and a `reqwest` transport behind `native`; without either, every
//! seam has an in-memory or no-op implementation so the logic runs (and is
//! tested) on any target.

pub mod auth;
pub mod config;
pub mod nav;
pub mod net;
pub mod session;
pub mod storage;

pub use auth::error::{AuthError, AuthStage};
pub use auth::guard::{AuthGuard, GuardAction, GuardState, ProtectedRoute};
pub use auth::service::AuthService;
pub use config::{ApiConfig, ProbeConfig};
pub use session::Session;
pub use storage::SessionStore;
