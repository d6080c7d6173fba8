//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, auth calls,
//! redirects) and delegates chrome to `components`. Merchant pages wrap their
//! body in `Protected`.

pub mod campaign;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod marketplace;
pub mod orders;
pub mod settings;
pub mod signup;
pub mod verify;
