//! Networking for the marketplace auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema, `transport` is the seam between the
//! auth service and a concrete HTTP stack, and `api` builds requests and
//! interprets failure bodies.

pub mod api;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;
pub mod types;
