//! Authentication: the service that mutates the session, its error taxonomy,
//! and the guard that gates protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The service writes the session as a side effect of API responses; the
//! guard only reads it. They share nothing except the store.

pub mod error;
pub mod guard;
pub mod service;
