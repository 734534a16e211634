//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the shared wire schema.
//! Everything speaks same-origin `/api` paths; Trunk proxies them to the
//! backend during development.

pub mod api;
pub mod types;
