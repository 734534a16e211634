//! Live order-tracking logic for the dishpatch delivery client.
//!
//! This crate is the pure half of the tracking feature: it decides where
//! markers go, what the view should show, and how order status strings are
//! interpreted, without touching a browser, a map library, or the network.
//! Hosts (the Leptos page in `client`, the terminal view in `cli`, plain
//! structs in tests) feed it order snapshots and replay the
//! [`session::MapCommand`] stream it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | [`session::SessionCore`] state machine and the command stream |
//! | [`snapshot`] | Wire types for the order-tracking endpoint |
//! | [`status`] | Canonical order status parsed from backend strings |
//! | [`geo`] | Coordinates, the absence sentinel, and bounds math |
//! | [`error`] | Geolocation and fetch error taxonomy |
//! | [`consts`] | Shared numeric constants (zoom levels, poll interval, etc.) |

pub mod consts;
pub mod error;
pub mod geo;
pub mod session;
pub mod snapshot;
pub mod status;
