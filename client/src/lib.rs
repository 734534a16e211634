//! # client
//!
//! Leptos + WASM frontend for the dishpatch food-delivery app.
//! Replaces the static HTML/JS pages with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST API client. It integrates with the `tracking` crate for the
//! live order map: pages feed server snapshots into a `SessionCore` and
//! replay the resulting command stream onto Leaflet via the `map` bridge.

pub mod app;
pub mod components;
pub mod map;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
