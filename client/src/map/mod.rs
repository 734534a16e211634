//! Leaflet bridge for the live tracking map.
//!
//! ARCHITECTURE
//! ============
//! `tracking::session` computes what the map should do without touching the
//! DOM. The bridge here replays its command stream onto real Leaflet
//! objects. Browser-only: native builds compile these modules away.

#[cfg(feature = "csr")]
pub mod host;
#[cfg(feature = "csr")]
pub mod leaflet;
