//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, timers, the live
//! map session) and delegates rendering details to `components`.

pub mod orders;
pub mod partner;
pub mod track;
