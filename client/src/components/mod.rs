//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards and chrome while reading shared state from
//! Leptos context providers; route-scoped orchestration stays in `pages`.

pub mod assignment_card;
pub mod navbar;
pub mod order_card;
