//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules isolate session-storage persistence from page and component
//! logic so the pure parts stay testable on native targets.

pub mod cart;
pub mod session_user;
