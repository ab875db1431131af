//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing rules and browser storage from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod token_store;
