//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gate` wraps every routed page with the access decision; `navigation` is
//! the shared top bar. The remaining components are dashboard building
//! blocks.

pub mod gate;
pub mod navigation;
pub mod sensor_map;
pub mod stat_card;
