//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate validation and navigation concerns from page
//! and component logic to improve reuse and testability.

pub mod redirect;
pub mod validate;
