//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read session state from Leptos context providers and
//! mutate it only by dispatching session events.

pub mod toast;
