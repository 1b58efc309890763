//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the authentication state machine; `controller` drives
//! it from remote-call outcomes. Components read state through Leptos
//! context and mutate it only by dispatching session events.

pub mod controller;
pub mod session;
