//! Networking modules for the identity-service HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the shared wire
//! schema. Session state never touches HTTP directly; it only sees the
//! outcomes the controller derives from these calls.

pub mod api;
pub mod types;
