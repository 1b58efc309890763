//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (input collection,
//! caller-side validation, controller invocation) and stays out of the
//! session store's internals.

pub mod home;
pub mod login;
pub mod register;
