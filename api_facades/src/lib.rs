//! API Facades Layer
//!
//! C entry points for host applications (iOS/Android/desktop shells) that
//! embed the runtime. These keep a C calling convention and only static
//! strings cross the boundary, so hosts never free anything.
//!
//! All facades call underlying Rust modules from inner layers.

pub mod bootstrap_facades;

pub use bootstrap_facades::*;
