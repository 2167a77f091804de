//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems.
//!
//! Implementations of these traits live in `adapters`.

pub mod services;

// Re-exports
pub use services::*;
