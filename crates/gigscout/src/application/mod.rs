//! Application Layer
//!
//! Use-case orchestration over domain services and ports.

mod finder;

pub use finder::*;
