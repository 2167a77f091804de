//! Domain Services
//!
//! Pure functions over domain entities: query building, pay
//! classification and skill advice.

mod advice;
mod classifier;
mod query_builder;

pub use advice::*;
pub use classifier::*;
pub use query_builder::*;
