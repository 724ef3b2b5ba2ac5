//! Address value types and the public-address policy.

pub mod classifier;
pub mod types;

pub use classifier::*;
pub use types::*;
