//! Address sources: command line, list files, stdin and local interfaces.

pub mod collector;
pub mod inputs;
pub mod interfaces;

pub use collector::*;
