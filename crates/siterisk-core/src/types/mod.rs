//! Core data types shared by every resolver.

pub mod severity;
pub mod signal;

pub use severity::{rank, Priority, Severity};
pub use signal::{Signal, SignalDocument};
