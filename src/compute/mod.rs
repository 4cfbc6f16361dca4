//! Compute module - Evolutionary search over byte sequences.

pub mod evolution;

pub use evolution::*;
