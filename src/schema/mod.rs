//! Schema module - Configuration and reporting types for string searches.

mod config;
mod evolution;

pub use config::*;
pub use evolution::*;
