/// Module containing environment variable helpers
pub mod config;
/// Module containing date and currency formatting utilities
pub mod format;
/// Module containing logging utilities
pub mod logger;
/// Module containing input pattern validation
pub mod validation;

pub use format::*;
pub use logger::*;
pub use validation::*;
