//! Configuration module for the trend-scope forecaster.

mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use types::{Confidence, SmoothingFactor};
