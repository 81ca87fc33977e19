mod core;

pub use core::run_forecast;
