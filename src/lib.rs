#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{ForecastReport, SeriesSummary};
pub use data::{BarSeries, load_bar_series};
pub use domain::PriceBar;
pub use engine::run_forecast;
pub use models::{ForecastModel, ForecastResult, SeriesBuffer};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

use crate::config::constants::loader::DEFAULT_DATA_FILE;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// OHLCV CSV file (Date,Open,High,Low,Close,Volume)
    #[arg(default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Run a single model instead of comparing all three
    #[arg(long, value_enum)]
    pub model: Option<ForecastModel>,

    /// Emit the report as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
