// Series-level statistics and result presentation
pub mod report;
pub mod summary;

pub use {
    report::{ForecastReport, ModelOutcome},
    summary::{SeriesSummary, projected_change_pct},
};
