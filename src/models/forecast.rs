use {
    crate::config::Confidence,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// The three interchangeable forecasting models.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    Default,
    clap::ValueEnum,
)]
pub enum ForecastModel {
    #[default]
    #[strum(to_string = "Linear Regression")]
    LinearRegression,
    #[strum(to_string = "Moving Average")]
    MovingAverage,
    #[strum(to_string = "Exp. Smoothing")]
    ExponentialSmoothing,
}

/// Output of one forecast call.
///
/// The all-zero default doubles as the "no forecast produced" state: the
/// engine returns it untouched when the series is too short, so callers
/// check `has_forecast` (or a zero confidence) rather than an error signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ForecastResult {
    /// Regression coefficients; zero unless the linear model ran.
    pub slope: f64,
    pub intercept: f64,

    /// Declared for schema parity with the regression output; never
    /// populated by any model.
    pub r_squared: f64,

    /// Forecast for the step immediately after the last observed bar.
    pub next_prediction: f64,

    pub confidence: Confidence,
}

impl ForecastResult {
    pub fn has_forecast(&self) -> bool {
        self.confidence.value() > 0.0
    }
}
