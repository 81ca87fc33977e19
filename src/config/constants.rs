// Top Level Constants

pub mod forecast {
    use crate::config::SmoothingFactor;

    /// Bars required before any model produces a forecast.
    pub const MIN_BARS: usize = 2;

    /// Lookback window of the moving-average model.
    pub const MA_WINDOW: usize = 5;

    /// Fixed smoothing factor of the exponential model.
    pub const SMOOTHING_ALPHA: SmoothingFactor = SmoothingFactor::new(0.3);

    pub mod confidence {
        use crate::config::Confidence;

        pub const LINEAR_REGRESSION: Confidence = Confidence::new(0.8);
        pub const MOVING_AVERAGE: Confidence = Confidence::new(0.7);
        pub const EXPONENTIAL_SMOOTHING: Confidence = Confidence::new(0.75);
    }
}

pub mod loader {
    /// Data file used when the CLI is given no argument.
    pub const DEFAULT_DATA_FILE: &str = "stock_data.csv";

    /// Capacity hint for a freshly loaded series.
    pub const INITIAL_SERIES_CAPACITY: usize = 50;
}
