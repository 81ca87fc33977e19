use crate::{
    config::{SmoothingFactor, constants::forecast},
    domain::PriceBar,
    models::{ForecastModel, ForecastResult, SeriesBuffer},
};

/// Computes a fresh next-step forecast over `bars` under the selected model.
///
/// Fewer than [`forecast::MIN_BARS`] observations (or fewer than the window
/// for the moving average) is a defined no-op: the default all-zero result
/// comes back and the caller inspects `has_forecast`. The buffer is read by
/// index only, never mutated or reordered, and the result retains no
/// reference to it.
pub fn run_forecast(model: ForecastModel, bars: &SeriesBuffer<PriceBar>) -> ForecastResult {
    if bars.len() < forecast::MIN_BARS {
        return ForecastResult::default();
    }

    match model {
        ForecastModel::LinearRegression => linear_regression(bars),
        ForecastModel::MovingAverage => moving_average(bars, forecast::MA_WINDOW),
        ForecastModel::ExponentialSmoothing => {
            exponential_smoothing(bars, forecast::SMOOTHING_ALPHA)
        }
    }
}

/// Ordinary least squares over (bar index, close), evaluated one step past
/// the last observed index.
fn linear_regression(bars: &SeriesBuffer<PriceBar>) -> ForecastResult {
    let len = bars.len();
    let x_mean = (len - 1) as f64 / 2.0;

    let mut y_mean = 0.0;
    for i in 0..len {
        y_mean += bars.get(i).close;
    }
    y_mean /= len as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for i in 0..len {
        let x_diff = i as f64 - x_mean;
        let y_diff = bars.get(i).close - y_mean;
        numerator += x_diff * y_diff;
        denominator += x_diff * x_diff;
    }

    // Zero variance in the index axis cannot happen for len >= 2; the clamp
    // guards pathological inputs rather than propagating a division fault.
    let slope = if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    };
    let intercept = y_mean - slope * x_mean;

    ForecastResult {
        slope,
        intercept,
        r_squared: 0.0,
        next_prediction: slope * len as f64 + intercept,
        confidence: forecast::confidence::LINEAR_REGRESSION,
    }
}

/// Arithmetic mean of the last `window` closes, chronological order.
fn moving_average(bars: &SeriesBuffer<PriceBar>, window: usize) -> ForecastResult {
    let len = bars.len();
    if len < window {
        return ForecastResult::default();
    }

    let mut sum = 0.0;
    for i in 0..window {
        sum += bars.get(len - 1 - i).close;
    }

    ForecastResult {
        next_prediction: sum / window as f64,
        confidence: forecast::confidence::MOVING_AVERAGE,
        ..Default::default()
    }
}

/// Single-pass EMA seeded on the oldest close.
fn exponential_smoothing(bars: &SeriesBuffer<PriceBar>, alpha: SmoothingFactor) -> ForecastResult {
    let a = alpha.value();

    let mut ema = bars.get(0).close;
    for i in 1..bars.len() {
        ema = a * bars.get(i).close + (1.0 - a) * ema;
    }

    ForecastResult {
        next_prediction: ema,
        confidence: forecast::confidence::EXPONENTIAL_SMOOTHING,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn bars_from_closes(closes: &[f64]) -> SeriesBuffer<PriceBar> {
        let mut bars = SeriesBuffer::new(closes.len(), PriceBar::default());
        for (i, &close) in closes.iter().enumerate() {
            let bar = PriceBar::new(
                format!("day-{i}"),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1_000.0,
            );
            assert!(bars.append(bar));
        }
        bars
    }

    #[test]
    fn short_series_is_a_defined_noop_for_every_model() {
        for closes in [&[][..], &[10.0][..]] {
            let bars = bars_from_closes(closes);
            for model in ForecastModel::iter() {
                let result = run_forecast(model, &bars);
                assert!(!result.has_forecast());
                assert_eq!(result, ForecastResult::default());
            }
        }
    }

    #[test]
    fn linear_regression_recovers_a_perfect_line() {
        // close[i] = 4 + 2.5 * i
        let closes: Vec<f64> = (0..12).map(|i| 4.0 + 2.5 * i as f64).collect();
        let bars = bars_from_closes(&closes);

        let result = run_forecast(ForecastModel::LinearRegression, &bars);
        assert!((result.slope - 2.5).abs() < 1e-9);
        assert!((result.intercept - 4.0).abs() < 1e-9);
        assert!((result.next_prediction - (4.0 + 2.5 * 12.0)).abs() < 1e-9);
        assert_eq!(result.r_squared, 0.0);
    }

    #[test]
    fn linear_regression_concrete_series() {
        let bars = bars_from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);

        let result = run_forecast(ForecastModel::LinearRegression, &bars);
        assert!((result.slope - 10.0).abs() < 1e-9);
        assert!((result.intercept - 10.0).abs() < 1e-9);
        assert!((result.next_prediction - 60.0).abs() < 1e-9);
        assert_eq!(result.confidence.value(), 0.8);
    }

    #[test]
    fn moving_average_needs_a_full_window() {
        let four = bars_from_closes(&[10.0, 20.0, 30.0, 40.0]);
        let result = run_forecast(ForecastModel::MovingAverage, &four);
        assert!(!result.has_forecast());

        let five = bars_from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let result = run_forecast(ForecastModel::MovingAverage, &five);
        assert_eq!(result.next_prediction, 30.0);
        assert_eq!(result.confidence.value(), 0.7);
        assert_eq!(result.slope, 0.0);
    }

    #[test]
    fn moving_average_uses_only_the_most_recent_closes() {
        let bars = bars_from_closes(&[100.0, 100.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        let result = run_forecast(ForecastModel::MovingAverage, &bars);
        assert_eq!(result.next_prediction, 30.0);
    }

    #[test]
    fn moving_average_window_is_overridable() {
        let bars = bars_from_closes(&[1.0, 2.0, 9.0, 12.0]);
        let result = moving_average(&bars, 2);
        assert!((result.next_prediction - 10.5).abs() < 1e-12);
    }

    #[test]
    fn exponential_smoothing_constant_series_is_a_fixed_point() {
        let bars = bars_from_closes(&[42.0; 6]);
        let result = run_forecast(ForecastModel::ExponentialSmoothing, &bars);
        assert_eq!(result.next_prediction, 42.0);
    }

    #[test]
    fn exponential_smoothing_concrete_series() {
        // ema: 10 -> 13 -> 18.1 -> 24.67 -> 32.269
        let bars = bars_from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let result = run_forecast(ForecastModel::ExponentialSmoothing, &bars);
        assert!((result.next_prediction - 32.269).abs() < 1e-9);
        assert_eq!(result.confidence.value(), 0.75);
    }

    #[test]
    fn exponential_smoothing_alpha_is_overridable() {
        let bars = bars_from_closes(&[10.0, 20.0]);
        let result = exponential_smoothing(&bars, SmoothingFactor::new(0.5));
        assert!((result.next_prediction - 15.0).abs() < 1e-12);
    }

    #[test]
    fn engine_survives_malformed_candle_shapes() {
        // low > high violates the usual invariant; the engine only reads
        // closes and must not care.
        let mut bars = SeriesBuffer::new(2, PriceBar::default());
        bars.append(PriceBar::new("a".into(), 5.0, 1.0, 9.0, 5.0, 0.0));
        bars.append(PriceBar::new("b".into(), 7.0, 2.0, 8.0, 7.0, 0.0));

        for model in ForecastModel::iter() {
            let _ = run_forecast(model, &bars);
        }
    }
}
