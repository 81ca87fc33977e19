use crate::{
    domain::PriceBar,
    models::SeriesBuffer,
    utils::{get_max, get_min},
};

/// Headline numbers for a loaded series: bar count, the latest bar, and the
/// traded price range (lowest low to highest high).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub bars: usize,
    pub latest: PriceBar,
    pub low: f64,
    pub high: f64,
}

impl SeriesSummary {
    /// None when the series is empty.
    pub fn from_bars(bars: &SeriesBuffer<PriceBar>) -> Option<Self> {
        if bars.is_empty() {
            return None;
        }

        let mut lows = Vec::with_capacity(bars.len());
        let mut highs = Vec::with_capacity(bars.len());
        for i in 0..bars.len() {
            let bar = bars.get(i);
            lows.push(bar.low);
            highs.push(bar.high);
        }

        Some(Self {
            bars: bars.len(),
            latest: bars.last(),
            low: get_min(&lows),
            high: get_max(&highs),
        })
    }
}

/// Percent change of a forecast against the last observed close.
/// 0 when the close is not positive.
pub fn projected_change_pct(prediction: f64, last_close: f64) -> f64 {
    if last_close > f64::EPSILON {
        (prediction - last_close) / last_close * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> SeriesBuffer<PriceBar> {
        let mut bars = SeriesBuffer::new(3, PriceBar::default());
        bars.append(PriceBar::new("a".into(), 10.0, 12.0, 8.0, 11.0, 100.0));
        bars.append(PriceBar::new("b".into(), 11.0, 15.0, 10.0, 14.0, 200.0));
        bars.append(PriceBar::new("c".into(), 14.0, 14.5, 9.5, 10.0, 300.0));
        bars
    }

    #[test]
    fn summary_spans_the_traded_range() {
        let summary = SeriesSummary::from_bars(&series()).unwrap();
        assert_eq!(summary.bars, 3);
        assert_eq!(summary.low, 8.0);
        assert_eq!(summary.high, 15.0);
        assert_eq!(summary.latest.date, "c");
    }

    #[test]
    fn empty_series_has_no_summary() {
        let empty = SeriesBuffer::new(0, PriceBar::default());
        assert!(SeriesSummary::from_bars(&empty).is_none());
    }

    #[test]
    fn change_is_relative_to_the_last_close() {
        assert!((projected_change_pct(110.0, 100.0) - 10.0).abs() < 1e-12);
        assert!((projected_change_pct(90.0, 100.0) + 10.0).abs() < 1e-12);
        assert_eq!(projected_change_pct(50.0, 0.0), 0.0);
    }
}
