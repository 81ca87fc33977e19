use serde::{Deserialize, Serialize};

// One trading day of OHLCV data.
//
// `date` is an opaque label; chronological order is carried by position in
// the owning series, not by calendar semantics. The usual candle shape
// (low <= open/close <= high) is not enforced here, so downstream math must
// tolerate violations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: String,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,

    pub volume: f64,
}

impl PriceBar {
    // A constructor for convenience
    pub fn new(date: String, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        PriceBar {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
