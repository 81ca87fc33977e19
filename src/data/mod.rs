mod loader;

pub use loader::{BarSeries, load_bar_series};
