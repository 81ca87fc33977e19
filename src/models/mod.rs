mod forecast;
mod series;

pub use {
    forecast::{ForecastModel, ForecastResult},
    series::SeriesBuffer,
};
