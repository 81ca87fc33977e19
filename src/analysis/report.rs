use {
    crate::{
        analysis::{SeriesSummary, projected_change_pct},
        models::{ForecastModel, ForecastResult},
        utils::format_price,
    },
    anyhow::Result,
    itertools::Itertools,
    serde::Serialize,
    tabled::{Table, Tabled, settings::Style},
};

const NO_FORECAST: &str = "-";

/// One model's outcome inside the report document.
#[derive(Debug, Clone, Serialize)]
pub struct ModelOutcome {
    pub model: ForecastModel,
    #[serde(flatten)]
    pub result: ForecastResult,
    /// Change of the prediction against the last close, in percent.
    pub change_pct: f64,
}

/// The full run report: what the original stats panel showed, as a
/// terminal table or a JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub symbol: String,
    pub bars: usize,
    pub last_close: f64,
    pub outcomes: Vec<ModelOutcome>,
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Next Close")]
    next_close: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Slope")]
    slope: String,
    #[tabled(rename = "Intercept")]
    intercept: String,
}

impl ForecastReport {
    pub fn new(
        symbol: String,
        summary: &SeriesSummary,
        results: Vec<(ForecastModel, ForecastResult)>,
    ) -> Self {
        let last_close = summary.latest.close;

        let outcomes = results
            .into_iter()
            .map(|(model, result)| ModelOutcome {
                model,
                change_pct: projected_change_pct(result.next_prediction, last_close),
                result,
            })
            .collect_vec();

        Self {
            symbol,
            bars: summary.bars,
            last_close,
            outcomes,
        }
    }

    pub fn render_table(&self) -> String {
        let rows = self.outcomes.iter().map(row_for).collect_vec();
        Table::new(rows).with(Style::rounded()).to_string()
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn row_for(outcome: &ModelOutcome) -> ForecastRow {
    let model = outcome.model.to_string();

    if !outcome.result.has_forecast() {
        return ForecastRow {
            model,
            next_close: NO_FORECAST.to_string(),
            change: NO_FORECAST.to_string(),
            confidence: NO_FORECAST.to_string(),
            slope: NO_FORECAST.to_string(),
            intercept: NO_FORECAST.to_string(),
        };
    }

    // Slope/intercept carry information for the regression model only.
    let (slope, intercept) = if outcome.model == ForecastModel::LinearRegression {
        (
            format!("{:.4}", outcome.result.slope),
            format_price(outcome.result.intercept),
        )
    } else {
        (NO_FORECAST.to_string(), NO_FORECAST.to_string())
    };

    ForecastRow {
        model,
        next_close: format_price(outcome.result.next_prediction),
        change: format!("{:+.2}%", outcome.change_pct),
        confidence: outcome.result.confidence.to_string(),
        slope,
        intercept,
    }
}
