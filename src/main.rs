use {
    anyhow::{Result, anyhow},
    clap::Parser,
    strum::IntoEnumIterator,
    trend_scope::{Cli, ForecastModel, ForecastReport, SeriesSummary, load_bar_series, run_forecast},
};

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. CLI
    let args = Cli::parse();
    log::info!("Loading data from: {}", args.data_file.display());

    // 3. Ingest
    let series = load_bar_series(&args.data_file)?;
    let summary = SeriesSummary::from_bars(&series.bars)
        .ok_or_else(|| anyhow!("no bars loaded for {}", series.symbol))?;

    log::info!(
        "{}: {} bars, traded range {:.2}..{:.2}, last close {:.2} on {}",
        series.symbol,
        summary.bars,
        summary.low,
        summary.high,
        summary.latest.close,
        summary.latest.date,
    );

    // 4. Forecast
    let models: Vec<ForecastModel> = match args.model {
        Some(model) => vec![model],
        None => ForecastModel::iter().collect(),
    };
    let results = models
        .iter()
        .map(|&model| (model, run_forecast(model, &series.bars)))
        .collect();

    // 5. Report
    let report = ForecastReport::new(series.symbol.clone(), &summary, results);
    if args.json {
        println!("{}", report.render_json()?);
    } else {
        println!("{}", report.render_table());
    }

    if report.outcomes.iter().all(|o| !o.result.has_forecast()) {
        log::warn!(
            "Series too short for any forecast ({} bars); nothing was predicted",
            summary.bars
        );
    }

    Ok(())
}
