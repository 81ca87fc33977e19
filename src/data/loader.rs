use {
    crate::{
        config::constants::loader::INITIAL_SERIES_CAPACITY,
        domain::PriceBar,
        models::SeriesBuffer,
    },
    anyhow::{Context, Result, bail},
    chrono::NaiveDate,
    std::{fs, path::Path},
};

/// A loaded chronological series plus the ticker it was derived from.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub symbol: String,
    pub bars: SeriesBuffer<PriceBar>,
}

/// Loads a `Date,Open,High,Low,Close,Volume` CSV into a chronological
/// series. Export files ship newest-first; the series is reversed when the
/// date labels say so (or when they don't parse at all, matching the export
/// convention). Malformed rows are skipped and counted, not fatal; a file
/// with no usable rows is an error.
pub fn load_bar_series(path: &Path) -> Result<BarSeries> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    let symbol = extract_symbol(path);
    let mut bars = SeriesBuffer::new(INITIAL_SERIES_CAPACITY, PriceBar::default());

    let mut valid_rows: usize = 0;
    let mut skipped_rows: usize = 0;

    // First line is the header
    for line in raw.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        match parse_row(line) {
            Some(bar) => {
                if !bars.append(bar) {
                    bail!("out of memory while buffering {}", path.display());
                }
                valid_rows += 1;
            }
            None => {
                skipped_rows += 1;
                log::debug!("Skipped row: {line}");
            }
        }
    }

    if bars.is_empty() {
        bail!(
            "no usable rows in {} (expected Date,Open,High,Low,Close,Volume)",
            path.display()
        );
    }

    if newest_first(&bars) {
        reverse_in_place(&mut bars);
        log::info!(
            "Loaded {valid_rows} rows for {symbol}, skipped {skipped_rows} (reversed to chronological order)"
        );
    } else {
        log::info!("Loaded {valid_rows} rows for {symbol}, skipped {skipped_rows}");
    }

    Ok(BarSeries { symbol, bars })
}

/// Parses one data row. None means the row should be skipped: too few
/// fields, or a non-positive open/close (the marker for placeholder rows in
/// the export format).
fn parse_row(line: &str) -> Option<PriceBar> {
    // The volume column may contain thousands separators inside quotes, so
    // only the first five commas delimit fields; the remainder of the line
    // is all volume.
    let mut fields = line.splitn(6, ',');

    let date = strip_quotes(fields.next()?.trim()).to_string();
    let open = lenient_f64(fields.next()?);
    let high = lenient_f64(fields.next()?);
    let low = lenient_f64(fields.next()?);
    let close = lenient_f64(fields.next()?);
    let volume = lenient_f64(&clean_volume_field(fields.next().unwrap_or("0")));

    if open > 0.0 && close > 0.0 {
        Some(PriceBar::new(date, open, high, low, close, volume))
    } else {
        None
    }
}

/// Lenient float parse: quotes stripped, anything unparsable becomes 0.0
/// (and the row is then dropped by the open/close gate).
fn lenient_f64(field: &str) -> f64 {
    strip_quotes(field.trim()).parse().unwrap_or(0.0)
}

/// Keeps digits and dots only; separators and quotes vanish. Empty input
/// becomes "0".
fn clean_volume_field(field: &str) -> String {
    let clean: String = field
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if clean.is_empty() { "0".to_string() } else { clean }
}

/// Removes at most one surrounding quote on each side.
fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

/// Derives a ticker from export filenames like `STOCK_US_XNAS_GOOG.csv`.
/// Falls back to the file stem when there is no underscore-delimited tail.
fn extract_symbol(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown");

    match stem.rsplit('_').next() {
        Some(symbol) if !symbol.is_empty() => symbol.to_string(),
        _ => stem.to_string(),
    }
}

/// True when the loaded rows run newest-first and need reversing. Decided
/// from the first and last date labels when both parse as `%Y-%m-%d`;
/// otherwise assumes the export convention (newest-first).
fn newest_first(bars: &SeriesBuffer<PriceBar>) -> bool {
    if bars.len() < 2 {
        return false;
    }

    let first = NaiveDate::parse_from_str(&bars.get(0).date, "%Y-%m-%d");
    let last = NaiveDate::parse_from_str(&bars.last().date, "%Y-%m-%d");

    match (first, last) {
        (Ok(first), Ok(last)) => first > last,
        _ => true,
    }
}

fn reverse_in_place(bars: &mut SeriesBuffer<PriceBar>) {
    let len = bars.len();
    for i in 0..len / 2 {
        let front = bars.get(i);
        let back = bars.get(len - 1 - i);
        bars.set(i, back);
        bars.set(len - 1 - i, front);
    }
}
