use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use metric_calendar::{MetricDate, YearStart, convert_with, label};

use crate::cli::ConvertArgs;

/// Print the Metric form of each requested date.
pub fn run(args: &ConvertArgs) -> Result<()> {
    let year_start = if args.legacy_2024_anchor {
        YearStart::Legacy2024Anchor
    } else {
        YearStart::Fixed
    };

    for &date in &args.dates {
        let metric = convert_with(date, year_start);
        debug!(%date, mapped = metric.is_some(), "converted date");
        println!("{}", render(date, metric.as_ref(), args.json)?);
    }
    Ok(())
}

/// Output for one date: its label block, or the Metric date as JSON
/// (`null` when the date has no mapping).
fn render(date: NaiveDate, metric: Option<&MetricDate>, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(&metric)
            .with_context(|| format!("failed to serialize Metric date for {date}"))
    } else {
        Ok(format!("\nFecha Gregoriana: {date}\n{}", label(metric)))
    }
}
