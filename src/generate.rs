use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, info_span};

use metric_calendar::{EventOptions, Recurrence, YearSpan, YearStart, build_calendar};

use crate::cli::GenerateArgs;
use crate::config::{CalendarToml, MetricCalendarConfig};

const DEFAULT_START_YEAR: i32 = 2024;
const DEFAULT_YEARS_SPAN: u16 = 10;
const DEFAULT_OUTPUT: &str = "metric_calendar.ics";

/// Settings after merging the config file with command-line overrides.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    span:    YearSpan,
    output:  PathBuf,
    options: EventOptions,
    name:    Option<String>,
}

/// Build the calendar and write it to an `.ics` file.
pub fn run(args: &GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    let config = MetricCalendarConfig::load(args.config.as_deref())?;
    let settings = resolve(args, config.calendar)?;
    info!(
        years = %settings.span,
        output = %settings.output.display(),
        "generating Metric calendar"
    );

    let mut calendar = build_calendar(&settings.span, &settings.options);
    if let Some(name) = settings.name {
        calendar = calendar.with_name(name);
    }

    let file = File::create(&settings.output)
        .with_context(|| format!("failed to create {}", settings.output.display()))?;
    calendar
        .write_ics(BufWriter::new(file), Utc::now())
        .with_context(|| format!("failed to write {}", settings.output.display()))?;

    println!(
        "Archivo ICS generado: {} ({} eventos)",
        settings.output.display(),
        calendar.len()
    );
    Ok(())
}

fn resolve(args: &GenerateArgs, config: CalendarToml) -> Result<Settings> {
    let span = match args.span {
        Some(span) => span,
        None => {
            let start = args
                .start_year
                .or(config.start_year)
                .unwrap_or(DEFAULT_START_YEAR);
            let years = args
                .years
                .or(config.years_span)
                .unwrap_or(DEFAULT_YEARS_SPAN);
            YearSpan::new(start, years).context("invalid year span")?
        }
    };

    let year_start = if args.legacy_2024_anchor {
        YearStart::Legacy2024Anchor
    } else {
        config.year_start
    };
    let recurrence = (args.recurring || config.recurring).then_some(Recurrence::Yearly);

    Ok(Settings {
        span,
        output: args
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        options: EventOptions {
            year_start,
            recurrence,
        },
        name: args.name.clone().or(config.name),
    })
}
