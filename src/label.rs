use crate::{COMPLEMENTARY_PERIOD_DESCRIPTION, MetricDate, OUT_OF_RANGE_LABEL};

/// Human-readable event name for a converted date.
///
/// `None` (a date without a Metric mapping) yields [`OUT_OF_RANGE_LABEL`].
pub fn label(date: Option<&MetricDate>) -> String {
    date.map_or_else(|| OUT_OF_RANGE_LABEL.to_owned(), ToString::to_string)
}

/// Longer description of the month a date falls in, e.g.
/// "Mes del viento (Wind)", or "Jours complémentaires" for complementary days.
pub fn description(date: &MetricDate) -> String {
    match date.month() {
        Some(month) => format!("{} ({})", month.description(), month.meaning()),
        None => COMPLEMENTARY_PERIOD_DESCRIPTION.to_owned(),
    }
}
