//! iCalendar (RFC 5545) export of Metric dates.
//!
//! [`build_calendar`] walks a [`YearSpan`] day by day and turns every date
//! with a Metric mapping into an all-day event named after its label.
//! [`Calendar::write_ics`] renders the result as a `VCALENDAR` document
//! through the `icalendar` crate.

use std::io::{self, Write};

use chrono::{DateTime, NaiveDate, Utc};
use icalendar::{Component, EventLike};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{MetricDate, YearSpan, YearStart, description, try_convert_with};

/// Repetition attached to every generated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recurrence {
    /// `RRULE:FREQ=YEARLY`, no end date
    Yearly,
}

impl Recurrence {
    /// Value of the `RRULE` property
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Yearly => "FREQ=YEARLY",
        }
    }
}

/// Options for [`build_calendar`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOptions {
    pub year_start: YearStart,
    pub recurrence: Option<Recurrence>,
}

/// An all-day event for one Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub uid:         Uuid,
    pub date:        NaiveDate,
    pub summary:     String,
    pub description: String,
    pub category:    &'static str,
    pub recurrence:  Option<Recurrence>,
}

impl Event {
    /// Event describing `metric`, the Metric form of `date`
    pub fn new(
        uid: Uuid,
        date: NaiveDate,
        metric: &MetricDate,
        recurrence: Option<Recurrence>,
    ) -> Self {
        Self {
            uid,
            date,
            summary: metric.to_string(),
            description: description(metric),
            category: metric.period_name(),
            recurrence,
        }
    }

    /// Builds the `VEVENT` component, stamped with `dtstamp`.
    pub fn to_vevent(&self, dtstamp: DateTime<Utc>) -> icalendar::Event {
        let mut event = icalendar::Event::new();
        event
            .uid(&self.uid.hyphenated().to_string())
            .timestamp(dtstamp)
            .starts(self.date)
            .summary(&self.summary)
            .description(&self.description)
            .add_property("CATEGORIES", self.category);
        // All-day events end on the following day (exclusive)
        if let Some(end) = self.date.succ_opt() {
            event.ends(end);
        }
        if let Some(recurrence) = self.recurrence {
            event.add_property("RRULE", recurrence.rule());
        }
        event
    }
}

/// A collection of events exportable as a `VCALENDAR`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    name:   Option<String>,
    events: Vec<Event>,
}

impl Calendar {
    /// Creates an empty calendar
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name (`NAME` and `X-WR-CALNAME`)
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the display name if set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Appends an event
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Returns the events in insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Builds the `VCALENDAR` with every event stamped with `dtstamp`.
    pub fn to_icalendar(&self, dtstamp: DateTime<Utc>) -> icalendar::Calendar {
        let mut calendar = icalendar::Calendar::new();
        if let Some(name) = &self.name {
            calendar.name(name);
        }
        for event in &self.events {
            calendar.push(event.to_vevent(dtstamp));
        }
        calendar
    }

    /// Renders the calendar as iCalendar text.
    pub fn to_ics(&self, dtstamp: DateTime<Utc>) -> String {
        self.to_icalendar(dtstamp).to_string()
    }

    /// Streams the calendar to `writer` as iCalendar text.
    ///
    /// # Errors
    /// Returns any error raised by `writer`.
    pub fn write_ics<W: Write>(&self, mut writer: W, dtstamp: DateTime<Utc>) -> io::Result<()> {
        write!(writer, "{}", self.to_icalendar(dtstamp))?;
        writer.flush()
    }
}

/// Builds one all-day event per day of `span` that has a Metric mapping.
///
/// Days without a mapping are skipped.
pub fn build_calendar(span: &YearSpan, options: &EventOptions) -> Calendar {
    let mut calendar = Calendar::new();
    let mut skipped = 0usize;

    for date in span.days() {
        match try_convert_with(date, options.year_start) {
            Ok(metric) => {
                calendar.push(Event::new(Uuid::new_v4(), date, &metric, options.recurrence));
            }
            Err(err) => {
                debug!(%date, %err, "skipping date without Metric mapping");
                skipped += 1;
            }
        }
    }

    info!(
        years = %span,
        events = calendar.len(),
        skipped,
        "built Metric calendar"
    );
    calendar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_event_lines() {
        let date = ymd(2024, 3, 19);
        let metric = convert(date).unwrap();
        let uid = Uuid::nil();
        let event = Event::new(uid, date, &metric, None);

        let mut calendar = Calendar::new();
        calendar.push(event);
        let ics = calendar.to_ics(stamp()).replace("\r\n ", "");

        assert!(ics.contains("BEGIN:VEVENT\r\n"));
        assert!(ics.contains("UID:00000000-0000-0000-0000-000000000000\r\n"));
        assert!(ics.contains("DTSTAMP:20240102T030405Z\r\n"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20240319\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:20240320\r\n"));
        assert!(ics.contains("SUMMARY:Día 30 de Ventôse / Año 232\r\n"));
        assert!(ics.contains("DESCRIPTION:Mes del viento (Wind)\r\n"));
        assert!(ics.contains("CATEGORIES:Ventôse\r\n"));
        assert!(!ics.contains("RRULE"));
    }

    #[test]
    fn test_calendar_envelope() {
        let calendar = Calendar::new().with_name("Calendario Métrico");
        let ics = calendar.to_ics(stamp());
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.contains("VERSION:2.0\r\n"));
        assert!(ics.contains("X-WR-CALNAME:Calendario Métrico\r\n"));
        assert!(ics.trim_end().ends_with("END:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
        assert!(calendar.is_empty());
        assert_eq!(calendar.name(), Some("Calendario Métrico"));
    }

    #[test]
    fn test_build_calendar_skips_unmapped_days() {
        // Sep 21 2024 is day 366 of common year 232
        let span = YearSpan::new(2024, 1).unwrap();
        let calendar = build_calendar(&span, &EventOptions::default());
        assert_eq!(calendar.len(), 365);
        assert!(calendar.events().iter().all(|e| e.date != ymd(2024, 9, 21)));

        let span = YearSpan::new(2023, 1).unwrap();
        let calendar = build_calendar(&span, &EventOptions::default());
        assert_eq!(calendar.len(), 365);
    }

    #[test]
    fn test_build_calendar_legacy_anchor() {
        let span = YearSpan::new(2024, 1).unwrap();
        let options = EventOptions {
            year_start: YearStart::Legacy2024Anchor,
            recurrence: None,
        };
        let calendar = build_calendar(&span, &options);
        // Sep 21 plus the 101 days from Sep 22 onward have no mapping
        assert_eq!(calendar.len(), 264);
        assert_eq!(
            calendar.events().last().map(|e| e.date),
            Some(ymd(2024, 9, 20))
        );
    }

    #[test]
    fn test_build_calendar_unique_uids() {
        let span = YearSpan::new(2024, 2).unwrap();
        let calendar = build_calendar(&span, &EventOptions::default());
        let uids: HashSet<_> = calendar.events().iter().map(|e| e.uid).collect();
        assert_eq!(uids.len(), calendar.len());
    }

    #[test]
    fn test_build_calendar_recurrence() {
        let span = YearSpan::new(2025, 1).unwrap();
        let options = EventOptions {
            year_start: YearStart::Fixed,
            recurrence: Some(Recurrence::Yearly),
        };
        let calendar = build_calendar(&span, &options);
        let ics = calendar.to_ics(stamp());
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), calendar.len());
        assert_eq!(ics.matches("RRULE:FREQ=YEARLY\r\n").count(), calendar.len());
    }

    #[test]
    fn test_vevent_properties() {
        let date = ymd(2023, 9, 21);
        let metric = convert(date).unwrap();
        assert!(metric.is_complementary());

        let plain = Event::new(Uuid::new_v4(), date, &metric, None);
        let vevent = plain.to_vevent(stamp());
        assert_eq!(
            vevent.property_value("SUMMARY"),
            Some("Quinto de Días Complementarios / Año 231")
        );
        assert_eq!(vevent.property_value("RRULE"), None);
        assert_eq!(
            vevent.property_value("CATEGORIES"),
            Some("Días Complementarios")
        );

        let yearly = Event::new(Uuid::new_v4(), date, &metric, Some(Recurrence::Yearly));
        assert_eq!(
            yearly.to_vevent(stamp()).property_value("RRULE"),
            Some("FREQ=YEARLY")
        );
    }

    #[test]
    fn test_write_ics() {
        let span = YearSpan::new(2025, 1).unwrap();
        let calendar = build_calendar(&span, &EventOptions::default());
        let mut buf = Vec::new();
        calendar.write_ics(&mut buf, stamp()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), calendar.to_ics(stamp()));
    }
}
