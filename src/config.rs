use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use metric_calendar::YearStart;
use serde::Deserialize;
use tracing::debug;

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricCalendarConfig {
    /// Calendar generation settings.
    #[serde(default)]
    pub calendar: CalendarToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    pub start_year: Option<i32>,
    pub years_span: Option<u16>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub year_start: YearStart,
    pub name: Option<String>,
}

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "metric_calendar.toml";

impl MetricCalendarConfig {
    /// Reads the named config file, which must exist.
    ///
    /// Without a name, [`DEFAULT_CONFIG_PATH`] is read when present and
    /// defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::read(path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}
