use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::adapter::Gazetteer;
use crate::error::{Result, RuneError};
use crate::types::GeoCoordinate;
use crate::zodiac::{ZodiacSystem, ZodiacTable};

pub const DEFAULT_CONFIG_FILE: &str = "rune-clock.toml";
pub const ENV_PREFIX: &str = "RUNE_CLOCK";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Profile {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub location: String,
    /// IANA zone name, e.g. "America/Chicago".
    pub timezone: String,
    pub tick_seconds: u64,
    pub zodiac: ZodiacSystem,
    pub profile: Option<Profile>,
    pub places: Vec<Place>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            location: "Chicago".to_string(),
            timezone: "America/Chicago".to_string(),
            tick_seconds: 60,
            zodiac: ZodiacSystem::Tropical,
            profile: None,
            places: Vec::new(),
        }
    }
}

impl Settings {
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| RuneError::invalid(format!("timezone '{}': {}", self.timezone, e)))
    }

    /// Never shorter than one second.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_seconds.max(1))
    }

    pub fn zodiac_table(&self) -> ZodiacTable {
        ZodiacTable::for_system(self.zodiac)
    }

    /// Built-in places plus any `[[places]]` from the config.
    pub fn gazetteer(&self) -> Result<Gazetteer> {
        let mut gazetteer = Gazetteer::with_builtin_places();
        for place in &self.places {
            gazetteer.insert(
                &place.name,
                GeoCoordinate::new(place.latitude, place.longitude)?,
            );
        }
        Ok(gazetteer)
    }
}

/// Layers the config file (optional unless `path` is given) and
/// `RUNE_CLOCK_*` environment variables over the defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let required = path.is_some();
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    log::debug!("loading settings from {}", path.display());

    let s = config::Config::builder()
        .add_source(config::File::from(path).required(required))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_settings(toml: &str) -> Result<Settings> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;
    Ok(s.try_deserialize()?)
}
