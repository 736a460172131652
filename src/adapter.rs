//! Location and sunrise/sunset sources.
//!
//! The calculator only ever sees `GeoCoordinate` and `SunTimes`; where they
//! come from is decided here. Everything shipped in this module works offline.

use std::collections::HashMap;

use chrono::{NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, RuneError};
use crate::sun;
use crate::types::{GeoCoordinate, SunTimes, SunTimesQuality};

pub trait LocationResolver {
    /// Fails with [`RuneError::LocationNotFound`] when nothing matches.
    fn resolve_coordinates(&self, location_name: &str) -> Result<GeoCoordinate>;
}

pub trait SunTimesSource {
    /// Fails with [`RuneError::AstronomicalDataUnavailable`] when the source
    /// has nothing for this coordinate and date.
    fn sunrise_sunset_for(&self, coordinate: GeoCoordinate, date: NaiveDate) -> Result<SunTimes>;
}

const BUILTIN_PLACES: &[(&str, f64, f64)] = &[
    ("Chicago", 41.8781, -87.6298),
    ("New York", 40.7128, -74.0060),
    ("Los Angeles", 34.0522, -118.2437),
    ("London", 51.5074, -0.1278),
    ("Paris", 48.8566, 2.3522),
    ("Reykjavik", 64.1466, -21.9426),
    ("Tromso", 69.6492, 18.9553),
    ("Longyearbyen", 78.2232, 15.6267),
    ("Mumbai", 19.0760, 72.8777),
    ("Tokyo", 35.6762, 139.6503),
    ("Sydney", -33.8688, 151.2093),
    ("Quito", -0.1807, -78.4678),
];

/// Case-insensitive place-name table.
///
/// "Chicago, United States" matches "chicago" through its first
/// comma-separated part, and a literal "lat, lon" pair resolves to itself.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: HashMap<String, GeoCoordinate>,
}

impl Gazetteer {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_builtin_places() -> Self {
        let mut gazetteer = Self::empty();
        for &(name, latitude, longitude) in BUILTIN_PLACES {
            gazetteer.places.insert(
                name.to_ascii_lowercase(),
                GeoCoordinate {
                    latitude,
                    longitude,
                },
            );
        }
        gazetteer
    }

    pub fn insert(&mut self, name: &str, coordinate: GeoCoordinate) {
        self.places
            .insert(name.trim().to_ascii_lowercase(), coordinate);
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn parse_pair(name: &str) -> Option<Result<GeoCoordinate>> {
        let (lat, lon) = name.split_once(',')?;
        let latitude = lat.trim().parse::<f64>().ok()?;
        let longitude = lon.trim().parse::<f64>().ok()?;
        Some(GeoCoordinate::new(latitude, longitude))
    }
}

impl LocationResolver for Gazetteer {
    fn resolve_coordinates(&self, location_name: &str) -> Result<GeoCoordinate> {
        let key = location_name.trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(RuneError::LocationNotFound(location_name.to_string()));
        }
        if let Some(coordinate) = self.places.get(&key) {
            return Ok(*coordinate);
        }
        if let Some(pair) = Self::parse_pair(&key) {
            return pair;
        }
        let head = key.split(',').next().unwrap_or_default().trim();
        self.places
            .get(head)
            .copied()
            .ok_or_else(|| RuneError::LocationNotFound(location_name.to_string()))
    }
}

/// Sunrise equation, shifted into the wall-clock time of `timezone`.
#[derive(Debug, Clone, Copy)]
pub struct ApproximateSunTimes {
    pub timezone: Tz,
}

impl ApproximateSunTimes {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Offset in minutes at local noon, so DST changeover nights don't matter.
    pub fn utc_offset_minutes(&self, date: NaiveDate) -> Result<i32> {
        let local = date
            .and_hms_opt(12, 0, 0)
            .and_then(|noon| self.timezone.from_local_datetime(&noon).earliest())
            .ok_or_else(|| {
                RuneError::AstronomicalDataUnavailable(format!(
                    "{} has no local noon on {}",
                    self.timezone, date
                ))
            })?;
        Ok(local.offset().fix().local_minus_utc() / 60)
    }
}

impl SunTimesSource for ApproximateSunTimes {
    fn sunrise_sunset_for(&self, coordinate: GeoCoordinate, date: NaiveDate) -> Result<SunTimes> {
        let offset = self.utc_offset_minutes(date)?;
        sun::local_sun_times(coordinate, date, offset)
    }
}

/// Constant 06:00/18:00, marked degraded.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSunTimes;

impl FixedSunTimes {
    pub const SUNRISE_HOUR: u32 = 6;
    pub const SUNSET_HOUR: u32 = 18;
}

impl SunTimesSource for FixedSunTimes {
    fn sunrise_sunset_for(&self, _coordinate: GeoCoordinate, date: NaiveDate) -> Result<SunTimes> {
        let at = |hour| {
            date.and_hms_opt(hour, 0, 0)
                .ok_or_else(|| RuneError::invalid(format!("{}:00 on {}", hour, date)))
        };
        Ok(SunTimes {
            sunrise: at(Self::SUNRISE_HOUR)?,
            sunset: at(Self::SUNSET_HOUR)?,
            quality: SunTimesQuality::Degraded,
        })
    }
}

/// Uses `fallback` whenever `primary` reports its data unavailable.
#[derive(Debug, Clone, Copy)]
pub struct WithFallback<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P, F> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: SunTimesSource, F: SunTimesSource> SunTimesSource for WithFallback<P, F> {
    fn sunrise_sunset_for(&self, coordinate: GeoCoordinate, date: NaiveDate) -> Result<SunTimes> {
        match self.primary.sunrise_sunset_for(coordinate, date) {
            Err(RuneError::AstronomicalDataUnavailable(reason)) => {
                log::warn!("sun times unavailable ({}), using fallback", reason);
                self.fallback.sunrise_sunset_for(coordinate, date)
            }
            other => other,
        }
    }
}
