//! Offline sunrise/sunset approximation.
//!
//! Uses the declination / hour-angle sunrise equation with a standard
//! -0.833° horizon (refraction plus solar radius), then shifts solar time to
//! local clock time with the equation of time, the observer's longitude and
//! the zone's UTC offset.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::angles::{self, MINUTES_PER_DAY};
use crate::error::{Result, RuneError};
use crate::types::{GeoCoordinate, SunTimes};

/// Apparent altitude of the sun's centre at rise/set.
pub const HORIZON_ALTITUDE: f64 = -0.833;

const LAST_SECOND_OF_DAY: f64 = MINUTES_PER_DAY - 1.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    Normal,
    PolarDay,
    PolarNight,
}

/// Sunrise and sunset as minutes of local *solar* time (noon = 720).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub sunrise_minutes: f64,
    pub sunset_minutes: f64,
    pub kind: DayKind,
}

impl SolarDay {
    pub fn day_length(&self) -> f64 {
        self.sunset_minutes - self.sunrise_minutes
    }
}

pub fn solar_day(latitude: f64, day_of_year: i32) -> SolarDay {
    let lat_rad = angles::deg_to_rad(latitude);
    let decl_rad = angles::deg_to_rad(angles::solar_declination(day_of_year));
    let cos_h = (angles::deg_to_rad(HORIZON_ALTITUDE).sin() - lat_rad.sin() * decl_rad.sin())
        / (lat_rad.cos() * decl_rad.cos());

    if cos_h >= 1.0 {
        SolarDay {
            sunrise_minutes: 720.0,
            sunset_minutes: 720.0,
            kind: DayKind::PolarNight,
        }
    } else if cos_h <= -1.0 {
        SolarDay {
            sunrise_minutes: 0.0,
            sunset_minutes: MINUTES_PER_DAY,
            kind: DayKind::PolarDay,
        }
    } else {
        let h_deg = angles::rad_to_deg(cos_h.acos());
        let half_day_minutes = (h_deg / angles::DEGREES_PER_HOUR) * 60.0;
        SolarDay {
            sunrise_minutes: 720.0 - half_day_minutes,
            sunset_minutes: 720.0 + half_day_minutes,
            kind: DayKind::Normal,
        }
    }
}

/// Local clock minute of solar noon for a longitude and UTC offset.
pub fn solar_noon_minutes(longitude: f64, day_of_year: i32, utc_offset_minutes: i32) -> f64 {
    720.0 - 4.0 * longitude - angles::equation_of_time(day_of_year) + utc_offset_minutes as f64
}

pub fn minutes_to_naive_time(minutes: f64) -> Result<NaiveTime> {
    if !minutes.is_finite() {
        return Err(RuneError::invalid("non-finite time of day"));
    }
    let secs = (minutes.clamp(0.0, LAST_SECOND_OF_DAY) * 60.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs.min(86_399), 0)
        .ok_or_else(|| RuneError::invalid(format!("{} minutes is not a time of day", minutes)))
}

/// Approximate local sunrise/sunset for `date`.
///
/// Solar noon is wrapped into the local day before the half-day offsets are
/// applied, so only rise/set themselves are clamped to the date.
/// Polar day runs 00:00 to 23:59:59. Polar night collapses both instants onto
/// local solar noon, giving a zero-length day.
pub fn local_sun_times(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    utc_offset_minutes: i32,
) -> Result<SunTimes> {
    let doy = angles::day_of_year(date.year(), date.month(), date.day());
    let day = solar_day(coordinate.latitude, doy);
    // Far-east zones (UTC+13/+14) push raw noon past midnight.
    let noon = solar_noon_minutes(coordinate.longitude, doy, utc_offset_minutes)
        .rem_euclid(MINUTES_PER_DAY)
        .min(LAST_SECOND_OF_DAY);

    let (rise, set) = match day.kind {
        DayKind::PolarDay => (0.0, LAST_SECOND_OF_DAY),
        DayKind::PolarNight => (noon, noon),
        DayKind::Normal => {
            let half = day.day_length() / 2.0;
            (
                (noon - half).clamp(0.0, LAST_SECOND_OF_DAY),
                (noon + half).clamp(0.0, LAST_SECOND_OF_DAY),
            )
        }
    };
    log::debug!(
        "sun times for {} on {}: {:?}, rise {:.1} set {:.1} (local minutes)",
        coordinate,
        date,
        day.kind,
        rise,
        set
    );

    Ok(SunTimes::new(
        date.and_time(minutes_to_naive_time(rise)?),
        date.and_time(minutes_to_naive_time(set)?),
    ))
}
