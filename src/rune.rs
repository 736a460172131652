//! Hand angles for the rune dial.
//!
//! Dial layout, clockwise from 12 o'clock: the Big Arm sits at 90° at
//! sunrise and sweeps the lower half to 270° at sunset, then the upper half
//! back round to the next sunrise. The Small Arm gives each zodiac sign 30°,
//! Aries starting at 0°.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::adapter::SunTimesSource;
use crate::angles::{
    minutes_since_midnight, normalize_angle, DEGREES_PER_SIGN, MINUTES_PER_DAY, SUNRISE_DEGREES,
    SUNSET_DEGREES,
};
use crate::error::{Result, RuneError};
use crate::types::{GeoCoordinate, PeriodSpan, RuneAngles, SunTimes};
use crate::zodiac::ZodiacTable;

/// Big Arm angle for a time of day.
///
/// A zero-length day (polar night) is valid: the arm reads 90° at the single
/// sunrise/sunset instant, skips the collapsed day arc, and spends the rest
/// of the day on the night arc. Progress is clamped to `[0, 1]` in both
/// halves.
pub fn big_arm_degrees(current: NaiveTime, sunrise: NaiveTime, sunset: NaiveTime) -> Result<f64> {
    let now = minutes_since_midnight(current);
    let rise = minutes_since_midnight(sunrise);
    let set = minutes_since_midnight(sunset);

    let day_length = set - rise;
    if day_length < 0.0 {
        return Err(RuneError::invalid(format!(
            "sunrise {} is after sunset {}",
            sunrise, sunset
        )));
    }
    let night_length = MINUTES_PER_DAY - day_length;

    let angle = if now >= rise && now <= set {
        let progress = if day_length > 0.0 {
            ((now - rise) / day_length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        SUNRISE_DEGREES + progress * 180.0
    } else {
        let since_sunset = if now > set {
            now - set
        } else {
            now + (MINUTES_PER_DAY - set)
        };
        let progress = if night_length > 0.0 {
            (since_sunset / night_length).clamp(0.0, 1.0)
        } else {
            1.0
        };
        SUNSET_DEGREES + progress * 180.0
    };

    Ok(normalize_angle(angle))
}

/// Small Arm angle from how far `span` has run on `date`.
pub fn small_arm_for_span(span: &PeriodSpan, date: NaiveDate) -> f64 {
    let total = span.total_days();
    let passed = (date - span.start).num_days();
    let progress = if total > 0 {
        (passed as f64 / total as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    normalize_angle(span.index as f64 * DEGREES_PER_SIGN + progress * DEGREES_PER_SIGN)
}

pub fn small_arm_degrees(reference_date: NaiveDate, table: &ZodiacTable) -> Result<f64> {
    let span = table.period_for(reference_date)?;
    Ok(small_arm_for_span(&span, reference_date))
}

fn check_same_day(sun_times: &SunTimes, current: NaiveDateTime, reference_date: NaiveDate) -> Result<()> {
    let day = sun_times.date();
    if sun_times.sunset.date() != day {
        return Err(RuneError::invalid(format!(
            "sunrise {} and sunset {} fall on different days",
            sun_times.sunrise, sun_times.sunset
        )));
    }
    if current.date() != day || reference_date != day {
        return Err(RuneError::invalid(format!(
            "sun times for {} used at {} (reference {})",
            day, current, reference_date
        )));
    }
    Ok(())
}

/// Both hand angles for one tick. Pure: identical inputs give identical
/// output.
pub fn compute_rune_angles(
    current: NaiveDateTime,
    sun_times: &SunTimes,
    reference_date: NaiveDate,
    table: &ZodiacTable,
) -> Result<RuneAngles> {
    check_same_day(sun_times, current, reference_date)?;
    Ok(RuneAngles {
        big_arm_degrees: big_arm_degrees(
            current.time(),
            sun_times.sunrise.time(),
            sun_times.sunset.time(),
        )?,
        small_arm_degrees: small_arm_degrees(reference_date, table)?,
    })
}

/// Everything the dial shows for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuneReading {
    pub at: NaiveDateTime,
    pub angles: RuneAngles,
    pub sun_times: SunTimes,
    pub period: PeriodSpan,
}

/// Fetches sun times for `now`'s date and computes the angles.
pub fn rune_angles_at<S>(
    now: NaiveDateTime,
    coordinate: GeoCoordinate,
    source: &S,
    table: &ZodiacTable,
) -> Result<RuneReading>
where
    S: SunTimesSource + ?Sized,
{
    let date = now.date();
    let sun_times = source.sunrise_sunset_for(coordinate, date)?;
    let angles = compute_rune_angles(now, &sun_times, date, table)?;
    let period = table.period_for(date)?;
    log::debug!(
        "{}: big arm {:.2}°, small arm {:.2}° ({})",
        now,
        angles.big_arm_degrees,
        angles.small_arm_degrees,
        period.period.sign
    );
    Ok(RuneReading {
        at: now,
        angles,
        sun_times,
        period,
    })
}
