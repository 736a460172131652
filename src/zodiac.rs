//! Zodiac period table and date lookup.
//!
//! The year is split into 12 periods by fixed calendar start dates. Each
//! period runs until the next one starts, so the table always covers the
//! whole year. Exactly one period crosses the December/January boundary.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::angles::day_of_year;
use crate::error::{Result, RuneError};
use crate::types::{PeriodSpan, ZodiacPeriod, ZodiacSign, ALL_SIGNS};

pub const TROPICAL_PERIODS: [ZodiacPeriod; 12] = [
    ZodiacPeriod::new(ZodiacSign::Aries, 3, 21),
    ZodiacPeriod::new(ZodiacSign::Taurus, 4, 20),
    ZodiacPeriod::new(ZodiacSign::Gemini, 5, 21),
    ZodiacPeriod::new(ZodiacSign::Cancer, 6, 21),
    ZodiacPeriod::new(ZodiacSign::Leo, 7, 23),
    ZodiacPeriod::new(ZodiacSign::Virgo, 8, 23),
    ZodiacPeriod::new(ZodiacSign::Libra, 9, 23),
    ZodiacPeriod::new(ZodiacSign::Scorpio, 10, 23),
    ZodiacPeriod::new(ZodiacSign::Sagittarius, 11, 22),
    ZodiacPeriod::new(ZodiacSign::Capricorn, 12, 22),
    ZodiacPeriod::new(ZodiacSign::Aquarius, 1, 20),
    ZodiacPeriod::new(ZodiacSign::Pisces, 2, 19),
];

/// Approximate sidereal boundaries, fixed to calendar dates.
pub const SIDEREAL_PERIODS: [ZodiacPeriod; 12] = [
    ZodiacPeriod::new(ZodiacSign::Aries, 4, 14),
    ZodiacPeriod::new(ZodiacSign::Taurus, 5, 14),
    ZodiacPeriod::new(ZodiacSign::Gemini, 6, 15),
    ZodiacPeriod::new(ZodiacSign::Cancer, 7, 16),
    ZodiacPeriod::new(ZodiacSign::Leo, 8, 17),
    ZodiacPeriod::new(ZodiacSign::Virgo, 9, 17),
    ZodiacPeriod::new(ZodiacSign::Libra, 10, 17),
    ZodiacPeriod::new(ZodiacSign::Scorpio, 11, 16),
    ZodiacPeriod::new(ZodiacSign::Sagittarius, 12, 16),
    ZodiacPeriod::new(ZodiacSign::Capricorn, 1, 14),
    ZodiacPeriod::new(ZodiacSign::Aquarius, 2, 13),
    ZodiacPeriod::new(ZodiacSign::Pisces, 3, 15),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSystem {
    #[default]
    Tropical,
    Sidereal,
}

impl fmt::Display for ZodiacSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tropical => f.write_str("tropical"),
            Self::Sidereal => f.write_str("sidereal"),
        }
    }
}

impl FromStr for ZodiacSystem {
    type Err = RuneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tropical" => Ok(Self::Tropical),
            "sidereal" | "vedic" => Ok(Self::Sidereal),
            other => Err(RuneError::invalid(format!("unknown zodiac system '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacTable {
    periods: [ZodiacPeriod; 12],
}

impl Default for ZodiacTable {
    fn default() -> Self {
        Self::tropical()
    }
}

impl ZodiacTable {
    /// Builds a table from custom boundaries, rejecting anything that would
    /// leave a gap, an overlap, or a zero-length period.
    pub fn new(periods: &[ZodiacPeriod]) -> Result<Self> {
        let periods: [ZodiacPeriod; 12] = periods.try_into().map_err(|_| {
            RuneError::invalid(format!(
                "zodiac table needs 12 periods, got {}",
                periods.len()
            ))
        })?;

        let mut ordinals = [0i32; 12];
        for (i, period) in periods.iter().enumerate() {
            if period.sign != ALL_SIGNS[i] {
                return Err(RuneError::invalid(format!(
                    "zodiac period {} is {}, expected {}",
                    i, period.sign, ALL_SIGNS[i]
                )));
            }
            // Validate against a common year so Feb 29 never anchors a period.
            if NaiveDate::from_ymd_opt(2025, period.start_month, period.start_day).is_none() {
                return Err(RuneError::invalid(format!(
                    "{} starts on invalid date {}/{}",
                    period.sign, period.start_month, period.start_day
                )));
            }
            ordinals[i] = day_of_year(2025, period.start_month, period.start_day);
        }

        let mut wraps = 0;
        for i in 0..12 {
            let (this, next) = (ordinals[i], ordinals[(i + 1) % 12]);
            if next == this {
                return Err(RuneError::invalid(format!(
                    "{} has zero length",
                    periods[i].sign
                )));
            }
            if next < this {
                wraps += 1;
            }
        }
        if wraps != 1 {
            return Err(RuneError::invalid(
                "zodiac periods are not in calendar order",
            ));
        }

        Ok(Self { periods })
    }

    pub const fn tropical() -> Self {
        Self {
            periods: TROPICAL_PERIODS,
        }
    }

    pub const fn sidereal() -> Self {
        Self {
            periods: SIDEREAL_PERIODS,
        }
    }

    pub const fn for_system(system: ZodiacSystem) -> Self {
        match system {
            ZodiacSystem::Tropical => Self::tropical(),
            ZodiacSystem::Sidereal => Self::sidereal(),
        }
    }

    pub fn periods(&self) -> &[ZodiacPeriod; 12] {
        &self.periods
    }

    fn start_in(&self, index: usize, year: i32) -> Result<NaiveDate> {
        let p = self.periods[index % 12];
        NaiveDate::from_ymd_opt(year, p.start_month, p.start_day).ok_or_else(|| {
            RuneError::invalid(format!(
                "malformed zodiac table: {}/{} in {}",
                p.start_month, p.start_day, year
            ))
        })
    }

    /// The instance of period `index` that starts in `year`.
    pub fn span(&self, index: usize, year: i32) -> Result<PeriodSpan> {
        let index = index % 12;
        let start = self.start_in(index, year)?;
        let mut end = self.start_in(index + 1, year)?;
        if end <= start {
            end = self.start_in(index + 1, year + 1)?;
        }
        Ok(PeriodSpan {
            period: self.periods[index],
            index,
            start,
            end,
        })
    }

    /// Finds the period containing `date`. Early-January dates belong to a
    /// period that started the previous December, so both years are scanned.
    pub fn period_for(&self, date: NaiveDate) -> Result<PeriodSpan> {
        for year in [date.year() - 1, date.year()] {
            for index in 0..12 {
                let span = self.span(index, year)?;
                if span.contains(date) {
                    return Ok(span);
                }
            }
        }
        Err(RuneError::invalid(format!(
            "no zodiac period covers {}",
            date
        )))
    }

    pub fn sign_of(&self, date: NaiveDate) -> Result<ZodiacSign> {
        Ok(self.period_for(date)?.period.sign)
    }
}

/// Period lookup against the tropical table.
pub fn period_for(date: NaiveDate) -> Result<PeriodSpan> {
    ZodiacTable::tropical().period_for(date)
}
