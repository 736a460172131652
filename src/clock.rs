use chrono::{NaiveDateTime, NaiveTime};

use crate::adapter::SunTimesSource;
use crate::error::{Result, RuneError};
use crate::rune::{rune_angles_at, RuneReading};
use crate::types::GeoCoordinate;
use crate::zodiac::ZodiacTable;

/// Result of one tick.
#[derive(Debug)]
pub enum Tick {
    Fresh(RuneReading),
    /// This tick failed; the last good reading stays on the dial.
    Stale {
        reading: RuneReading,
        error: RuneError,
    },
}

impl Tick {
    pub fn reading(&self) -> &RuneReading {
        match self {
            Tick::Fresh(reading) | Tick::Stale { reading, .. } => reading,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Tick::Stale { .. })
    }
}

/// Recomputes the dial from scratch on every tick and keeps only the latest
/// successful reading.
#[derive(Debug)]
pub struct RuneClock<S> {
    coordinate: GeoCoordinate,
    source: S,
    table: ZodiacTable,
    latest: Option<RuneReading>,
}

impl<S: SunTimesSource> RuneClock<S> {
    pub fn new(coordinate: GeoCoordinate, source: S, table: ZodiacTable) -> Self {
        Self {
            coordinate,
            source,
            table,
            latest: None,
        }
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn latest(&self) -> Option<&RuneReading> {
        self.latest.as_ref()
    }

    /// Errors only if this tick fails and nothing has been shown yet.
    pub fn tick(&mut self, now: NaiveDateTime) -> Result<Tick> {
        match rune_angles_at(now, self.coordinate, &self.source, &self.table) {
            Ok(reading) => {
                self.latest = Some(reading);
                Ok(Tick::Fresh(reading))
            }
            Err(error) => {
                log::error!("tick at {} failed: {}", now, error);
                match self.latest {
                    Some(reading) => Ok(Tick::Stale { reading, error }),
                    None => Err(error),
                }
            }
        }
    }
}

/// 12-hour wall-clock text, e.g. "3:32 PM".
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
