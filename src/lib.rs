pub mod adapter;
pub mod angles;
pub mod clock;
pub mod config;
pub mod error;
pub mod rune;
pub mod sun;
pub mod types;
pub mod zodiac;

pub use adapter::{
    ApproximateSunTimes, FixedSunTimes, Gazetteer, LocationResolver, SunTimesSource, WithFallback,
};

pub use angles::{
    day_of_year, deg_to_rad, equation_of_time, minutes_since_midnight, normalize_angle,
    rad_to_deg, solar_declination, DEGREES_PER_SIGN, MINUTES_PER_DAY, SUNRISE_DEGREES,
    SUNSET_DEGREES,
};

pub use clock::{format_clock_time, RuneClock, Tick};

pub use error::{Result, RuneError};

pub use rune::{
    big_arm_degrees, compute_rune_angles, rune_angles_at, small_arm_degrees, small_arm_for_span,
    RuneReading,
};

pub use sun::{local_sun_times, solar_day, DayKind, SolarDay};

pub use types::{
    GeoCoordinate, PeriodSpan, RuneAngles, SunTimes, SunTimesQuality, ZodiacPeriod, ZodiacSign,
    ALL_SIGNS,
};

pub use zodiac::{period_for, ZodiacSystem, ZodiacTable, SIDEREAL_PERIODS, TROPICAL_PERIODS};
