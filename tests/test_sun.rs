use chrono::{NaiveDate, Timelike};

use rune_clock::angles::minutes_since_midnight;
use rune_clock::sun::*;
use rune_clock::types::GeoCoordinate;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

const CHICAGO: GeoCoordinate = GeoCoordinate {
    latitude: 41.8781,
    longitude: -87.6298,
};

// ── Solar-time day ──

#[test]
fn test_equinox_about_12h_daylight() {
    let day = solar_day(39.8, 80);
    assert_eq!(day.kind, DayKind::Normal);
    assert_approx!((day.sunrise_minutes + day.sunset_minutes) / 2.0, 720.0, 1e-9);
    // Refraction adds a few minutes over the geometric 12 h.
    assert_approx!(day.day_length(), 728.0, 10.0);
}

#[test]
fn test_summer_longer_than_winter() {
    let summer = solar_day(39.8, 172);
    let winter = solar_day(39.8, 355);
    assert!(summer.day_length() > 840.0);
    assert!(winter.day_length() < 600.0);
}

#[test]
fn test_southern_hemisphere_is_mirrored() {
    let north = solar_day(-33.9, 355);
    let south = solar_day(-33.9, 172);
    assert!(north.day_length() > south.day_length());
}

#[test]
fn test_polar_day_and_night() {
    assert_eq!(solar_day(80.0, 172).kind, DayKind::PolarDay);
    assert_eq!(solar_day(80.0, 355).kind, DayKind::PolarNight);
    assert_eq!(solar_day(-80.0, 355).kind, DayKind::PolarDay);
    let night = solar_day(80.0, 355);
    assert_eq!(night.day_length(), 0.0);
}

// ── Local clock times ──

#[test]
fn test_solar_noon_in_chicago_standard_time() {
    // Chicago sits ~2.4° east of the CST meridian; noon before EoT ≈ 11:50.
    let noon = solar_noon_minutes(CHICAGO.longitude, 80, -360);
    assert_approx!(noon, 720.0 - 9.5 + 7.5, 2.0);
}

#[test]
fn test_chicago_summer_solstice() {
    // Published times for 2026-06-21 (CDT): sunrise 05:15, sunset 20:29.
    let times = local_sun_times(CHICAGO, d(2026, 6, 21), -300).unwrap();
    assert_approx!(minutes_since_midnight(times.sunrise.time()), 5.0 * 60.0 + 15.0, 6.0);
    assert_approx!(minutes_since_midnight(times.sunset.time()), 20.0 * 60.0 + 29.0, 6.0);
    assert!(!times.is_degraded());
}

#[test]
fn test_chicago_winter_solstice() {
    // Published times for 2026-12-21 (CST): sunrise 07:15, sunset 16:22.
    let times = local_sun_times(CHICAGO, d(2026, 12, 21), -360).unwrap();
    assert_approx!(minutes_since_midnight(times.sunrise.time()), 7.0 * 60.0 + 15.0, 6.0);
    assert_approx!(minutes_since_midnight(times.sunset.time()), 16.0 * 60.0 + 22.0, 6.0);
}

#[test]
fn test_sun_times_stay_on_requested_date() {
    let date = d(2026, 3, 1);
    for &(lat, lon, offset) in &[(0.0, 179.0, 720), (0.0, -179.0, 840), (50.0, 10.0, 60)] {
        let coordinate = GeoCoordinate::new(lat, lon).unwrap();
        let times = local_sun_times(coordinate, date, offset).unwrap();
        assert_eq!(times.sunrise.date(), date);
        assert_eq!(times.sunset.date(), date);
        assert!(times.sunrise < times.sunset);
        // Neither instant is pinned to a day edge.
        let rise = minutes_since_midnight(times.sunrise.time());
        let set = minutes_since_midnight(times.sunset.time());
        assert!(rise > 240.0 && rise < 600.0, "rise {} at {}", rise, coordinate);
        assert!(set > 960.0 && set < 1320.0, "set {} at {}", set, coordinate);
    }
}

#[test]
fn test_far_east_zones_wrap_solar_noon() {
    // Apia (UTC+13) and Kiritimati (UTC+14) sit west of the date line, so
    // raw solar noon lands past midnight and has to wrap back into the day.
    let date = d(2026, 3, 20);
    for &(lat, lon, offset, noon) in &[(-13.83, -171.76, 780, 755.2), (1.87, -157.4, 840, 757.8)] {
        let coordinate = GeoCoordinate::new(lat, lon).unwrap();
        let times = local_sun_times(coordinate, date, offset).unwrap();
        let rise = minutes_since_midnight(times.sunrise.time());
        let set = minutes_since_midnight(times.sunset.time());
        assert_approx!((rise + set) / 2.0, noon, 3.0);
        assert_approx!(set - rise, 727.0, 10.0);
        assert!(rise > 6.0 * 60.0 && rise < 7.0 * 60.0 + 15.0, "rise {} at {}", rise, coordinate);
        assert!(set > 18.0 * 60.0 + 15.0 && set < 19.0 * 60.0 + 30.0, "set {} at {}", set, coordinate);
    }
}

#[test]
fn test_polar_local_times() {
    let svalbard = GeoCoordinate::new(78.2, 15.6).unwrap();

    let summer = local_sun_times(svalbard, d(2026, 6, 21), 120).unwrap();
    assert_eq!(summer.sunrise.time().num_seconds_from_midnight(), 0);
    assert_eq!(summer.sunset.time().num_seconds_from_midnight(), 86_399);

    let winter = local_sun_times(svalbard, d(2026, 12, 21), 60).unwrap();
    assert_eq!(winter.sunrise, winter.sunset);
    // Solar noon at 15.6°E in CET is close to 11:58.
    assert_approx!(minutes_since_midnight(winter.sunrise.time()), 718.0, 5.0);
}
