use chrono::NaiveDate;

use rune_clock::types::{ZodiacPeriod, ZodiacSign, ALL_SIGNS};
use rune_clock::zodiac::*;
use rune_clock::RuneError;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ── Signs ──

#[test]
fn test_sign_indices_follow_year_order() {
    for (i, sign) in ALL_SIGNS.iter().enumerate() {
        assert_eq!(sign.index(), i);
        assert_eq!(ZodiacSign::from_index(i), *sign);
    }
    assert_eq!(ZodiacSign::from_index(12), ZodiacSign::Aries);
    assert_eq!(ZodiacSign::from_index(19), ZodiacSign::Scorpio);
}

#[test]
fn test_sign_parse_and_display() {
    assert_eq!("scorpio".parse::<ZodiacSign>().unwrap(), ZodiacSign::Scorpio);
    assert_eq!(" SAGITTARIUS ".parse::<ZodiacSign>().unwrap(), ZodiacSign::Sagittarius);
    assert_eq!(ZodiacSign::Capricorn.to_string(), "Capricorn");
    assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
}

#[test]
fn test_system_parse() {
    assert_eq!("Tropical".parse::<ZodiacSystem>().unwrap(), ZodiacSystem::Tropical);
    assert_eq!("vedic".parse::<ZodiacSystem>().unwrap(), ZodiacSystem::Sidereal);
    assert!("chinese".parse::<ZodiacSystem>().is_err());
}

// ── Table shape ──

#[test]
fn test_tropical_spans_cover_year_without_gaps() {
    let table = ZodiacTable::tropical();
    for year in [2026, 2028] {
        let mut total = 0;
        for index in 0..12 {
            let span = table.span(index, year).unwrap();
            let next = table.span(index + 1, if index == 9 { year + 1 } else { year }).unwrap();
            assert_eq!(span.end, next.start, "{} -> {}", span.period.sign, next.period.sign);
            total += span.total_days();
        }
        assert_eq!(total, if year == 2028 { 366 } else { 365 }, "year {}", year);
    }
}

#[test]
fn test_every_day_has_exactly_one_period() {
    let table = ZodiacTable::tropical();
    let mut day = d(2025, 12, 1);
    let end = d(2027, 2, 1);
    while day < end {
        let span = table.period_for(day).unwrap();
        assert!(span.contains(day), "{} not in {:?}", day, span);
        day = day.succ_opt().unwrap();
    }
}

// ── period_for ──

#[test]
fn test_period_for_boundaries() {
    let cases: &[(NaiveDate, ZodiacSign)] = &[
        (d(2026, 3, 20), ZodiacSign::Pisces),
        (d(2026, 3, 21), ZodiacSign::Aries),
        (d(2026, 4, 19), ZodiacSign::Aries),
        (d(2026, 4, 20), ZodiacSign::Taurus),
        (d(2026, 10, 23), ZodiacSign::Scorpio),
        (d(2026, 12, 21), ZodiacSign::Sagittarius),
        (d(2026, 12, 22), ZodiacSign::Capricorn),
        (d(2027, 1, 1), ZodiacSign::Capricorn),
        (d(2027, 1, 20), ZodiacSign::Aquarius),
        (d(2028, 2, 29), ZodiacSign::Pisces),
    ];
    for &(date, sign) in cases {
        assert_eq!(period_for(date).unwrap().period.sign, sign, "{}", date);
    }
}

#[test]
fn test_period_for_january_starts_previous_december() {
    let span = period_for(d(2026, 1, 10)).unwrap();
    assert_eq!(span.index, 9);
    assert_eq!(span.start, d(2025, 12, 22));
    assert_eq!(span.end, d(2026, 1, 20));
    assert_eq!(span.total_days(), 29);
}

#[test]
fn test_sidereal_aries() {
    let span = ZodiacTable::sidereal().period_for(d(2026, 4, 29)).unwrap();
    assert_eq!(span.period.sign, ZodiacSign::Aries);
    assert_eq!(span.start, d(2026, 4, 14));
    assert_eq!(span.end, d(2026, 5, 14));
    assert_eq!(span.total_days(), 30);
}

#[test]
fn test_sign_of_birth_date() {
    let table = ZodiacTable::tropical();
    assert_eq!(table.sign_of(d(2002, 1, 1)).unwrap(), ZodiacSign::Capricorn);
    assert_eq!(table.sign_of(d(1990, 11, 5)).unwrap(), ZodiacSign::Scorpio);
    assert_eq!(
        ZodiacTable::sidereal().sign_of(d(1990, 11, 5)).unwrap(),
        ZodiacSign::Libra
    );
}

// ── Validation ──

fn expect_invalid(periods: &[ZodiacPeriod]) {
    match ZodiacTable::new(periods) {
        Err(RuneError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_new_rejects_wrong_length() {
    expect_invalid(&TROPICAL_PERIODS[..11]);
}

#[test]
fn test_new_rejects_sign_out_of_order() {
    let mut periods = TROPICAL_PERIODS;
    periods.swap(1, 2);
    expect_invalid(&periods);
}

#[test]
fn test_new_rejects_impossible_dates() {
    let mut periods = TROPICAL_PERIODS;
    periods[11] = ZodiacPeriod::new(ZodiacSign::Pisces, 2, 29);
    expect_invalid(&periods);
    periods[11] = ZodiacPeriod::new(ZodiacSign::Pisces, 13, 1);
    expect_invalid(&periods);
}

#[test]
fn test_new_rejects_overlap_and_zero_length() {
    let mut periods = TROPICAL_PERIODS;
    periods[1] = ZodiacPeriod::new(ZodiacSign::Taurus, 3, 21);
    expect_invalid(&periods);

    let mut periods = TROPICAL_PERIODS;
    periods[3] = ZodiacPeriod::new(ZodiacSign::Cancer, 5, 1);
    expect_invalid(&periods);
}
