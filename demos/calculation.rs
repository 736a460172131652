use chrono::TimeZone;
use chrono_tz::America::Chicago;

use rune_clock::{
    rune_angles_at, ApproximateSunTimes, Gazetteer, LocationResolver, ZodiacTable,
};

fn main() {
    let gazetteer = Gazetteer::with_builtin_places();
    let coordinate = gazetteer
        .resolve_coordinates("Chicago, United States")
        .unwrap();

    let dt = Chicago.with_ymd_and_hms(2026, 4, 29, 15, 32, 0).unwrap();
    let source = ApproximateSunTimes::new(Chicago);
    let table = ZodiacTable::tropical();

    let reading = rune_angles_at(dt.naive_local(), coordinate, &source, &table).unwrap();

    println!("=== Rune Clock Calculation Example ===");
    println!("Location: Chicago ({})", coordinate);
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Sun ---");
    println!("Sunrise: {}", reading.sun_times.sunrise.time());
    println!("Sunset: {}", reading.sun_times.sunset.time());
    println!();
    println!("--- Zodiac ---");
    println!(
        "Period: {} ({} to {}, {} days)",
        reading.period.period.sign,
        reading.period.start,
        reading.period.end,
        reading.period.total_days()
    );
    println!();
    println!("--- Hands ---");
    println!("Big arm: {:.2}°", reading.angles.big_arm_degrees);
    println!("Small arm: {:.2}°", reading.angles.small_arm_degrees);
}
