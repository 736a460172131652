use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};

use rune_clock::config::{load_settings, Settings};
use rune_clock::{
    format_clock_time, ApproximateSunTimes, FixedSunTimes, LocationResolver, RuneClock,
    RuneReading, Tick, WithFallback, ZodiacSystem, ZodiacTable,
};

#[derive(Parser, Debug)]
#[command(name = "rune-clock", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./rune-clock.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Zodiac boundaries: tropical or sidereal
    #[arg(short, long, global = true)]
    zodiac: Option<ZodiacSystem>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print the dial once.
    Now {
        /// Place name or "lat,lon"
        #[arg(short, long)]
        location: Option<String>,
        /// Local time to show instead of now, e.g. 2026-04-29T15:32:00
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
    /// Re-print the dial every tick.
    Watch {
        #[arg(short, long)]
        location: Option<String>,
        /// Seconds between ticks (overrides tick_seconds)
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Print the zodiac sign for a birth date (defaults to the profile's).
    Sign { date: Option<NaiveDate> },
    /// Print the zodiac periods for the current year.
    Table,
}

type Source = WithFallback<ApproximateSunTimes, FixedSunTimes>;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(zodiac) = cli.zodiac {
        settings.zodiac = zodiac;
    }
    let timezone = settings.timezone()?;
    let table = settings.zodiac_table();

    match cli.command {
        Commands::Now { location, at } => {
            let mut clock = build_clock(&settings, location.as_deref(), timezone)?;
            let now = at.unwrap_or_else(|| local_now(timezone));
            let tick = clock.tick(now)?;
            print_reading(&location_label(&settings, location.as_deref()), &tick);
            Ok(())
        }
        Commands::Watch { location, interval } => {
            if let Some(secs) = interval {
                settings.tick_seconds = secs;
            }
            let mut clock = build_clock(&settings, location.as_deref(), timezone)?;
            let label = location_label(&settings, location.as_deref());
            loop {
                match clock.tick(local_now(timezone)) {
                    Ok(tick) => print_reading(&label, &tick),
                    Err(e) => log::error!("nothing to show yet: {}", e),
                }
                std::thread::sleep(settings.tick_interval());
            }
        }
        Commands::Sign { date } => {
            let profile = settings.profile.clone().unwrap_or_default();
            let date = date
                .or(profile.date_of_birth)
                .ok_or_else(|| anyhow::anyhow!("no date given and no date_of_birth in profile"))?;
            let sign = table.sign_of(date)?;
            match profile.full_name {
                Some(name) => println!("{} ({}): {}", name, date, sign),
                None => println!("{}: {}", date, sign),
            }
            Ok(())
        }
        Commands::Table => {
            print_table(&table, settings.zodiac, local_now(timezone).year())?;
            Ok(())
        }
    }
}

fn local_now(timezone: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&timezone).naive_local()
}

fn location_label(settings: &Settings, location: Option<&str>) -> String {
    location.unwrap_or(&settings.location).to_string()
}

fn build_clock(
    settings: &Settings,
    location: Option<&str>,
    timezone: Tz,
) -> anyhow::Result<RuneClock<Source>> {
    let name = location.unwrap_or(&settings.location);
    let coordinate = settings.gazetteer()?.resolve_coordinates(name)?;
    log::info!("{} resolved to {} ({})", name, coordinate, timezone);
    let source = WithFallback::new(ApproximateSunTimes::new(timezone), FixedSunTimes);
    Ok(RuneClock::new(coordinate, source, settings.zodiac_table()))
}

fn print_reading(label: &str, tick: &Tick) {
    let RuneReading {
        at,
        angles,
        sun_times,
        period,
    } = tick.reading();

    println!("{}", label);
    println!("{}  {}", format_clock_time(at.time()), at.date());
    println!(
        "Sunrise {}  Sunset {}{}",
        format_clock_time(sun_times.sunrise.time()),
        format_clock_time(sun_times.sunset.time()),
        if sun_times.is_degraded() {
            "  (approximate)"
        } else {
            ""
        }
    );
    println!(
        "Zodiac: {} ({} – {})",
        period.period.sign, period.start, period.end
    );
    println!("Big arm:   {:7.2}°", angles.big_arm_degrees);
    println!("Small arm: {:7.2}°", angles.small_arm_degrees);
    if let Tick::Stale { error, .. } = tick {
        println!("(stale: {})", error);
    }
    println!();
}

fn print_table(table: &ZodiacTable, system: ZodiacSystem, year: i32) -> anyhow::Result<()> {
    println!("{} zodiac, {}", system, year);
    for index in 0..12 {
        let span = table.span(index, year)?;
        println!(
            "{:>3}°  {:<12} {} – {}  ({} days)",
            index * 30,
            span.period.sign,
            span.start,
            span.end,
            span.total_days()
        );
    }
    Ok(())
}
