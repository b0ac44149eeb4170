use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use tracing::{debug, error};

use businessdays::configuration::Configuration;
use businessdays::manager::managererror::CalendarError;
use businessdays::time::calendar::businessday::{
    first_business_day_of_month,
    is_business_day,
    next_business_day
};
use businessdays::time::calendar::territory::weekday_name;
use businessdays::time::calendar::territorycalendar::TerritoryCalendar;
use businessdays::time::utility::{parse_month_day, parse_month_list, same_day_in_year};

#[derive(Parser)]
#[command(name = "businessdays")]
#[command(about = "Check business days against a territory's public holidays", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (info by default, -v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Additional territory file (JSON object or array)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Country code of the territory, e.g. "at"
    #[arg(short, long, default_value = "at")]
    territory: String,

    /// Calendar year (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Date to check as MM-DD (defaults to today)
    #[arg(short, long, conflicts_with = "months")]
    date: Option<String>,

    /// Print the first business day of each month: "all" or e.g. "1,4,12"
    #[arg(short, long)]
    months: Option<String>
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_level(cli.verbose))
        .with_target(cli.verbose >= 2)
        .init();

    if let Err(e) = run(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace"
    }
}

fn run(cli: Cli) -> Result<(), CalendarError> {
    let config = Configuration::with_bundled()?;
    if let Some(path) = &cli.config {
        config.from_reader(path)?;
    }

    let today = Local::now().date_naive();
    let year = cli.year.unwrap_or(today.year());
    let calendar = config.build_calendar(&cli.territory, year)?;
    debug!(country = calendar.country(), year, "calendar ready");

    println!("{} ({}), workdays: {}",
             calendar.name(),
             calendar.country(),
             calendar.territory().workday_names().join(", "));

    if let Some(months) = &cli.months {
        for month in parse_month_list(months)? {
            let first = first_business_day_of_month(year, month, &calendar)?;
            println!("{}  {}", first, weekday_name(first.weekday()));
        }
        return Ok(());
    }

    let d = match &cli.date {
        Some(month_day) => parse_month_day(month_day, year)?,
        None => same_day_in_year(today, year)
            .ok_or_else(|| CalendarError::malformed(format!("year {} is out of range", year)))?
    };
    report(d, &calendar)
}

fn report(d: NaiveDate, calendar: &TerritoryCalendar) -> Result<(), CalendarError> {
    match calendar.holiday_on(d) {
        Some(holiday) => println!("{} is {}", d, holiday.name()),
        None => println!("{} is a {}", d, weekday_name(d.weekday()))
    }
    if is_business_day(d, calendar) {
        println!("{} is a business day", d);
    } else {
        let next = next_business_day(d, calendar)?;
        println!("next business day: {}  {}", next, weekday_name(next.weekday()));
    }
    Ok(())
}
