use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Args;
use monthly_core::labels::{classification_name, month_name, weekday_name};
use monthly_core::{ConfigError, MonthEngine, MonthlyConfig, WeekendConfig};
use tracing::debug;

use super::load_config;

#[derive(Args)]
pub struct MonthArgs {
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
    /// Weekend code 0-14 or 7-character pattern, Monday first (e.g. 0000011)
    #[arg(long)]
    pub weekend: Option<WeekendConfig>,
    /// Datebook JSON file (array of activities)
    #[arg(long)]
    pub datebook: Option<PathBuf>,
}

fn build_engine(
    config: Option<&Path>,
    args: &MonthArgs,
) -> Result<(MonthEngine, MonthlyConfig), Box<dyn std::error::Error>> {
    let mut cfg = load_config(config)?;
    if let Some(weekend) = &args.weekend {
        cfg.weekend = weekend.clone();
    }
    let reference = args
        .date
        .as_deref()
        .map(|date| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| ConfigError::MalformedReferenceDate(date.to_string()))
        })
        .transpose()?;

    debug!(weekend = %cfg.weekend, ?reference, "building month");
    let options = cfg.engine_options(reference, args.datebook.as_deref())?;
    let engine = MonthEngine::new(options)?;
    Ok((engine, cfg))
}

pub fn show(
    config: Option<&Path>,
    args: &MonthArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (engine, cfg) = build_engine(config, args)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&engine.view())?);
        return Ok(());
    }

    let locale = cfg.locale;
    let frame = engine.frame();
    let weekend: Vec<_> = engine
        .weekend_ordinals()
        .iter()
        .filter_map(|ord| weekday_name(*ord, locale))
        .collect();
    println!(
        "{} {} (weekend: {})",
        month_name(frame.month_index(), locale).unwrap_or("?"),
        frame.year(),
        if weekend.is_empty() {
            "-".to_string()
        } else {
            weekend.join(", ")
        }
    );
    println!(
        "{:>3}  {:<10} {:<12} {:>4} {:>7}  {:<2}  {:>5} {:>6} {:>5} {:>5}",
        "Day", "Weekday", "Status", "Week", "Workday", "WH", "Tasks", "Events", "Appts", "Meets"
    );

    let holidays = engine.holiday_days();
    for day in engine.days() {
        let markers = format!(
            "{}{}",
            if day.is_weekend { 'W' } else { '.' },
            if holidays.contains(&day.day) { 'H' } else { '.' }
        );
        println!(
            "{:>3}  {:<10} {:<12} {:>4} {:>7}  {:<2}  {:>5} {:>6} {:>5} {:>5}",
            day.day,
            weekday_name(day.weekday_ordinal, locale).unwrap_or("?"),
            classification_name(day.classification, locale),
            day.week_number,
            day.workday_number,
            markers,
            day.scheduled.tasks,
            day.scheduled.events,
            day.scheduled.appointments,
            day.scheduled.meetings,
        );
    }

    let summary = engine.summary();
    println!();
    for (label, stat) in [
        ("Days", summary.days),
        ("Weeks", summary.weeks),
        ("Workdays", summary.workdays),
    ] {
        println!(
            "{label:<9} {:>2}/{:<2}  elapsed {:>2}  remaining {:>2}  ({:.0}%)",
            stat.current,
            stat.total,
            stat.elapsed,
            stat.remaining,
            stat.percentage * 100.0
        );
    }
    Ok(())
}

pub fn summary(config: Option<&Path>, args: &MonthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (engine, _) = build_engine(config, args)?;
    println!("{}", serde_json::to_string_pretty(engine.summary())?);
    Ok(())
}

pub fn planner(config: Option<&Path>, args: &MonthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (engine, _) = build_engine(config, args)?;
    println!("{}", serde_json::to_string_pretty(engine.planner())?);
    Ok(())
}
