//! KinetiCandles CLI
//!
//! Loads an activity CSV, runs the view pipeline, and prints the resulting
//! candle records and pattern analysis as JSON.
//!
//! # Usage
//!
//! ```bash
//! kandle data.csv day
//! kandle data.csv week
//! kandle data.csv high-res --date 2023-05-03 --window 8 10 --interval 30
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::process::ExitCode;

use anyhow::{bail, Context};
use log::info;

use kineticandles::api::{
    detect_second_resolution, load_csv, render_view, CandleInterval, DayIndex, HourWindow,
    ViewConfig, ViewMode,
};

const USAGE: &str = "usage: kandle <data.csv> [day|week|high-res] \
[--date YYYY-MM-DD] [--window START END] [--interval SECONDS]";

struct Args {
    path: String,
    mode: ViewMode,
    date: Option<chrono::NaiveDate>,
    window: HourWindow,
    interval: CandleInterval,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(p) => p,
        None => bail!("{USAGE}"),
    };

    let mut mode = ViewMode::Day;
    let mut date = None;
    let mut window = HourWindow::default();
    let mut interval = CandleInterval::default();

    let mut positional_seen = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "day" | "week" | "high-res" if !positional_seen => {
                positional_seen = true;
                mode = match arg.as_str() {
                    "day" => ViewMode::Day,
                    "week" => ViewMode::Week,
                    _ => ViewMode::HighRes,
                };
            }
            "--date" => {
                let raw = args.next().context("--date requires a value")?;
                date = Some(
                    chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                        .with_context(|| format!("invalid date {raw:?}"))?,
                );
            }
            "--window" => {
                let start: u32 = args
                    .next()
                    .context("--window requires START and END hours")?
                    .parse()
                    .context("window start must be an hour number")?;
                let end: u32 = args
                    .next()
                    .context("--window requires START and END hours")?
                    .parse()
                    .context("window end must be an hour number")?;
                window = HourWindow::new(start, end)?;
            }
            "--interval" => {
                let seconds: u32 = args
                    .next()
                    .context("--interval requires a value in seconds")?
                    .parse()
                    .context("interval must be a positive integer")?;
                interval = CandleInterval::custom(seconds)
                    .context("interval must be a positive integer")?;
            }
            other => bail!("unrecognized argument {other:?}\n{USAGE}"),
        }
    }

    Ok(Args {
        path,
        mode,
        date,
        window,
        interval,
    })
}

fn run() -> anyhow::Result<()> {
    let args = parse_args()?;

    let series = load_csv(&args.path)?;
    let second_level = detect_second_resolution(&series);
    info!(
        "{} samples across {} days ({} resolution)",
        series.len(),
        series.distinct_dates().len(),
        if second_level { "second-level" } else { "minute-level" }
    );

    let mut day_index = DayIndex::from_series(&series);
    if let Some(date) = args.date {
        let position = day_index
            .dates()
            .iter()
            .position(|d| *d == date)
            .with_context(|| format!("{date} is not present in the data"))?;
        day_index.select(position);
    }

    let config = ViewConfig {
        mode: args.mode,
        window: args.window,
        interval: args.interval,
    };
    let view = render_view(&series, &day_index, &config);
    if view.is_empty() {
        info!("no data for the requested view");
    }

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
