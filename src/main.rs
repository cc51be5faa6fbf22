use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use weekpick::config::AppConfig;
use weekpick::label::parse_date;
use weekpick::{format_week_label, WeekConfig, WeekInterval};

fn main() -> Result<()> {
    // Logging to stderr so it doesn't interfere with the printed week
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cfg = AppConfig::load()?;

    let (shift, date_arg) = parse_args(&args);
    let date = match date_arg {
        Some(s) => parse_date(s).ok(),
        None    => Some(Local::now().date_naive()),
    };
    for line in week_lines(date, shift, cfg.week_config(), cfg.invalid_label()) {
        println!("{line}");
    }
    Ok(())
}

/// Week offset and optional DATE argument from the command line.
fn parse_args(args: &[String]) -> (i64, Option<&str>) {
    match args.get(1).map(|s| s.as_str()) {
        // ── wk next|prev [DATE] ───────────────────────────────────────────────
        Some("next") => (1, args.get(2).map(|s| s.as_str())),
        Some("prev") => (-1, args.get(2).map(|s| s.as_str())),
        // ── wk [DATE] ─────────────────────────────────────────────────────────
        other        => (0, other),
    }
}

/// Label line, then `start .. end` when there is a date to show.
fn week_lines(date: Option<NaiveDate>, shift: i64, config: WeekConfig, invalid_label: &str) -> Vec<String> {
    let week = date.map(|d| WeekInterval::containing(d, config).shift(shift));
    let mut lines = vec![format_week_label(week.map(|w| w.start()), config, invalid_label)];
    if let Some(w) = week {
        lines.push(format!("{} .. {}", w.start(), w.end()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn argument_forms() {
        assert_eq!(parse_args(&args(&["wk"])), (0, None));
        assert_eq!(parse_args(&args(&["wk", "2023-06-14"])), (0, Some("2023-06-14")));
        assert_eq!(parse_args(&args(&["wk", "next", "2023-06-14"])), (1, Some("2023-06-14")));
        assert_eq!(parse_args(&args(&["wk", "prev"])), (-1, None));
    }

    #[test]
    fn current_week_lines() {
        let lines = week_lines(Some(date(2023, 6, 14)), 0, WeekConfig::MONDAY, "N/A");
        assert_eq!(lines, ["Week of Jun 12th", "2023-06-12 .. 2023-06-18"]);
    }

    #[test]
    fn next_and_prev_cross_boundaries() {
        let lines = week_lines(Some(date(2023, 12, 28)), 1, WeekConfig::MONDAY, "N/A");
        assert_eq!(lines, ["Week of Jan 1st", "2024-01-01 .. 2024-01-07"]);
        let lines = week_lines(Some(date(2023, 6, 14)), -1, WeekConfig::SUNDAY, "N/A");
        assert_eq!(lines, ["Week of Jun 4th", "2023-06-04 .. 2023-06-10"]);
    }

    #[test]
    fn unparseable_date_prints_only_the_fallback() {
        let argv = args(&["wk", "next", "tomorrow"]);
        let (shift, arg) = parse_args(&argv);
        let date = arg.and_then(|s| parse_date(s).ok());
        assert_eq!(week_lines(date, shift, WeekConfig::MONDAY, "no week"), ["no week"]);
    }
}
