//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// daypair - two daily schedules, side by side
#[derive(Debug, Parser)]
#[command(name = "daypair")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Day to display, YYYY-MM-DD (defaults to today)
    #[arg(long, short)]
    pub date: Option<NaiveDate>,

    /// Shift the displayed day by N days (-1 for yesterday, 1 for tomorrow)
    #[arg(long, short, default_value = "0", allow_negative_numbers = true)]
    pub offset: i64,

    /// Calendar id for the left column (overrides config)
    #[arg(long)]
    pub left: Option<String>,

    /// Calendar id for the right column (overrides config)
    #[arg(long)]
    pub right: Option<String>,

    /// Path to configuration file
    #[arg(long, short, env = "DAYPAIR_CONFIG")]
    pub config: Option<PathBuf>,

    /// List available calendars and exit
    #[arg(long)]
    pub list_calendars: bool,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_and_calendars() {
        let cli = Cli::try_parse_from([
            "daypair",
            "--date",
            "2025-03-12",
            "--left",
            "work@example.com",
            "--right",
            "primary",
        ])
        .unwrap();

        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 3, 12));
        assert_eq!(cli.left.as_deref(), Some("work@example.com"));
        assert_eq!(cli.right.as_deref(), Some("primary"));
        assert!(!cli.list_calendars);
        assert!(!cli.debug);
    }

    #[test]
    fn rejects_bad_date() {
        let result = Cli::try_parse_from(["daypair", "--date", "yesterday"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_negative_offset() {
        let cli = Cli::try_parse_from(["daypair", "--offset", "-1"]).unwrap();
        assert_eq!(cli.offset, -1);
    }

    #[test]
    fn defaults_are_empty() {
        let cli = Cli::try_parse_from(["daypair"]).unwrap();
        assert!(cli.date.is_none());
        assert_eq!(cli.offset, 0);
        assert!(cli.left.is_none());
        assert!(cli.right.is_none());
        assert!(cli.config.is_none());
    }
}
