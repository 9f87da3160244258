use chrono::{Datelike, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "monthly-helper",
    version,
    about = "Open GitHub PR and Jira searches for a monthly activity report",
    long_about = None
)]
pub struct Cli {
  /// Month of the report, 1-12 (default: the month before the current one)
  #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
  pub month: Option<u32>,

  /// Number of days to look beyond both ends of the month
  #[arg(short = 'b', long, default_value_t = 0)]
  pub day_buffer: u32,

  /// Filter PRs by merged date instead of created date
  #[arg(long, alias = "md")]
  pub use_merged_date: bool,

  /// Also open PR searches for the reviews you did
  #[arg(long)]
  pub include_reviewed: bool,

  /// Don't open the Jira issues page
  #[arg(long)]
  pub skip_jira: bool,

  /// Don't open the GitHub PR pages
  #[arg(long)]
  pub skip_github: bool,

  /// Print the URLs instead of opening a browser
  #[arg(long)]
  pub dry_run: bool,

  /// Config file path (default: ./config.json, then the user config dir)
  #[arg(long)]
  pub config: Option<PathBuf>,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override "today" as YYYY-MM-DD (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub year: i32,
  pub month: u32,
  pub day_buffer: u32,
  pub use_merged_date: bool,
  pub include_reviewed: bool,
  pub skip_jira: bool,
  pub skip_github: bool,
  pub dry_run: bool,
  pub config_path: Option<PathBuf>,
}

/// Parse a `--now-override` value (`%Y-%m-%d`) into a date.
pub fn parse_today_override(s: Option<&str>) -> Option<NaiveDate> {
  s.and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Resolve the CLI into an explicit (year, month) plus flags.
///
/// An explicit `--month` always means that month of the current year, even
/// when it lies ahead of today. The default is the previous month, rolling
/// January back to December of the previous year.
pub fn normalize(cli: Cli, today: NaiveDate) -> EffectiveConfig {
  let (year, month) = match cli.month {
    Some(m) => (today.year(), m),
    None => match today.month() {
      1 => (today.year() - 1, 12),
      m => (today.year(), m - 1),
    },
  };

  EffectiveConfig {
    year,
    month,
    day_buffer: cli.day_buffer,
    use_merged_date: cli.use_merged_date,
    include_reviewed: cli.include_reviewed,
    skip_jira: cli.skip_jira,
    skip_github: cli.skip_github,
    dry_run: cli.dry_run,
    config_path: cli.config,
  }
}
