use anyhow::Result;
use chrono::Local;
use clap::Parser;

mod browser;
mod cli;
mod config;
mod github;
mod jira;
mod period;
mod util;

use crate::cli::{normalize, Cli};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI against today's date
  let today = cli::parse_today_override(cli.now_override.as_deref())
    .unwrap_or_else(|| Local::now().date_naive());
  let opts = normalize(cli, today);

  // Phase 2: config (interactive setup on first run)
  let cfg = config::load_or_create(opts.config_path.as_deref())?;

  // Phase 3: compute the report range
  let range = period::month_range(opts.year, opts.month, i64::from(opts.day_buffer))?;

  println!(
    "Opening monthly report resources for {}...",
    period::month_label(opts.year, opts.month)
  );

  // Phase 4: build links and hand them to the browser (or stdout)
  let emit = |url: &str| {
    if opts.dry_run {
      println!("{}", url);
    } else {
      browser::open_url(url);
    }
  };

  if !opts.skip_github && !cfg.github_org.is_empty() && !cfg.github_username.is_empty() {
    if !cfg.github_repos.is_empty() {
      println!("Opening PRs for");
      println!("{}", cfg.github_repos.join("\n"));
    }
    let urls = github::pr_search_urls(
      &cfg.github_org,
      &cfg.github_username,
      &cfg.github_repos,
      &range,
      opts.use_merged_date,
      opts.include_reviewed,
    );
    for url in &urls {
      emit(url);
    }
  }

  if !opts.skip_jira && !cfg.jira_org.is_empty() {
    emit(&jira::issue_search_url(&cfg.jira_org, &range));
  }

  Ok(())
}
