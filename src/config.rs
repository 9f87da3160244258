// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Load, validate, and persist the tool configuration; interactive first-run setup
// role: configuration
// inputs: Optional explicit config path; ./config.json; user config dir; stdin on first run
// outputs: Config; new config.json written on first run
// side_effects: Reads/writes the config file; prompts on stdin/stdout when no config exists
// invariants:
// - A well-formed config file with missing keys is fatal; it is never silently replaced
// - A missing, unreadable, or unparseable config file is not fatal; it triggers interactive setup
// - Prompted values are whitespace-trimmed; the repo list drops empty segments
// errors: Read/parse failures carry the file path via context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file name, both for the local directory and the user config dir.
const CONFIG_FILE_NAME: &str = "config.json";

/// Subdirectory of the user config dir holding our file.
const USER_CONFIG_DIR: &str = "monthly-helper";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  pub github_username: String,
  pub github_org: String,
  pub github_repos: Vec<String>,
  pub jira_org: String,
}

/// Outcome of a config load attempt. Exactly one dispatch site in
/// `load_or_create` decides what each case means for the run.
pub enum ConfigLoadResult {
  Found(Config),
  NotFound,
  Malformed(anyhow::Error),
  Unreadable(anyhow::Error),
}

/// Search order: `./config.json`, then the user config dir.
fn find_config_file() -> Option<PathBuf> {
  let local = PathBuf::from(CONFIG_FILE_NAME);
  if local.exists() {
    return Some(local);
  }

  let user = user_config_path().ok()?;
  if user.exists() {
    return Some(user);
  }

  None
}

fn user_config_path() -> Result<PathBuf> {
  dirs::config_dir()
    .map(|d| d.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    .context("could not determine the user config directory")
}

pub fn load(path: &Path) -> ConfigLoadResult {
  let raw = match std::fs::read_to_string(path) {
    Ok(raw) => raw,
    Err(err) if err.kind() == io::ErrorKind::NotFound => return ConfigLoadResult::NotFound,
    Err(err) => {
      let err = anyhow::Error::new(err).context(format!("reading config file {}", path.display()));
      return ConfigLoadResult::Unreadable(err);
    }
  };

  match serde_json::from_str::<Config>(&raw) {
    Ok(cfg) => ConfigLoadResult::Found(cfg),
    // Broken JSON reads like any other unreadable file: warn and re-run
    // setup. Only a well-formed file with wrong contents (missing keys)
    // is fatal.
    Err(err) if err.is_syntax() || err.is_eof() => {
      let err = anyhow::Error::new(err).context(format!("parsing config file {}", path.display()));
      ConfigLoadResult::Unreadable(err)
    }
    Err(err) => {
      let err = anyhow::Error::new(err).context(format!("parsing config file {}", path.display()));
      ConfigLoadResult::Malformed(err)
    }
  }
}

/// Load the config, or collect one interactively and persist it.
///
/// Missing file: not an error, runs first-time setup. Well-formed file with
/// missing keys: fatal, so a wrong edit never degrades into half-configured
/// behavior. Any other read or parse failure: reported, then treated like a
/// first run.
pub fn load_or_create(explicit: Option<&Path>) -> Result<Config> {
  let path = match explicit {
    Some(p) => p.to_path_buf(),
    None => match find_config_file() {
      Some(p) => p,
      None => user_config_path()?,
    },
  };

  match load(&path) {
    ConfigLoadResult::Found(cfg) => Ok(cfg),
    ConfigLoadResult::Malformed(err) => Err(err.context(format!(
      "invalid config file {}; fix it or delete it to re-run setup",
      path.display()
    ))),
    ConfigLoadResult::NotFound => {
      println!("No config file found. Let's create one.");
      println!("NOTE: you can always edit {} by hand later.", path.display());
      println!();
      let cfg = prompt_for_config(&mut io::stdin().lock())?;
      save(&cfg, &path)?;
      Ok(cfg)
    }
    ConfigLoadResult::Unreadable(err) => {
      eprintln!("warning: {:#}; falling back to setup", err);
      let cfg = prompt_for_config(&mut io::stdin().lock())?;
      save(&cfg, &path)?;
      Ok(cfg)
    }
  }
}

pub fn save(cfg: &Config, path: &Path) -> Result<()> {
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("creating config directory {}", parent.display()))?;
    }
  }

  let pretty = serde_json::to_string_pretty(cfg)?;
  std::fs::write(path, pretty + "\n")
    .with_context(|| format!("writing config file {}", path.display()))
}

fn prompt_line<R: BufRead>(input: &mut R, label: &str) -> Result<String> {
  print!("{}: ", label);
  io::stdout().flush()?;

  let mut line = String::new();
  input.read_line(&mut line).context("reading setup input")?;
  Ok(line.trim().to_string())
}

fn prompt_for_config<R: BufRead>(input: &mut R) -> Result<Config> {
  let jira_org = prompt_line(input, "Enter your Jira organization (subdomain of atlassian.net)")?;
  let github_org = prompt_line(input, "Enter your GitHub organization")?;
  let github_username = prompt_line(input, "Enter your GitHub username")?;
  println!("Enter the GitHub repos you want to track, comma-separated.");
  let repo_str = prompt_line(input, "Repos")?;

  Ok(Config {
    github_username,
    github_org,
    github_repos: split_repo_list(&repo_str),
    jira_org,
  })
}

/// Split a comma-separated repo list, trimming entries and dropping empties.
pub fn split_repo_list(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write_tmp(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let td = tempfile::TempDir::new().unwrap();
    let path = td.path().join("config.json");
    std::fs::write(&path, contents).unwrap();
    (td, path)
  }

  #[test]
  fn load_round_trips_a_full_config() {
    let (_td, path) = write_tmp(
      r#"{
        "github_username": "bob",
        "github_org": "acme",
        "github_repos": ["a", "b"],
        "jira_org": "acme"
      }"#,
    );
    match load(&path) {
      ConfigLoadResult::Found(cfg) => {
        assert_eq!(cfg.github_username, "bob");
        assert_eq!(cfg.github_repos, vec!["a", "b"]);
      }
      _ => panic!("expected Found"),
    }
  }

  #[test]
  fn missing_key_is_malformed() {
    let (_td, path) = write_tmp(r#"{"github_username": "bob", "github_org": "acme", "github_repos": []}"#);
    match load(&path) {
      ConfigLoadResult::Malformed(err) => {
        assert!(format!("{:#}", err).contains("jira_org"));
      }
      _ => panic!("expected Malformed"),
    }
  }

  #[test]
  fn invalid_json_is_unreadable_not_fatal() {
    let (_td, path) = write_tmp("not json at all");
    assert!(matches!(load(&path), ConfigLoadResult::Unreadable(_)));
  }

  #[test]
  fn truncated_json_is_unreadable_not_fatal() {
    let (_td, path) = write_tmp(r#"{"github_username": "bob", "gith"#);
    assert!(matches!(load(&path), ConfigLoadResult::Unreadable(_)));
  }

  #[test]
  fn missing_file_is_not_found() {
    let td = tempfile::TempDir::new().unwrap();
    let path = td.path().join("nope.json");
    assert!(matches!(load(&path), ConfigLoadResult::NotFound));
  }

  #[test]
  fn repo_list_splits_and_trims() {
    assert_eq!(split_repo_list(" a , b,c "), vec!["a", "b", "c"]);
    assert_eq!(split_repo_list("solo"), vec!["solo"]);
    assert!(split_repo_list("  , ,").is_empty());
  }

  #[test]
  fn prompted_config_trims_every_field() {
    let mut input = io::Cursor::new("  acme-jira  \n acme \n  bob\nrepo-a, repo-b\n");
    let cfg = prompt_for_config(&mut input).unwrap();
    assert_eq!(cfg.jira_org, "acme-jira");
    assert_eq!(cfg.github_org, "acme");
    assert_eq!(cfg.github_username, "bob");
    assert_eq!(cfg.github_repos, vec!["repo-a", "repo-b"]);
  }

  #[test]
  fn save_writes_pretty_json_with_exact_keys() {
    let td = tempfile::TempDir::new().unwrap();
    let path = td.path().join("sub").join("config.json");
    let cfg = Config {
      github_username: "bob".into(),
      github_org: "acme".into(),
      github_repos: vec!["a".into()],
      jira_org: "acme".into(),
    };
    save(&cfg, &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"github_username\""));
    assert!(raw.contains('\n'), "expected pretty output");
    assert!(matches!(load(&path), ConfigLoadResult::Found(_)));
  }
}
