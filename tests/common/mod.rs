use std::path::PathBuf;

#[allow(dead_code)]
pub fn write_config(dir: &std::path::Path, json: &str) -> PathBuf {
  let path = dir.join("config.json");
  std::fs::write(&path, json).unwrap();
  path
}

/// Standard two-repo fixture config used by most tests.
#[allow(dead_code)]
pub fn fixture_config(dir: &std::path::Path) -> PathBuf {
  write_config(
    dir,
    r#"{
      "github_username": "bob",
      "github_org": "acme",
      "github_repos": ["a", "b"],
      "jira_org": "acme"
    }"#,
  )
}
