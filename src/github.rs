// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build GitHub PR search URLs for each tracked repository
// role: link building
// inputs: org, username, repo list, date range, date-field and reviewer flags
// outputs: Percent-encoded search URLs, one or two per repo, input order preserved
// side_effects: None (pure)
// invariants:
// - The date field is `created` unless merged-date filtering was requested
// - include_reviewed doubles the output; the reviewed URL differs only in the user filter
// errors: None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::period::DateRange;
use crate::util;

pub fn pr_search_urls(
  org: &str,
  username: &str,
  repos: &[String],
  range: &DateRange,
  use_merged_date: bool,
  include_reviewed: bool,
) -> Vec<String> {
  let date_field = if use_merged_date { "merged" } else { "created" };
  let per_repo = if include_reviewed { 2 } else { 1 };
  let mut urls = Vec::with_capacity(repos.len() * per_repo);

  for repo in repos {
    let base = format!("https://github.com/{}/{}/pulls", org, repo);
    urls.push(search_url(&base, date_field, range, "author", username));

    if include_reviewed {
      urls.push(search_url(&base, date_field, range, "reviewed-by", username));
    }
  }

  urls
}

fn search_url(base: &str, date_field: &str, range: &DateRange, user_filter: &str, username: &str) -> String {
  let query = format!(
    "is:pr {}:{}..{} {}:{}",
    date_field,
    range.start_ymd(),
    range.end_ymd(),
    user_filter,
    username
  );
  format!("{}?q={}", base, util::quote(&query))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::period::month_range;

  fn repos(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn builds_one_author_url_per_repo() {
    let range = month_range(2024, 5, 0).unwrap();
    let urls = pr_search_urls("acme", "bob", &repos(&["a", "b"]), &range, false, false);
    assert_eq!(
      urls,
      vec![
        "https://github.com/acme/a/pulls?q=is%3Apr%20created%3A2024-05-01..2024-05-31%20author%3Abob",
        "https://github.com/acme/b/pulls?q=is%3Apr%20created%3A2024-05-01..2024-05-31%20author%3Abob",
      ]
    );
  }

  #[test]
  fn merged_date_switches_the_date_field() {
    let range = month_range(2024, 5, 0).unwrap();
    let urls = pr_search_urls("acme", "bob", &repos(&["a"]), &range, true, false);
    assert!(urls[0].contains("merged%3A2024-05-01..2024-05-31"));
    assert!(!urls[0].contains("created"));
  }

  #[test]
  fn include_reviewed_doubles_the_urls() {
    let range = month_range(2024, 5, 0).unwrap();
    let urls = pr_search_urls("acme", "bob", &repos(&["a", "b"]), &range, false, true);
    assert_eq!(urls.len(), 4);
    assert!(urls[0].contains("author%3Abob"));
    assert!(urls[1].contains("reviewed-by%3Abob"));
    assert!(urls[1].starts_with("https://github.com/acme/a/pulls?q="));
    assert!(urls[2].contains("author%3Abob"));
    assert!(urls[3].starts_with("https://github.com/acme/b/pulls?q="));
  }

  #[test]
  fn no_repos_means_no_urls() {
    let range = month_range(2024, 5, 0).unwrap();
    assert!(pr_search_urls("acme", "bob", &[], &range, false, true).is_empty());
  }
}
