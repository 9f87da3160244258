// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fill the report JQL template with the date range and build the Jira search URL
// role: link building
// inputs: Jira org (atlassian.net subdomain), date range
// outputs: One percent-encoded issue search URL
// side_effects: None (pure; template normalization happens once, lazily)
// invariants:
// - The normalized template is single-spaced with no leading/trailing whitespace
// - The range bounds both the start-date clause and the created clause
// errors: None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use regex::Regex;

use crate::period::DateRange;
use crate::util;

/// Project key is intentionally fixed; the filter is purpose-built for one
/// board.
const PROJECT_KEY: &str = "RDC";

/// Issues where the current user drove the work (developer/assignee, by
/// start date) or filed it (reporter, by created date) within the range.
const JQL_TEMPLATE: &str = r#"
project = "RDC"
AND
(
    ("developer[user picker (single user)]" = currentUser() OR assignee = currentUser())
    AND "start date[date]" >= "{start}"
    AND "start date[date]" <= "{end}"
)
OR
(
    reporter IN (currentUser())
    AND created >= "{start}" AND created <= "{end}"
)
ORDER BY key DESC
"#;

static JQL_NORMALIZED: Lazy<String> = Lazy::new(|| {
  Regex::new(r"\s+")
    .expect("static whitespace regex")
    .replace_all(JQL_TEMPLATE, " ")
    .trim()
    .to_string()
});

pub fn issue_search_url(jira_org: &str, range: &DateRange) -> String {
  let jql = JQL_NORMALIZED
    .replace("{start}", &range.start_ymd())
    .replace("{end}", &range.end_ymd());

  format!(
    "https://{}.atlassian.net/jira/software/c/projects/{}/issues/?jql={}",
    jira_org,
    PROJECT_KEY,
    util::quote(&jql)
  )
}
