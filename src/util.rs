// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Percent-encoding for search queries and man page rendering
// role: utilities/helpers
// inputs: Query strings; clap CommandFactory
// outputs: Percent-encoded strings; troff man page text
// side_effects: None
// invariants:
// - quote leaves unreserved characters and '/' bare, everything else escaped
// errors: render_man_page bubbles IO errors from the troff renderer
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use clap::CommandFactory;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the unreserved characters (`A-Z a-z 0-9 - . _ ~`)
/// and `/`. GitHub and Jira both accept queries quoted this way.
const QUOTE_SET: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'.')
  .remove(b'_')
  .remove(b'~')
  .remove(b'/');

pub fn quote(s: &str) -> String {
  utf8_percent_encode(s, QUOTE_SET).to_string()
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
