/// Hand a URL to the OS default-browser opener.
///
/// Failures (no browser, headless host) are reported and dropped; there is
/// no useful recovery here and the remaining links should still open.
pub fn open_url(url: &str) {
  if let Err(err) = open::that(url) {
    eprintln!("warning: could not open {}: {}", url, err);
  }
}
