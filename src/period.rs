use anyhow::{bail, Context, Result};
use chrono::{Duration, NaiveDate};

/// Inclusive date range of the report. Always `start <= end`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DateRange {
  pub start: NaiveDate,
  pub end: NaiveDate,
}

impl DateRange {
  pub fn start_ymd(&self) -> String {
    self.start.format("%Y-%m-%d").to_string()
  }

  pub fn end_ymd(&self) -> String {
    self.end.format("%Y-%m-%d").to_string()
  }
}

/// Inclusive range covering `month` of `year`, widened by `day_buffer` days
/// on both ends.
///
/// The end date is computed as the first of the following month minus one
/// day, which keeps 28/29/30/31-day months honest; December rolls the
/// "following month" into January of the next year.
pub fn month_range(year: i32, month: u32, day_buffer: i64) -> Result<DateRange> {
  if !(1..=12).contains(&month) {
    bail!("invalid month {}, expected 1-12", month);
  }

  let start = NaiveDate::from_ymd_opt(year, month, 1)
    .with_context(|| format!("no first day for {}-{:02}", year, month))?;

  let (next_y, next_m) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
  let end = NaiveDate::from_ymd_opt(next_y, next_m, 1)
    .and_then(|first_next| first_next.pred_opt())
    .with_context(|| format!("no last day for {}-{:02}", year, month))?;

  let start = start
    .checked_sub_signed(Duration::days(day_buffer))
    .with_context(|| format!("day buffer {} pushes the start date out of range", day_buffer))?;
  let end = end
    .checked_add_signed(Duration::days(day_buffer))
    .with_context(|| format!("day buffer {} pushes the end date out of range", day_buffer))?;

  Ok(DateRange { start, end })
}

/// Human label for the announcement line, e.g. "May 2024".
pub fn month_label(year: i32, month: u32) -> String {
  match NaiveDate::from_ymd_opt(year, month, 1) {
    Some(d) => d.format("%B %Y").to_string(),
    None => format!("{}-{:02}", year, month),
  }
}
