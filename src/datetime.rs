//! Calendar helpers for the weekly training view
//!
//! Everything here works on local wall-clock values (`NaiveDate`,
//! `NaiveDateTime`, or anything else implementing `Datelike`/`Timelike`).
//! Converting an instant into the local view is the caller's job, see
//! [`crate::week::Clock`].

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Formatting
/// ---------------------------------------------------------------------------

/// `DD.MM.YYYY`, or an empty string when there is no date.
pub fn format_date<D: Datelike>(date: Option<&D>) -> String {
  match date {
    Some(d) => format!("{:02}.{:02}.{:04}", d.day(), d.month(), d.year()),
    None => String::new(),
  }
}

/// `HH:MM` on a 24-hour clock, or an empty string when there is no time.
pub fn format_time<T: Timelike>(time: Option<&T>) -> String {
  match time {
    Some(t) => format!("{:02}:{:02}", t.hour(), t.minute()),
    None => String::new(),
  }
}

/// Formats a duration as `"1h 30min"`.
///
/// The hours part is only shown when non-zero. The minutes part is shown
/// when non-zero or when nothing else was written, so a whole number of
/// hours keeps its trailing space (`60 -> "1h "`).
pub fn minutes_to_hours_and_minutes(total_minutes: u32) -> String {
  let hours = total_minutes / 60;
  let minutes = total_minutes % 60;

  let mut result = String::new();
  if hours > 0 {
    result.push_str(&format!("{}h ", hours));
  }
  if minutes > 0 || result.is_empty() {
    result.push_str(&format!("{}min", minutes));
  }
  result
}

pub fn day_name(weekday: Weekday) -> &'static str {
  match weekday {
    Weekday::Mon => "Monday",
    Weekday::Tue => "Tuesday",
    Weekday::Wed => "Wednesday",
    Weekday::Thu => "Thursday",
    Weekday::Fri => "Friday",
    Weekday::Sat => "Saturday",
    Weekday::Sun => "Sunday",
  }
}

/// ---------------------------------------------------------------------------
/// Week boundaries
/// ---------------------------------------------------------------------------

/// Monday 00:00:00.000 through Sunday 23:59:59.999 of one calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyWindow {
  pub week_start: NaiveDateTime,
  pub week_end: NaiveDateTime,
}

impl WeeklyWindow {
  /// True calendar containment, unlike [`is_this_in_week`].
  pub fn contains(&self, at: &NaiveDateTime) -> bool {
    self.week_start <= *at && *at <= self.week_end
  }
}

pub fn week_window<D: Datelike>(reference: &D) -> WeeklyWindow {
  let week_start = monday_of(reference).and_time(NaiveTime::MIN);
  let week_end = week_start + Duration::days(7) - Duration::milliseconds(1);
  WeeklyWindow {
    week_start,
    week_end,
  }
}

/// Monday..Sunday of the week containing `reference`, each at midnight.
pub fn dates_of_week<D: Datelike>(reference: &D) -> [NaiveDateTime; 7] {
  let monday = monday_of(reference).and_time(NaiveTime::MIN);
  std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Monday..Sunday of the current local week, each at midnight.
pub fn dates_this_week() -> [NaiveDateTime; 7] {
  dates_of_week(&Local::now().date_naive())
}

/// Date of `weekday` within the week containing `reference`.
pub fn date_for_day_of_week<D: Datelike>(reference: &D, weekday: Weekday) -> NaiveDate {
  monday_of(reference) + Duration::days(weekday.num_days_from_monday() as i64)
}

/// Day-of-month week check.
///
/// `date` is in the week when its day of month lies in
/// `[first, first + 6]`, where `first` is the reference's day of month minus
/// its distance from Monday. Only the day of month is compared, so dates in
/// a week spanning two months, or in a different month altogether, can be
/// misclassified. Use [`WeeklyWindow::contains`] for calendar containment.
pub fn is_this_in_week<R: Datelike, D: Datelike>(reference: &R, date: &D) -> bool {
  let first = reference.day() as i64 - reference.weekday().num_days_from_monday() as i64;
  let last = first + 6;
  let day = date.day() as i64;

  first <= day && day <= last
}

/// [`is_this_in_week`] against today's local date. Reads the system clock;
/// [`crate::week::WeekDetails::is_in_this_week`] takes an injected clock.
pub fn is_this_in_this_week<D: Datelike>(date: &D) -> bool {
  is_this_in_week(&Local::now().date_naive(), date)
}

fn monday_of<D: Datelike>(reference: &D) -> NaiveDate {
  // Every Datelike carries a valid proleptic Gregorian day number.
  let date = NaiveDate::from_num_days_from_ce_opt(reference.num_days_from_ce())
    .unwrap_or(NaiveDate::MIN);
  date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    ymd(y, m, d).and_hms_opt(h, min, 0).unwrap()
  }

  #[test]
  fn test_format_date_zero_padded() {
    assert_eq!(format_date(Some(&ymd(2024, 2, 5))), "05.02.2024");
    assert_eq!(format_date(Some(&ymd_hm(2023, 12, 31, 23, 59))), "31.12.2023");
    assert_eq!(format_date(Some(&ymd(987, 1, 1))), "01.01.0987");
  }

  #[test]
  fn test_format_date_and_time_absent() {
    assert_eq!(format_date::<NaiveDate>(None), "");
    assert_eq!(format_time::<NaiveDateTime>(None), "");
  }

  #[test]
  fn test_format_time_24h() {
    assert_eq!(format_time(Some(&ymd_hm(2024, 2, 12, 7, 5))), "07:05");
    assert_eq!(format_time(Some(&ymd_hm(2024, 2, 12, 18, 45))), "18:45");
    assert_eq!(format_time(Some(&ymd_hm(2024, 2, 12, 0, 0))), "00:00");
  }

  #[test]
  fn test_minutes_to_hours_and_minutes() {
    assert_eq!(minutes_to_hours_and_minutes(0), "0min");
    assert_eq!(minutes_to_hours_and_minutes(45), "45min");
    assert_eq!(minutes_to_hours_and_minutes(60), "1h ");
    assert_eq!(minutes_to_hours_and_minutes(90), "1h 30min");
    assert_eq!(minutes_to_hours_and_minutes(125), "2h 5min");
  }

  #[test]
  fn test_per_day_matrix_all_in_given_week() {
    // Arrange: Monday 2024-02-12 12:00
    let monday = ymd_hm(2024, 2, 12, 12, 0);

    // Assert: every day of that week is in the week of every other day
    for r in 0..7 {
      let reference = monday + Duration::days(r);
      for d in 0..7 {
        let day = monday + Duration::days(d);
        assert!(
          is_this_in_week(&reference, &day),
          "{} should be in the week of {}",
          day,
          reference
        );
      }
    }
  }

  #[test]
  fn test_neighbouring_weeks_not_in_week() {
    let reference = ymd(2024, 2, 14);
    assert!(!is_this_in_week(&reference, &ymd(2024, 2, 11)));
    assert!(!is_this_in_week(&reference, &ymd(2024, 2, 19)));
  }

  #[test]
  fn test_day_of_month_check_across_month_boundary() {
    // Thursday 2024-02-01: its Monday is 2024-01-29, but only days -2..=4
    // of any month are accepted.
    let reference = ymd(2024, 2, 1);
    assert!(!is_this_in_week(&reference, &ymd(2024, 1, 29)));
    assert!(is_this_in_week(&reference, &ymd(2024, 2, 4)));

    // Same day-of-month in another month is accepted.
    assert!(is_this_in_week(&ymd(2024, 2, 12), &ymd(2024, 3, 13)));

    // The calendar window gets both right.
    let window = week_window(&reference);
    assert!(window.contains(&ymd_hm(2024, 1, 29, 8, 0)));
    assert!(!week_window(&ymd(2024, 2, 12)).contains(&ymd_hm(2024, 3, 13, 8, 0)));
  }

  #[test]
  fn test_week_window_bounds() {
    // Sunday belongs to the week that started the previous Monday
    let window = week_window(&ymd_hm(2024, 2, 18, 21, 30));

    assert_eq!(window.week_start, ymd_hm(2024, 2, 12, 0, 0));
    assert_eq!(window.week_start.weekday(), Weekday::Mon);
    assert_eq!(
      window.week_end,
      ymd(2024, 2, 18).and_hms_milli_opt(23, 59, 59, 999).unwrap()
    );
    assert!(window.contains(&window.week_start));
    assert!(window.contains(&window.week_end));
    assert!(!window.contains(&(window.week_end + Duration::milliseconds(1))));
  }

  #[test]
  fn test_dates_of_week_monday_first_one_day_apart() {
    let dates = dates_of_week(&ymd(2024, 2, 29));

    assert_eq!(dates[0], ymd_hm(2024, 2, 26, 0, 0));
    assert_eq!(dates[6], ymd_hm(2024, 3, 3, 0, 0));
    for pair in dates.windows(2) {
      assert_eq!(pair[1] - pair[0], Duration::days(1));
    }
  }

  #[test]
  fn test_dates_this_week() {
    let today = Local::now().date_naive();
    let dates = dates_this_week();

    assert_eq!(dates.len(), 7);
    assert_eq!(dates[0].weekday(), Weekday::Mon);
    assert!(dates[0].date() <= today);
    assert!(today <= dates[6].date());
    for pair in dates.windows(2) {
      assert_eq!(pair[1] - pair[0], Duration::days(1));
    }
  }

  #[test]
  fn test_is_this_in_this_week_today_and_neighbouring_weeks() {
    // A day exactly one week away never passes the day-of-month check,
    // whether or not it crosses a month boundary.
    let today = Local::now().date_naive();

    assert!(is_this_in_this_week(&today));
    assert!(!is_this_in_this_week(&(today + Duration::days(7))));
    assert!(!is_this_in_this_week(&(today - Duration::days(7))));
  }

  #[test]
  fn test_one_week_away_rejected_for_every_reference_in_a_year() {
    let mut reference = ymd(2024, 1, 1);
    while reference.year() == 2024 {
      assert!(is_this_in_week(&reference, &reference));
      assert!(!is_this_in_week(&reference, &(reference + Duration::days(7))));
      assert!(!is_this_in_week(&reference, &(reference - Duration::days(7))));
      reference += Duration::days(1);
    }
  }

  #[test]
  fn test_date_for_day_of_week() {
    let reference = ymd(2024, 2, 14);
    assert_eq!(date_for_day_of_week(&reference, Weekday::Mon), ymd(2024, 2, 12));
    assert_eq!(date_for_day_of_week(&reference, Weekday::Sun), ymd(2024, 2, 18));
    assert_eq!(day_name(Weekday::Wed), "Wednesday");
  }
}
