//! This week's training details
//!
//! `WeekDetails` owns the cached list shown on the home view together with
//! its aggregate distance. One instance per session; mutations replace the
//! whole snapshot so the list and the total never disagree.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::datetime::{is_this_in_week, week_window};
use crate::models::TrainingDetail;

/// ---------------------------------------------------------------------------
/// Clock
/// ---------------------------------------------------------------------------

/// Source of "now" and of the local wall-clock view of an instant.
pub trait Clock {
  fn now_local(&self) -> NaiveDateTime;
  fn to_local(&self, instant: &DateTime<Utc>) -> NaiveDateTime;
}

/// The system clock in the machine's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now_local(&self) -> NaiveDateTime {
    Local::now().naive_local()
  }

  fn to_local(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&Local).naive_local()
  }
}

/// A frozen clock at a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
  pub now: NaiveDateTime,
  pub offset: FixedOffset,
}

impl FixedClock {
  pub fn utc(now: NaiveDateTime) -> Self {
    Self {
      now,
      offset: Utc.fix(),
    }
  }
}

impl Clock for FixedClock {
  fn now_local(&self) -> NaiveDateTime {
    self.now
  }

  fn to_local(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&self.offset).naive_local()
  }
}

/// ---------------------------------------------------------------------------
/// Week membership
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeekMembership {
  /// Day-of-month comparison, see [`crate::datetime::is_this_in_week`]
  #[default]
  DayOfMonth,
  /// Monday 00:00 through Sunday 23:59:59.999
  Calendar,
}

impl WeekMembership {
  pub fn contains(&self, today: &NaiveDateTime, at: &NaiveDateTime) -> bool {
    match self {
      WeekMembership::DayOfMonth => is_this_in_week(today, at),
      WeekMembership::Calendar => week_window(today).contains(at),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      WeekMembership::DayOfMonth => "day-of-month",
      WeekMembership::Calendar => "calendar",
    }
  }
}

impl FromStr for WeekMembership {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "day-of-month" => Ok(WeekMembership::DayOfMonth),
      "calendar" => Ok(WeekMembership::Calendar),
      other => Err(format!("Unknown week membership: {}", other)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Snapshot and service
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSnapshot {
  /// Ascending by start; equal starts keep insertion order
  pub details: Vec<TrainingDetail>,
  pub total_distance: u64,
}

impl WeekSnapshot {
  fn from_details(mut details: Vec<TrainingDetail>) -> Self {
    // sort_by is stable
    details.sort_by(|a, b| a.start.cmp(&b.start));
    let total_distance = details
      .iter()
      .fold(0u64, |acc, d| acc.saturating_add(d.total_distance));
    Self {
      details,
      total_distance,
    }
  }
}

pub struct WeekDetails<C: Clock = SystemClock> {
  clock: C,
  membership: WeekMembership,
  snapshot: WeekSnapshot,
}

impl<C: Clock> WeekDetails<C> {
  pub fn new(clock: C) -> Self {
    Self::with_details(clock, Vec::new())
  }

  /// Seed from the current-week fetch done at start-up
  pub fn with_details(clock: C, details: Vec<TrainingDetail>) -> Self {
    let snapshot = WeekSnapshot::from_details(details);
    tracing::debug!(
      count = snapshot.details.len(),
      total_distance = snapshot.total_distance,
      "Loaded this week's training details"
    );
    Self {
      clock,
      membership: WeekMembership::default(),
      snapshot,
    }
  }

  pub fn with_membership(mut self, membership: WeekMembership) -> Self {
    self.membership = membership;
    self
  }

  pub fn membership(&self) -> WeekMembership {
    self.membership
  }

  pub fn snapshot(&self) -> &WeekSnapshot {
    &self.snapshot
  }

  pub fn details(&self) -> &[TrainingDetail] {
    &self.snapshot.details
  }

  pub fn total_distance(&self) -> u64 {
    self.snapshot.total_distance
  }

  /// Whether `start` falls in the current week under the configured rule
  pub fn is_in_this_week(&self, start: &DateTime<Utc>) -> bool {
    let today = self.clock.now_local();
    let local = self.clock.to_local(start);
    self.membership.contains(&today, &local)
  }

  /// Add a freshly created training. Ignored unless it starts this week.
  pub fn add_training_detail(&mut self, detail: TrainingDetail) {
    if !self.is_in_this_week(&detail.start) {
      tracing::debug!(id = %detail.id, start = %detail.start, "Training not in this week, skipping");
      return;
    }

    let mut details = self.snapshot.details.clone();
    details.push(detail);
    self.replace(details);
  }

  /// Drop a training by id. Unknown ids are ignored.
  pub fn remove_training_detail(&mut self, id: &str) {
    let details = self
      .snapshot
      .details
      .iter()
      .filter(|d| d.id != id)
      .cloned()
      .collect();
    self.replace(details);
  }

  /// Apply an edited training.
  ///
  /// A training moved out of this week is removed. Otherwise the entry with
  /// the same id is replaced, or appended if it was not cached yet.
  pub fn update_training_detail(&mut self, detail: TrainingDetail) {
    if !self.is_in_this_week(&detail.start) {
      self.remove_training_detail(&detail.id);
      return;
    }

    let mut details = self.snapshot.details.clone();
    match details.iter_mut().find(|d| d.id == detail.id) {
      Some(existing) => *existing = detail,
      None => details.push(detail),
    }
    self.replace(details);
  }

  fn replace(&mut self, details: Vec<TrainingDetail>) {
    self.snapshot = WeekSnapshot::from_details(details);
    tracing::debug!(
      count = self.snapshot.details.len(),
      total_distance = self.snapshot.total_distance,
      "Week snapshot updated"
    );
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
