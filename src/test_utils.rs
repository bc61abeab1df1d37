//! Test utilities and fixtures
//!
//! Factories for training details and sets, plus a clock frozen in the
//! middle of a known week (Wednesday 2024-02-14 12:00 UTC).

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Group, SetList, Training, TrainingDetail, TrainingSet};
use crate::week::FixedClock;

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(y, m, d, h, min, 0)
    .single()
    .expect("valid UTC timestamp")
}

/// Clock frozen at Wednesday 2024-02-14 12:00, offset UTC
pub fn wednesday_clock() -> FixedClock {
  FixedClock::utc(at(2024, 2, 14, 12, 0).naive_utc())
}

pub fn make_detail(id: &str, start: DateTime<Utc>, total_distance: u64) -> TrainingDetail {
  TrainingDetail {
    id: id.to_string(),
    start,
    duration_min: 60,
    total_distance,
  }
}

pub fn make_set(repeat: u32, distance_meters: u32, group: Option<Group>) -> TrainingSet {
  TrainingSet::new(repeat, distance_meters, group)
}

/// A training with its sets numbered and total distance computed
pub fn make_training(sets: Vec<TrainingSet>) -> Training {
  let mut training = Training {
    id: "training-1".to_string(),
    start: at(2024, 2, 14, 7, 0),
    duration_min: 90,
    total_distance: 0,
    sets,
  };
  training.renumber();
  training
}

/// JSON body of the current-week endpoint
pub fn current_week_body(details: &[TrainingDetail]) -> String {
  serde_json::json!({ "details": details }).to_string()
}
