use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only summary of a training, as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDetail {
  pub id: String,
  pub start: DateTime<Utc>,
  pub duration_min: u32,
  pub total_distance: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
  Sprint,
  Middle,
  Long,
  Mono,
  Bifi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSet {
  pub set_order: u32,
  pub repeat: u32,
  pub distance_meters: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group: Option<Group>,
  /// Always `repeat * distance_meters`
  pub total_distance: u64,
}

impl TrainingSet {
  pub fn new(repeat: u32, distance_meters: u32, group: Option<Group>) -> Self {
    Self {
      set_order: 0,
      repeat,
      distance_meters,
      group,
      total_distance: repeat_distance(repeat, distance_meters),
    }
  }

  pub fn set_repeat(&mut self, repeat: u32) {
    self.repeat = repeat;
    self.total_distance = repeat_distance(self.repeat, self.distance_meters);
  }

  pub fn set_distance(&mut self, distance_meters: u32) {
    self.distance_meters = distance_meters;
    self.total_distance = repeat_distance(self.repeat, self.distance_meters);
  }
}

// Widened so u32 operands cannot overflow
fn repeat_distance(repeat: u32, distance_meters: u32) -> u64 {
  repeat as u64 * distance_meters as u64
}

/// A training being created (no id yet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTraining {
  pub start: DateTime<Utc>,
  pub duration_min: u32,
  pub total_distance: u64,
  pub sets: Vec<TrainingSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
  pub id: String,
  pub start: DateTime<Utc>,
  pub duration_min: u32,
  pub total_distance: u64,
  pub sets: Vec<TrainingSet>,
}

/// ---------------------------------------------------------------------------
/// Set list editing
/// ---------------------------------------------------------------------------

/// Shared editing surface of `NewTraining` and `Training`.
///
/// Every helper leaves `set_order` equal to each set's index and
/// `total_distance` equal to the sum of the sets' totals.
pub trait SetList {
  fn sets(&self) -> &[TrainingSet];
  fn sets_mut(&mut self) -> &mut Vec<TrainingSet>;
  fn set_total_distance(&mut self, total_distance: u64);

  fn recalculate_total_distance(&mut self) {
    let total = total_distance(self.sets());
    self.set_total_distance(total);
  }

  fn push_set(&mut self, set: TrainingSet) {
    self.sets_mut().push(set);
    self.renumber();
  }

  /// Swap the set at `idx` with the one before it. No-op for the first set.
  fn move_set_up(&mut self, idx: usize) {
    if idx == 0 || idx >= self.sets().len() {
      return;
    }
    self.sets_mut().swap(idx, idx - 1);
    self.renumber();
  }

  /// Swap the set at `idx` with the one after it. No-op for the last set.
  fn move_set_down(&mut self, idx: usize) {
    if idx + 1 >= self.sets().len() {
      return;
    }
    self.sets_mut().swap(idx, idx + 1);
    self.renumber();
  }

  fn delete_set(&mut self, idx: usize) -> Option<TrainingSet> {
    if idx >= self.sets().len() {
      return None;
    }
    let removed = self.sets_mut().remove(idx);
    self.renumber();
    Some(removed)
  }

  /// Insert a copy of the set at `idx` right after it.
  fn duplicate_set(&mut self, idx: usize) {
    let Some(copy) = self.sets().get(idx).cloned() else {
      return;
    };
    self.sets_mut().insert(idx + 1, copy);
    self.renumber();
  }

  fn renumber(&mut self) {
    for (i, set) in self.sets_mut().iter_mut().enumerate() {
      set.set_order = i as u32;
    }
    self.recalculate_total_distance();
  }
}

pub fn total_distance(sets: &[TrainingSet]) -> u64 {
  sets
    .iter()
    .fold(0u64, |acc, s| acc.saturating_add(s.total_distance))
}

impl SetList for NewTraining {
  fn sets(&self) -> &[TrainingSet] {
    &self.sets
  }

  fn sets_mut(&mut self) -> &mut Vec<TrainingSet> {
    &mut self.sets
  }

  fn set_total_distance(&mut self, total_distance: u64) {
    self.total_distance = total_distance;
  }
}

impl SetList for Training {
  fn sets(&self) -> &[TrainingSet] {
    &self.sets
  }

  fn sets_mut(&mut self) -> &mut Vec<TrainingSet> {
    &mut self.sets
  }

  fn set_total_distance(&mut self, total_distance: u64) {
    self.total_distance = total_distance;
  }
}
