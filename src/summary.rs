//! Distance summaries for a single training
//!
//! Per-group figures read as "this group's own distance plus the shared
//! ungrouped volume" (warm-up, cool-down), so the ungrouped distance is
//! added to every group. Summed across groups they overcount the training's
//! total whenever grouped and ungrouped sets coexist.

use serde::{Deserialize, Serialize};

use crate::models::{Group, TrainingSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistancePerGroup {
  pub group: Group,
  pub distance: u64,
}

/// Per-group distances in first-seen group order, each including all
/// ungrouped distance. Empty when no set carries a group.
pub fn distance_per_group(sets: &[TrainingSet]) -> Vec<DistancePerGroup> {
  let mut distances: Vec<DistancePerGroup> = Vec::new();
  let mut no_group: u64 = 0;

  for set in sets {
    let Some(group) = set.group else {
      no_group = no_group.saturating_add(set.total_distance);
      continue;
    };

    match distances.iter_mut().find(|d| d.group == group) {
      Some(entry) => entry.distance = entry.distance.saturating_add(set.total_distance),
      None => distances.push(DistancePerGroup {
        group,
        distance: set.total_distance,
      }),
    }
  }

  for entry in &mut distances {
    entry.distance = entry.distance.saturating_add(no_group);
  }

  distances
}

/// What the training summary card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TrainingSummary {
  /// No grouped sets: the training total, in km with two significant digits
  Total(String),
  PerGroup(Vec<DistancePerGroup>),
}

impl TrainingSummary {
  pub fn from_sets(sets: &[TrainingSet], total_distance: u64) -> Self {
    if sets.iter().all(|s| s.group.is_none()) {
      TrainingSummary::Total(format_kilometers(total_distance))
    } else {
      TrainingSummary::PerGroup(distance_per_group(sets))
    }
  }
}

/// Meters as kilometers with two significant digits (`2500 -> "2.5"`).
pub fn format_kilometers(meters: u64) -> String {
  let km = meters as f64 / 1000.0;
  if km <= 0.0 {
    return "0.0".to_string();
  }

  let magnitude = km.log10().floor() as i32;
  let scale = 10f64.powi(1 - magnitude);
  let rounded = (km * scale).round() / scale;

  // Rounding can carry into the next power of ten (9960m -> 10km)
  let magnitude = rounded.log10().floor() as i32;
  let decimals = (1 - magnitude).max(0) as usize;
  format!("{:.*}", decimals, rounded)
}
