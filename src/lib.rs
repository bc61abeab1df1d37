//! Week core of the SwimLogs training log: which trainings belong to this
//! week, their aggregate distance, and per-group distance summaries.

pub mod api;
pub mod config;
pub mod datetime;
pub mod logging;
pub mod models;
pub mod summary;
pub mod week;

#[cfg(test)]
mod test_utils;

pub use api::{ApiClient, ApiError};
pub use config::{Config, ConfigError};
pub use models::{Group, NewTraining, SetList, Training, TrainingDetail, TrainingSet};
pub use summary::{distance_per_group, DistancePerGroup, TrainingSummary};
pub use week::{Clock, FixedClock, SystemClock, WeekDetails, WeekMembership, WeekSnapshot};
