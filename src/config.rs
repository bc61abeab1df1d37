use std::env;
use url::Url;

use crate::week::WeekMembership;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const API_URL_VAR: &str = "SWIMLOGS_API_URL";
pub const WEEK_MEMBERSHIP_VAR: &str = "SWIMLOGS_WEEK_MEMBERSHIP";
pub const LOG_FILTER_VAR: &str = "SWIMLOGS_LOG";

const DEFAULT_API_URL: &str = "http://localhost:42069";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
  #[error("Invalid {var}: {reason}")]
  Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub api_url: Url,
  pub week_membership: WeekMembership,
}

impl Config {
  /// Read configuration from the environment. Call `dotenvy::dotenv()`
  /// first to pick up a `.env` file.
  pub fn from_env() -> Result<Self, ConfigError> {
    let raw_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let api_url = Url::parse(&raw_url).map_err(|e| ConfigError::Invalid {
      var: API_URL_VAR,
      reason: e.to_string(),
    })?;

    let week_membership = match env::var(WEEK_MEMBERSHIP_VAR) {
      Ok(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
        var: WEEK_MEMBERSHIP_VAR,
        reason,
      })?,
      Err(_) => WeekMembership::default(),
    };

    Ok(Self {
      api_url,
      week_membership,
    })
  }
}
