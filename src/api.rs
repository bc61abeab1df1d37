use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::models::TrainingDetail;

const CURRENT_WEEK_PATH: &str = "trainings/details/current-week";
const LOGGED_BODY_CHARS: usize = 500;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  #[error("Invalid API URL: {0}")]
  InvalidUrl(#[from] url::ParseError),

  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("API returned {status}: {body}")]
  Status { status: u16, body: String },

  #[error("Failed to decode response: {0}")]
  Decode(#[from] serde_json::Error),
}

impl Serialize for ApiError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Current week details
/// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CurrentWeekResponse {
  details: Vec<TrainingDetail>,
}

pub struct ApiClient {
  client: Client,
  base_url: Url,
}

impl ApiClient {
  pub fn new(config: &Config) -> Self {
    Self::with_base_url(config.api_url.clone())
  }

  pub fn with_base_url(mut base_url: Url) -> Self {
    // Url::join drops the last segment unless the base ends with '/'
    if !base_url.path().ends_with('/') {
      let path = format!("{}/", base_url.path());
      base_url.set_path(&path);
    }
    Self {
      client: Client::new(),
      base_url,
    }
  }

  /// `GET /trainings/details/current-week`
  pub async fn fetch_current_week(&self) -> Result<Vec<TrainingDetail>, ApiError> {
    let url = self.base_url.join(CURRENT_WEEK_PATH)?;
    tracing::info!(%url, "Fetching this week's training details");

    let response = self.client.get(url).send().await?;

    if !response.status().is_success() {
      let status = response.status().as_u16();
      let body = response.text().await.unwrap_or_default();
      tracing::warn!(status, "Current week request failed");
      return Err(ApiError::Status { status, body });
    }

    let response_text = response.text().await?;
    let parsed: CurrentWeekResponse = serde_json::from_str(&response_text).map_err(|e| {
      tracing::warn!(
        error = %e,
        body = %body_excerpt(&response_text),
        "Failed to parse current week response"
      );
      ApiError::Decode(e)
    })?;

    tracing::info!(count = parsed.details.len(), "Fetched this week's training details");
    Ok(parsed.details)
  }
}

/// Leading characters of a response body for logs, cut on a char boundary
fn body_excerpt(body: &str) -> String {
  body.chars().take(LOGGED_BODY_CHARS).collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
