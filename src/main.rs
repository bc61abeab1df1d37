use chrono::Datelike;
use std::process::ExitCode;

use swimlogs_week::datetime::{day_name, format_date, format_time, minutes_to_hours_and_minutes};
use swimlogs_week::summary::format_kilometers;
use swimlogs_week::{logging, ApiClient, Clock, Config, SystemClock, WeekDetails};

#[tokio::main]
async fn main() -> ExitCode {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  if let Err(e) = logging::init() {
    eprintln!("{}", e);
  }

  match run().await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!("{}", e);
      ExitCode::FAILURE
    }
  }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::from_env()?;
  tracing::debug!(
    api_url = %config.api_url,
    membership = config.week_membership.as_str(),
    "Configuration loaded"
  );

  let details = ApiClient::new(&config).fetch_current_week().await?;
  let week = WeekDetails::with_details(SystemClock, details).with_membership(config.week_membership);

  for detail in week.details() {
    let local = SystemClock.to_local(&detail.start);
    println!(
      "{:<9} {} {}  {:<9} {}m",
      day_name(local.weekday()),
      format_date(Some(&local)),
      format_time(Some(&local)),
      minutes_to_hours_and_minutes(detail.duration_min),
      detail.total_distance
    );
  }
  println!(
    "This week: {} trainings, {}km",
    week.details().len(),
    format_kilometers(week.total_distance())
  );

  Ok(())
}
