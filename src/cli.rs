use clap::Parser;
use std::path::PathBuf;

/// Every flag falls back to its `AIRLY_*` environment variable (see `config`).
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "airly-feed",
    version,
    about = "Polls Airly measurements and appends them as JSON lines"
)]
pub struct Args {
    /// Airly API key [env: AIRLY_API_KEY]
    #[arg(long)]
    pub key: Option<String>,
    /// Response language, `en` or `pl` [env: AIRLY_LANGUAGE]
    #[arg(long = "lang")]
    pub language: Option<String>,
    /// Latitude of the point to watch [env: AIRLY_LATITUDE]
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude of the point to watch [env: AIRLY_LONGITUDE]
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,
    /// Installation to read; takes precedence over coordinates [env: AIRLY_INSTALLATION_ID]
    #[arg(long)]
    pub installation: Option<u64>,
    /// Search radius for the nearest installation [env: AIRLY_MAX_DISTANCE_KM]
    #[arg(long)]
    pub max_distance_km: Option<f64>,
    /// JSON-lines file to append to; stdout when unset [env: AIRLY_FEED_OUTPUT]
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Seconds between successful polls [env: AIRLY_FEED_INTERVAL_SECONDS]
    #[arg(long)]
    pub interval_secs: Option<u64>,
    /// Seconds to wait after a failed poll [env: AIRLY_FEED_RETRY_SECONDS]
    #[arg(long)]
    pub retry_secs: Option<u64>,
    /// Poll once and exit
    #[arg(long, default_value_t = false)]
    pub once: bool,
}
