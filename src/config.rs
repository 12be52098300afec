use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cli::Args;
use crate::model::Location;
use crate::options::NearestOptions;

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_INTERVAL_SECONDS: u64 = 15 * 60;
const DEFAULT_RETRY_SECONDS: u64 = 15 * 60;

/// Where the feed reads measurements from.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedSource {
    Installation(u64),
    Nearest {
        location: Location,
        options: NearestOptions,
    },
}

impl FeedSource {
    pub fn label(&self) -> String {
        match self {
            Self::Installation(id) => format!("installation:{id}"),
            Self::Nearest { location, .. } => {
                format!("nearest:{:.6},{:.6}", location.latitude, location.longitude)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutput {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub api_key: String,
    pub language: String,
    pub source: FeedSource,
    pub output: FeedOutput,
    pub interval: Duration,
    pub retry_delay: Duration,
    pub once: bool,
}

impl FeedConfig {
    /// Command-line flags first, then `AIRLY_*` environment variables, then defaults.
    pub fn resolve(args: Args) -> Result<Self> {
        Self::resolve_with(args, |key| env::var(key).ok())
    }

    fn resolve_with(args: Args, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = pick_string(args.key, "AIRLY_API_KEY", &lookup)
            .ok_or_else(|| anyhow!("missing API key: pass --key or set AIRLY_API_KEY"))?;
        let language = pick_string(args.language, "AIRLY_LANGUAGE", &lookup)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let installation = pick_parsed(args.installation, "AIRLY_INSTALLATION_ID", &lookup)?;
        let latitude = pick_parsed(args.lat, "AIRLY_LATITUDE", &lookup)?;
        let longitude = pick_parsed(args.lng, "AIRLY_LONGITUDE", &lookup)?;
        let max_distance_km = pick_parsed(args.max_distance_km, "AIRLY_MAX_DISTANCE_KM", &lookup)?;

        let source = match (installation, latitude, longitude) {
            (Some(id), _, _) => FeedSource::Installation(id),
            (None, Some(latitude), Some(longitude)) => {
                let mut options = NearestOptions::default();
                if let Some(km) = max_distance_km {
                    if km.is_nan() || km <= 0.0 {
                        bail!("AIRLY_MAX_DISTANCE_KM must be positive, got {km}");
                    }
                    options = options.max_distance(km);
                }
                FeedSource::Nearest {
                    location: Location::new(latitude, longitude),
                    options,
                }
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                bail!("both --lat and --lng are required when no installation is given")
            }
            (None, None, None) => {
                bail!("nothing to poll: pass --installation or --lat/--lng")
            }
        };

        let output = match args.output.or_else(|| {
            pick_string(None, "AIRLY_FEED_OUTPUT", &lookup).map(PathBuf::from)
        }) {
            Some(path) if path.as_os_str() != "-" => FeedOutput::File(path),
            _ => FeedOutput::Stdout,
        };

        let interval = Duration::from_secs(
            pick_parsed(args.interval_secs, "AIRLY_FEED_INTERVAL_SECONDS", &lookup)?
                .unwrap_or(DEFAULT_INTERVAL_SECONDS),
        );
        let retry_delay = Duration::from_secs(
            pick_parsed(args.retry_secs, "AIRLY_FEED_RETRY_SECONDS", &lookup)?
                .unwrap_or(DEFAULT_RETRY_SECONDS),
        );

        Ok(Self {
            api_key,
            language,
            source,
            output,
            interval,
            retry_delay,
            once: args.once,
        })
    }
}

fn pick_string(
    flag: Option<String>,
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Option<String> {
    flag.or_else(|| lookup(key))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn pick_parsed<T>(
    flag: Option<T>,
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if flag.is_some() {
        return Ok(flag);
    }
    match pick_string(None, key, lookup) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("invalid {key}")),
        None => Ok(None),
    }
}
