//! Periodic measurement export: poll Airly, append one JSON line per poll.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::client::Client;
use crate::config::{FeedConfig, FeedOutput, FeedSource};
use crate::model::Measurements;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord<'a> {
    #[serde(with = "crate::time::millis")]
    pub fetched_at: DateTime<Utc>,
    pub source: String,
    pub measurements: &'a Measurements,
}

/// Newline-delimited JSON writer, flushed after every record.
pub struct JsonLinesSink {
    writer: Box<dyn Write + Send>,
}

impl JsonLinesSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    pub fn open(output: &FeedOutput) -> Result<Self> {
        match output {
            FeedOutput::Stdout => Ok(Self::new(io::stdout())),
            FeedOutput::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Ok(Self::new(file))
            }
        }
    }

    pub fn write(&mut self, record: &FeedRecord<'_>) -> Result<()> {
        let mut line = serde_json::to_vec(record).context("failed to serialize measurements")?;
        line.push(b'\n');
        self.writer
            .write_all(&line)
            .and_then(|_| self.writer.flush())
            .context("failed to write measurements")?;
        Ok(())
    }
}

pub struct Feed {
    client: Client,
    source: FeedSource,
    sink: JsonLinesSink,
    interval: Duration,
    retry_delay: Duration,
}

impl Feed {
    pub fn new(
        client: Client,
        source: FeedSource,
        sink: JsonLinesSink,
        interval: Duration,
        retry_delay: Duration,
    ) -> Self {
        Self {
            client,
            source,
            sink,
            interval,
            retry_delay,
        }
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        let client = Client::new(config.api_key.clone()).with_language(config.language.clone());
        let sink = JsonLinesSink::open(&config.output)?;
        Ok(Self::new(
            client,
            config.source.clone(),
            sink,
            config.interval,
            config.retry_delay,
        ))
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    /// Fetches once and appends the result.
    pub fn poll_once(&mut self) -> Result<()> {
        let measurements = match &self.source {
            FeedSource::Installation(id) => self.client.installation_measurements(*id),
            FeedSource::Nearest { location, options } => {
                self.client.nearest_measurements(*location, *options)
            }
        }
        .context("failed to fetch measurements")?;

        let record = FeedRecord {
            fetched_at: Utc::now(),
            source: self.source.label(),
            measurements: &measurements,
        };
        self.sink.write(&record)?;

        tracing::info!(
            source = %record.source,
            from = %record.measurements.current.from_date_time,
            values = record.measurements.current.values.len(),
            "measurements exported"
        );
        Ok(())
    }

    /// Polls once and returns how long to wait before the next poll.
    pub fn tick(&mut self) -> Duration {
        match self.poll_once() {
            Ok(()) => self.interval,
            Err(err) => {
                tracing::warn!(
                    source = %self.source.label(),
                    retry_in_secs = self.retry_delay.as_secs(),
                    "poll failed: {err:#}"
                );
                self.retry_delay
            }
        }
    }

    pub fn run(&mut self) -> ! {
        loop {
            let delay = self.tick();
            thread::sleep(delay);
        }
    }
}
