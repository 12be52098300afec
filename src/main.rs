use airly_client::cli::Args;
use airly_client::config::FeedConfig;
use airly_client::feed::Feed;
use anyhow::Result;
use clap::Parser;

fn init_tracing() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,airly_client=info,airly_feed=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;
    let config = FeedConfig::resolve(args)?;

    let mut feed = Feed::from_config(&config)?;
    tracing::info!(
        source = %feed.source().label(),
        interval_secs = config.interval.as_secs(),
        once = config.once,
        "airly feed starting"
    );

    if config.once {
        return feed.poll_once();
    }
    feed.run()
}
