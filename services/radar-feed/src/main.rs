//! Reflectivity feed CLI.
//!
//! Fetches (or reads) a raw reflectivity file, runs the decoder, and
//! writes the resulting point set as GeoJSON for the map layer. Decoding
//! itself never fails; when the input is unusable the output is the
//! synthetic fallback field with its `synthetic` flag set.

mod fetch;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bytes::Bytes;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use radar_common::FeatureCollection;
use radar_decoder::{decode_with_options, DecodeOptions};

use fetch::{FetchConfig, Fetcher};

#[derive(Parser, Debug)]
#[command(name = "radar-feed")]
#[command(about = "Decode a reflectivity file into GeoJSON points")]
struct Args {
    /// URL of the (possibly gzip-wrapped) reflectivity file
    #[arg(long, env = "RADAR_FEED_URL", conflicts_with = "file")]
    url: Option<String>,

    /// Local reflectivity file to decode instead of fetching
    #[arg(long)]
    file: Option<PathBuf>,

    /// Upper bound on emitted points
    #[arg(long, default_value = "10000")]
    max_points: usize,

    /// Seed for the synthetic fallback field
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Output path for the GeoJSON document (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum fetch retry attempts
    #[arg(long, default_value = "4")]
    max_retries: u32,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let buffer: Bytes = match (&args.url, &args.file) {
        (Some(url), None) => {
            let config = FetchConfig {
                max_retries: args.max_retries,
                ..Default::default()
            };
            Fetcher::new(config)?.fetch(url).await?
        }
        (None, Some(path)) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?
            .into(),
        _ => bail!("exactly one of --url or --file is required"),
    };

    let options = DecodeOptions {
        max_points: args.max_points,
        fallback_seed: args.seed,
    };
    let grid = decode_with_options(&buffer, &options);

    info!(
        points = grid.len(),
        synthetic = grid.synthetic_fallback,
        "Decode complete"
    );

    let geojson = serde_json::to_string_pretty(&FeatureCollection::from(&grid))
        .context("Failed to serialize GeoJSON")?;

    match &args.output {
        Some(path) => tokio::fs::write(path, geojson)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{geojson}"),
    }

    Ok(())
}
