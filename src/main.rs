//! Machine Failure Detector - command line entry point
//!
//! Loads the anomaly model once, scores a JSON batch of sensor rows and
//! prints the response payload (or just the text report).

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use machine_failure_detector::config::Config;
use machine_failure_detector::constants::{APP_NAME, APP_VERSION, DEFAULT_LOG_FILTER};
use machine_failure_detector::{BaselineModel, DetectionResponse, Detector, RawRow};

#[derive(Parser, Debug)]
#[command(name = "machine-failure-detector")]
#[command(version)]
#[command(about = "Flag sensor readings likely to precede machine failure", long_about = None)]
struct Args {
    /// JSON file holding an array of sensor rows
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Alert threshold on the anomaly score (overrides DETECTOR_THRESHOLD)
    #[arg(long, allow_negative_numbers = true)]
    threshold: Option<f64>,

    /// Model artifact path (overrides DETECTOR_MODEL_PATH)
    #[arg(long, value_name = "MODEL_FILE")]
    model: Option<PathBuf>,

    /// Alerts listed in the response (overrides DETECTOR_ALERT_CAP)
    #[arg(long)]
    alert_cap: Option<usize>,

    /// Print only the text report
    #[arg(long)]
    report_only: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = Config::from_env();

    tracing::info!("{} v{} starting...", APP_NAME, APP_VERSION);

    let model_path = args.model.unwrap_or(config.model_path);
    let threshold = args.threshold.unwrap_or(config.threshold);
    let alert_cap = args.alert_cap.unwrap_or(config.alert_cap);

    // A model that fails to load is fatal; never score without one
    let model = BaselineModel::load(&model_path)
        .with_context(|| format!("failed to load model from {}", model_path.display()))?;
    let detector = Detector::new(Arc::new(model));

    let data = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let rows: Vec<RawRow> = serde_json::from_slice(&data)
        .with_context(|| format!("{} is not a JSON array of rows", args.input.display()))?;

    let outcome = detector.run(&rows, threshold)?;

    if args.report_only {
        println!("{}", outcome.report);
    } else {
        let response = DetectionResponse::from_outcome(&outcome, alert_cap);
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
