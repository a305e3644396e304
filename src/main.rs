// ------------------------------------------------------------
// Module declarations
// ------------------------------------------------------------
//
// Each module represents a well-defined responsibility:
//
// - config:   Pool configuration loaded from JSON
// - schema:   Strongly typed update-batch and artifact definitions
// - numeric:  Exact decimal percent type and ray conversion
// - codegen:  Typed Solidity fragment builder
// - error:    Generator error taxonomy
// - prompts:  Interactive collaborator services (terminal-backed)
// - features: Feature modules (collection + rendering phases)
// - metrics:  Lock-free runtime counters
//
mod codegen;
mod config;
mod error;
mod features;
mod metrics;
mod numeric;
mod prompts;
mod schema;

use std::fs;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use anyhow::Context;

use config::Config;
use features::{FeatureTag, Services};
use metrics::METRICS;
use prompts::TerminalPrompter;

// ------------------------------------------------------------
// Application entry point
// ------------------------------------------------------------
//
// Thin shell around the feature modules:
// - Parse pool + feature from argv
// - Load configuration
// - Run the interactive collection phase
// - Render and print the code fragment
//
// Artifact assembly across features and file writing happen in
// the outer tooling; this binary emits one fragment on stdout.
//
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let pool_name = args
        .next()
        .context("usage: proposal-rate-generator <pool> [feature]")?;
    let feature_name = args
        .next()
        .unwrap_or_else(|| FeatureTag::RateUpdates.as_str().to_string());

    let config: Config = load_config("config.json")?;
    let pool = config.pool_context(&pool_name)?;
    let tag = FeatureTag::parse(&feature_name)?;

    // One terminal prompter backs both interactive services, so
    // answers are consumed from stdin strictly in prompt order.
    let prompter = Arc::new(TerminalPrompter::new());
    let services = Services {
        assets: prompter.clone(),
        percents: prompter,
    };

    let artifact = features::run(tag, &pool, &services).await?;
    METRICS.fragments_rendered.fetch_add(
        artifact.functions.len(),
        Ordering::Relaxed,
    );

    for function in &artifact.functions {
        println!("{function}");
    }

    log::debug!(
        "prompts={} rejected={} assets={} fields={} skipped={} fragments={}",
        METRICS.prompts_issued.load(Ordering::Relaxed),
        METRICS.inputs_rejected.load(Ordering::Relaxed),
        METRICS.assets_selected.load(Ordering::Relaxed),
        METRICS.fields_collected.load(Ordering::Relaxed),
        METRICS.fields_skipped.load(Ordering::Relaxed),
        METRICS.fragments_rendered.load(Ordering::Relaxed),
    );

    Ok(())
}

// ------------------------------------------------------------
// Configuration loader
// ------------------------------------------------------------
//
// Reads the JSON configuration file from disk and deserializes
// it into the strongly typed `Config` structure.
//
// TODO:
// - Support CLI override (e.g. --config path)
//
fn load_config(path: &str) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading configuration from {path}"))?;
    let cfg = serde_json::from_str(&data)
        .with_context(|| format!("parsing configuration in {path}"))?;
    Ok(cfg)
}
