//! Command-line entry point.
//!
//! Generates the classic collection, prints every card and exports the
//! result as JSON. Set `GEMINI_API_KEY` (environment or `.env`) to name
//! cards; without it cards keep placeholder names.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use card_forge::export::export_collection;
use card_forge::generation::{classic_collection, run_batch};
use card_forge::{ContentPool, GeminiClient, GeneratorConfig, NamingConfig};

/// Generate a themed deck of monster cards.
#[derive(Parser)]
#[command(name = "card-forge")]
#[command(about = "Procedurally generate trading-card collections", long_about = None)]
#[command(version)]
struct Cli {
    /// What type of monster to generate (e.g. monkey, dragon).
    #[arg(short, long)]
    subject: Option<String>,

    /// Seed for the run. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory collections are exported into.
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Standalone cards per rarity tier.
    #[arg(long, default_value_t = 3)]
    singles: usize,

    /// Evolution series per rarity tier.
    #[arg(long, default_value_t = 1)]
    series: usize,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for GEMINI_API_KEY)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = GeneratorConfig::new()
        .with_singles_per_rarity(cli.singles)
        .with_series_per_rarity(cli.series)
        .with_output_dir(cli.output);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let pool = ContentPool::builtin().context("content pool failed validation")?;
    let naming_config = NamingConfig::from_env().context("invalid naming configuration")?;
    let naming = GeminiClient::new(naming_config).context("failed to create naming client")?;

    let run = run_batch(
        vec![classic_collection()],
        &config,
        &pool,
        &naming,
        cli.subject.as_deref(),
    )?;
    info!(seed = run.seed, "generation complete");

    for collection in &run.collections {
        for card in collection.cards() {
            println!("{card}\n");
        }
        export_collection(collection, &config.output_dir)
            .with_context(|| format!("failed to export {}", collection.name))?;
    }

    Ok(())
}
