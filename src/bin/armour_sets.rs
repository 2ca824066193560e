// Armour set scoring entry point
//
// Purpose: Enumerate every armour set, score it, write the CSV
// Usage: cargo run --bin armour_sets
//        ARMOUR_OUTPUT=sets.csv ARMOUR_WEIGHTS=weights.json cargo run --bin armour_sets

use anyhow::Context;
use armour_set_scorer::{build_scored_sets, write_csv, Catalog, RunConfig};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armour_set_scorer=info,armour_sets=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RunConfig::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  Output: {}", config.output.display());
    tracing::info!("  Weights: poison={} plague={}", config.weights.poison, config.weights.plague);

    let start = Instant::now();
    let catalog = Catalog::builtin();
    let sets = build_scored_sets(&catalog, config.weights)?;

    write_csv(&sets, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    tracing::info!("Done in {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}
