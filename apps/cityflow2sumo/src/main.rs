//! cityflow2sumo — CityFlow to SUMO network and route converter.
//!
//! ```text
//! cityflow2sumo roadnet.json flow.json -o ./output
//! ```
//!
//! Everything is translated in memory first; the output directory is only
//! created and written once translation has succeeded, so a fatal input
//! error never leaves partial artifacts behind.

mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use c2s_network::{load_roadnet_json, translate_network};
use c2s_output::{Artifacts, write_all};
use c2s_routes::{NoRepair, load_flows_json, translate_routes};

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let t0 = Instant::now();
    let artifacts = run(&args)?;
    log::info!(
        "translation complete in {:.3} s → {}",
        t0.elapsed().as_secs_f64(),
        artifacts.config.display(),
    );
    Ok(())
}

/// Load, translate, and write.  Returns the paths written.
fn run(args: &Args) -> Result<Artifacts> {
    let config = args.translate_config();

    // 1. Network.
    let roadnet = load_roadnet_json(&args.network)
        .with_context(|| format!("loading roadnet {}", args.network.display()))?;
    log::info!(
        "roadnet: {} roads, {} intersections",
        roadnet.roads.len(),
        roadnet.intersections.len(),
    );
    let network = translate_network(&roadnet, &config).context("translating roadnet")?;

    // 2. Routes.
    let flows = load_flows_json(&args.routes)
        .with_context(|| format!("loading flows {}", args.routes.display()))?;
    log::info!("flow: {} entries", flows.len());
    let routes = translate_routes(&flows, &network, NoRepair).context("translating routes")?;

    // 3. Output.
    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;
    let artifacts = write_all(&args.output_dir, &network, &routes, &config)?;
    Ok(artifacts)
}
