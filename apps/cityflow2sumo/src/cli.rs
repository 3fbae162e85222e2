//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use c2s_core::TranslateConfig;

/// Convert a CityFlow roadnet + flow file into SUMO network, route, and
/// configuration files.
#[derive(Debug, Clone, Parser)]
#[command(name = "cityflow2sumo", version, about)]
pub struct Args {
    /// CityFlow roadnet JSON file.
    pub network: PathBuf,

    /// CityFlow flow JSON file.
    pub routes: PathBuf,

    /// Directory receiving network.net.xml, routes.rou.xml and simulation.sumocfg.
    #[arg(short, long, default_value = "./output")]
    pub output_dir: PathBuf,

    /// Speed (m/s) of junction-internal lanes.
    #[arg(long)]
    pub internal_lane_speed: Option<f64>,

    /// Length (m) of junction-internal lanes.
    #[arg(long)]
    pub internal_lane_length: Option<f64>,

    /// Increase log verbosity (-v debug, -vv trace).  RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default configuration with the command-line overrides applied.
    pub fn translate_config(&self) -> TranslateConfig {
        let mut config = TranslateConfig::default();
        if let Some(speed) = self.internal_lane_speed {
            config.internal_lane_speed = speed;
        }
        if let Some(length) = self.internal_lane_length {
            config.internal_lane_length = length;
        }
        config
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
