//! Translation configuration.

/// Tunables for one translation run.
///
/// Built with `Default` and overridden field-by-field by the application
/// crate (CLI flags).
#[derive(Clone, Debug, PartialEq)]
pub struct TranslateConfig {
    /// Speed (m/s) of every junction-internal micro-lane.
    pub internal_lane_speed: f64,

    /// Length (m) of every junction-internal micro-lane.
    pub internal_lane_length: f64,

    /// File name of the emitted network, relative to the output directory.
    pub net_file: String,

    /// File name of the emitted routes, relative to the output directory.
    pub route_file: String,

    /// File name of the emitted run configuration.
    pub config_file: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            internal_lane_speed:  3.93,
            internal_lane_length: 2.19,
            net_file:    "network.net.xml".to_owned(),
            route_file:  "routes.rou.xml".to_owned(),
            config_file: "simulation.sumocfg".to_owned(),
        }
    }
}
