//! Planning scenario loading, validation, and parameter assembly.
//!
//! A scenario is a TOML file with three sections mirroring how planners
//! group their inputs: the service zone, the radio network, and the traffic
//! load. Values are validated after parsing, before any formula runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::InputError;
use crate::propagation::{Environment, LinkBudget, PropagationParameters};
use crate::sizing::{ChannelBandwidth, DEFAULT_SITE_CAPACITY_MBPS, ZoneParameters};

/// Standard downlink maximum allowed path loss (dB), used when a scenario
/// does not override it.
pub const DEFAULT_MAX_PATH_LOSS_DB: f64 = 138.5;

/// Error type for scenario loading failures.
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid scenario: {0}")]
    Invalid(#[from] InputError),
}

/// Service zone description.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ZoneSection {
    /// Zone surface in km².
    pub area_km2: f64,
    /// Environment classification.
    pub environment: Environment,
}

/// Radio network parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkSection {
    /// Carrier frequency in MHz (commonly 800, 1800, or 2600).
    pub frequency_mhz: f64,
    /// Channel bandwidth in MHz, one of 1.4, 3, 5, 10, 15, 20.
    pub channel_bandwidth_mhz: ChannelBandwidth,
    /// eNodeB antenna height in meters.
    pub base_station_height_m: f64,
    /// User equipment antenna height in meters.
    pub mobile_height_m: f64,
    /// Maximum allowed path loss (dB) on the downlink.
    #[serde(default = "default_max_path_loss_db")]
    pub max_path_loss_db: f64,
    /// Per-site throughput (Mbps) at the 20 MHz reference bandwidth.
    #[serde(default = "default_site_capacity_mbps")]
    pub site_capacity_mbps: f64,
}

fn default_max_path_loss_db() -> f64 {
    DEFAULT_MAX_PATH_LOSS_DB
}

fn default_site_capacity_mbps() -> f64 {
    DEFAULT_SITE_CAPACITY_MBPS
}

/// Subscriber traffic parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrafficSection {
    /// Inhabitants per km².
    pub user_density_per_km2: f64,
    /// Share of inhabitants using the service, in percent.
    pub penetration_rate_percent: f64,
    /// Average busy-hour throughput per active user (Mbps).
    pub avg_traffic_per_user_mbps: f64,
}

/// Root structure describing one complete planning scenario.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scenario {
    pub zone: ZoneSection,
    pub network: NetworkSection,
    pub traffic: TrafficSection,
}

impl Scenario {
    /// Load and validate a scenario from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ScenarioLoadError> {
        let content = fs::read_to_string(path)?;
        let scenario: Scenario = toml::from_str(&content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Built-in example scenario: a 25 km² urban zone served at 1800 MHz
    /// with 10 MHz channels.
    pub fn example() -> Self {
        Self {
            zone: ZoneSection {
                area_km2: 25.0,
                environment: Environment::Urban,
            },
            network: NetworkSection {
                frequency_mhz: 1800.0,
                channel_bandwidth_mhz: ChannelBandwidth::Mhz10,
                base_station_height_m: 30.0,
                mobile_height_m: 2.0,
                max_path_loss_db: DEFAULT_MAX_PATH_LOSS_DB,
                site_capacity_mbps: DEFAULT_SITE_CAPACITY_MBPS,
            },
            traffic: TrafficSection {
                user_density_per_km2: 1500.0,
                penetration_rate_percent: 70.0,
                avg_traffic_per_user_mbps: 2.5,
            },
        }
    }

    /// Check every input precondition before the core formulas run.
    ///
    /// Heights only need to be strictly positive here; the degenerate 1 m
    /// mast height is caught later by the radius inversion.
    pub fn validate(&self) -> Result<(), InputError> {
        self.propagation_parameters().validate()?;
        self.zone_parameters().validate()?;
        Ok(())
    }

    pub fn propagation_parameters(&self) -> PropagationParameters {
        PropagationParameters {
            frequency_mhz: self.network.frequency_mhz,
            base_station_height_m: self.network.base_station_height_m,
            mobile_height_m: self.network.mobile_height_m,
            environment: self.zone.environment,
        }
    }

    pub fn link_budget(&self) -> LinkBudget {
        LinkBudget {
            max_path_loss_db: self.network.max_path_loss_db,
            propagation: self.propagation_parameters(),
        }
    }

    pub fn zone_parameters(&self) -> ZoneParameters {
        ZoneParameters {
            area_km2: self.zone.area_km2,
            user_density_per_km2: self.traffic.user_density_per_km2,
            penetration_rate_percent: self.traffic.penetration_rate_percent,
            avg_traffic_per_user_mbps: self.traffic.avg_traffic_per_user_mbps,
            channel_bandwidth: self.network.channel_bandwidth_mhz,
        }
    }
}
