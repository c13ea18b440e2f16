//! Network sizing: deriving site counts from coverage area and traffic load.
//!
//! Contains helpers for:
//! - Hexagonal cell area and inter-site distance from the cell radius
//! - Coverage-driven site count over a service zone
//! - Bandwidth-scaled per-site capacity and traffic-driven site count

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, InputError, ensure_non_negative, ensure_positive};

/// Hexagonal-cell area approximation: area = 2.6 * R². The factor relates a
/// circle's radius to the area of the inscribed regular hexagon in idealized
/// cellular tiling and is fixed, not a tunable.
pub const HEX_CELL_AREA_FACTOR: f64 = 2.6;

/// Reference channel width (MHz) at which the full per-site capacity applies.
pub const REFERENCE_BANDWIDTH_MHZ: f64 = 20.0;

/// Default per-site throughput (Mbps) at the reference bandwidth.
pub const DEFAULT_SITE_CAPACITY_MBPS: f64 = 150.0;

/// LTE channel bandwidth, restricted to the standardized widths.
///
/// (De)serialized as its numeric MHz value; anything outside the fixed set
/// is rejected as an [`InputError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum ChannelBandwidth {
    Mhz1_4,
    Mhz3,
    Mhz5,
    Mhz10,
    Mhz15,
    Mhz20,
}

impl ChannelBandwidth {
    pub const ALL: [ChannelBandwidth; 6] = [
        ChannelBandwidth::Mhz1_4,
        ChannelBandwidth::Mhz3,
        ChannelBandwidth::Mhz5,
        ChannelBandwidth::Mhz10,
        ChannelBandwidth::Mhz15,
        ChannelBandwidth::Mhz20,
    ];

    /// Channel width in MHz.
    pub fn mhz(self) -> f64 {
        match self {
            ChannelBandwidth::Mhz1_4 => 1.4,
            ChannelBandwidth::Mhz3 => 3.0,
            ChannelBandwidth::Mhz5 => 5.0,
            ChannelBandwidth::Mhz10 => 10.0,
            ChannelBandwidth::Mhz15 => 15.0,
            ChannelBandwidth::Mhz20 => 20.0,
        }
    }
}

impl TryFrom<f64> for ChannelBandwidth {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|bandwidth| bandwidth.mhz() == value)
            .ok_or(InputError::UnsupportedBandwidth(value))
    }
}

impl From<ChannelBandwidth> for f64 {
    fn from(bandwidth: ChannelBandwidth) -> Self {
        bandwidth.mhz()
    }
}

/// Service-zone extent and subscriber load for one sizing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneParameters {
    /// Zone surface in km². Strictly positive.
    pub area_km2: f64,
    /// Inhabitants per km². Non-negative.
    pub user_density_per_km2: f64,
    /// Share of inhabitants subscribed to the service, in percent (0-100).
    pub penetration_rate_percent: f64,
    /// Average busy-hour throughput demand per active user (Mbps).
    pub avg_traffic_per_user_mbps: f64,
    /// Selected channel width.
    pub channel_bandwidth: ChannelBandwidth,
}

impl ZoneParameters {
    pub fn validate(&self) -> Result<(), InputError> {
        ensure_positive("area_km2", self.area_km2)?;
        ensure_non_negative("user_density_per_km2", self.user_density_per_km2)?;
        if !(0.0..=100.0).contains(&self.penetration_rate_percent) {
            return Err(InputError::PenetrationOutOfRange(
                self.penetration_rate_percent,
            ));
        }
        ensure_non_negative("avg_traffic_per_user_mbps", self.avg_traffic_per_user_mbps)?;
        Ok(())
    }

    /// Number of active subscribers in the zone.
    pub fn active_users(&self) -> f64 {
        self.area_km2 * self.user_density_per_km2 * (self.penetration_rate_percent / 100.0)
    }
}

/// Approximate area (km²) covered by one hexagonal cell of the given radius.
pub fn cell_area_km2(radius_km: f64) -> f64 {
    HEX_CELL_AREA_FACTOR * radius_km * radius_km
}

/// Number of sites needed to cover the zone surface, never below one.
pub fn coverage_site_count(zone_area_km2: f64, cell_area_km2: f64) -> Result<u32, DomainError> {
    if cell_area_km2 <= 0.0 {
        return Err(DomainError::NonPositiveCellArea(cell_area_km2));
    }
    Ok(((zone_area_km2 / cell_area_km2).ceil() as u32).max(1))
}

/// Per-site capacity (Mbps) for the selected channel width.
///
/// The full-bandwidth capacity applies at the 20 MHz reference width and is
/// scaled down linearly for narrower channels. Widths at or above the
/// reference are never scaled up.
pub fn estimated_site_capacity_mbps(
    full_bandwidth_capacity_mbps: f64,
    bandwidth: ChannelBandwidth,
) -> f64 {
    let width_mhz = bandwidth.mhz();
    if width_mhz < REFERENCE_BANDWIDTH_MHZ {
        full_bandwidth_capacity_mbps * (width_mhz / REFERENCE_BANDWIDTH_MHZ)
    } else {
        full_bandwidth_capacity_mbps
    }
}

/// Number of sites needed to carry the zone's aggregate traffic.
///
/// Total traffic is `active_users * avg_traffic_per_user_mbps`; the count is
/// its ceiling divided by the per-site capacity, and may be zero when the
/// zone carries no traffic.
pub fn capacity_site_count(
    zone: &ZoneParameters,
    site_capacity_mbps: f64,
) -> Result<u32, DomainError> {
    if site_capacity_mbps <= 0.0 {
        return Err(DomainError::NonPositiveSiteCapacity(site_capacity_mbps));
    }
    let total_traffic_mbps = zone.active_users() * zone.avg_traffic_per_user_mbps;
    Ok((total_traffic_mbps / site_capacity_mbps).ceil() as u32)
}

/// Final site count: the larger of the coverage- and capacity-driven counts.
pub fn final_site_count(coverage: u32, capacity: u32) -> u32 {
    coverage.max(capacity)
}

/// Center-to-center spacing (km) of neighboring sites on a hexagonal grid of
/// circle-packed cells: `sqrt(3) * R`.
pub fn inter_site_distance_km(radius_km: f64) -> f64 {
    3.0_f64.sqrt() * radius_km
}

/// Complete numeric outcome of one dimensioning run. Recomputed in full on
/// every run; never partially updated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizingResult {
    pub cell_radius_km: f64,
    pub cell_area_km2: f64,
    pub coverage_site_count: u32,
    pub capacity_site_count: u32,
    pub final_site_count: u32,
    pub inter_site_distance_km: f64,
}
