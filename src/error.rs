//! Error taxonomy for the planning core.
//!
//! Two failure categories are distinguished:
//! - [`InputError`]: a caller-supplied parameter violates a documented
//!   precondition; rejected before any formula runs.
//! - [`DomainError`]: a plausible input combination produces an undefined or
//!   non-physical intermediate result inside a formula. Carries the offending
//!   values so the failing computation can be diagnosed.
//!
//! The core never substitutes defaults or swallows a failure; everything
//! propagates to the caller as a typed value.

use thiserror::Error;

/// A caller-supplied parameter violates a documented precondition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{name} must be strictly positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("penetration rate must be between 0 and 100 percent, got {0}")]
    PenetrationOutOfRange(f64),
    #[error("unsupported channel bandwidth {0} MHz, expected one of 1.4, 3, 5, 10, 15, 20")]
    UnsupportedBandwidth(f64),
}

/// A mathematically valid-looking input combination degenerated inside a
/// formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error(
        "path-loss slope is zero at base station height {base_station_height_m} m, radius inversion is undefined"
    )]
    DegenerateSlope { base_station_height_m: f64 },
    #[error(
        "radius inversion produced a non-physical cell radius {radius_km} km for max path loss {max_path_loss_db} dB"
    )]
    NonPositiveRadius { radius_km: f64, max_path_loss_db: f64 },
    #[error("cell area must be strictly positive, got {0} km2")]
    NonPositiveCellArea(f64),
    #[error("per-site capacity must be strictly positive, got {0} Mbps")]
    NonPositiveSiteCapacity(f64),
}

/// Any failure the planning pipeline can surface to its caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Reject zero, negative, and NaN values for a strictly positive parameter.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), InputError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(InputError::NotPositive { name, value })
    }
}

/// Reject negative and NaN values for a non-negative parameter.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), InputError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::Negative { name, value })
    }
}
