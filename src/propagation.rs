//! Cost-231 Hata propagation model.
//!
//! Contains helpers for:
//! - Forward path-loss prediction at a given transmitter-receiver distance
//! - Inverse solving for the maximum cell radius at a given link budget
//! - Environment-dependent corrections to the urban baseline loss
//!
//! Units:
//! - Frequency: MHz
//! - Antenna heights: meters
//! - Distance: kilometers
//! - Loss: dB

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, InputError, ensure_positive};

/// Radio environment classification.
///
/// Selects the correction term applied on top of the urban baseline loss.
/// The correction is shared by the forward and inverse formulas so the two
/// directions cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    DenseUrban,
    Urban,
    Suburban,
    Rural,
}

impl Environment {
    /// Correction (dB) added to the urban baseline loss `Lu`.
    pub fn correction_db(self, frequency_mhz: f64) -> f64 {
        match self {
            // Metropolitan correction term (cm = 3 dB)
            Environment::DenseUrban => 3.0,
            Environment::Urban => 0.0,
            Environment::Suburban => -2.0 * (frequency_mhz / 28.0).log10().powi(2) - 5.4,
            Environment::Rural => {
                let log_f = frequency_mhz.log10();
                -4.78 * log_f.powi(2) + 18.33 * log_f - 40.94
            }
        }
    }

    /// Label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Environment::DenseUrban => "dense urban",
            Environment::Urban => "urban",
            Environment::Suburban => "suburban",
            Environment::Rural => "rural",
        }
    }
}

/// Parameters of the macro-cell propagation model for one planning scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagationParameters {
    /// Carrier frequency in MHz. Strictly positive.
    pub frequency_mhz: f64,
    /// Base station (eNodeB) antenna height in meters, typically 20-60.
    pub base_station_height_m: f64,
    /// Mobile antenna height in meters, typically 1-10.
    pub mobile_height_m: f64,
    /// Environment classification for the correction term.
    pub environment: Environment,
}

impl PropagationParameters {
    /// Check the formula preconditions.
    ///
    /// Frequency and both antenna heights feed `log10`, so zero or negative
    /// values are rejected up front. A 1 m base station height passes this
    /// check; it degenerates only the inversion and is reported there.
    pub fn validate(&self) -> Result<(), InputError> {
        ensure_positive("frequency_mhz", self.frequency_mhz)?;
        ensure_positive("base_station_height_m", self.base_station_height_m)?;
        ensure_positive("mobile_height_m", self.mobile_height_m)?;
        Ok(())
    }
}

/// One scenario's worst-case tolerable attenuation together with the
/// propagation parameters it applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkBudget {
    /// Maximum allowed path loss in dB. 138.5 dB is the standard downlink
    /// value; it is always a configurable input, never baked into the model.
    pub max_path_loss_db: f64,
    pub propagation: PropagationParameters,
}

impl LinkBudget {
    /// Maximum cell radius (km) this budget sustains.
    pub fn cell_radius_km(&self) -> Result<f64, DomainError> {
        calculate_cell_radius(self.max_path_loss_db, &self.propagation)
    }
}

/// The loss formula is affine in `log10(d)`: `PL = A + B * log10(d)`.
/// Both directions are derived from this one coefficient pair.
fn loss_coefficients(params: &PropagationParameters) -> (f64, f64) {
    let log_f = params.frequency_mhz.log10();
    let log_hb = params.base_station_height_m.log10();
    let a_hm = (1.1 * log_f - 0.7) * params.mobile_height_m - (1.56 * log_f - 0.8);
    let intercept =
        46.3 + 33.9 * log_f - 13.82 * log_hb - a_hm + params.environment.correction_db(params.frequency_mhz);
    let slope = 44.9 - 6.55 * log_hb;
    (intercept, slope)
}

/// Calculate the path loss (in dB) at a given distance using the Cost-231
/// Hata model.
///
/// # Formula
///
/// ```text
/// a_hm = (1.1*log10(f) - 0.7)*h_m - (1.56*log10(f) - 0.8)
/// Lu   = 46.3 + 33.9*log10(f) - 13.82*log10(h_b) - a_hm
///        + (44.9 - 6.55*log10(h_b))*log10(d)
/// PL   = Lu + correction(environment, f)
/// ```
///
/// # Parameters
///
/// - `distance_km`: Transmitter-receiver distance in kilometers, strictly
///   positive
/// - `params`: Model parameters; see [`PropagationParameters::validate`]
///
/// # Returns
///
/// Path loss in dB, unclamped.
pub fn calculate_path_loss(distance_km: f64, params: &PropagationParameters) -> f64 {
    let (intercept, slope) = loss_coefficients(params);
    intercept + slope * distance_km.log10()
}

/// Calculate the maximum distance (cell radius, km) at which the predicted
/// path loss reaches the given budget.
///
/// Solves `MAPL = A + B * log10(d)` for `d`, with the same coefficients as
/// [`calculate_path_loss`], giving `d = 10^((MAPL - A) / B)`.
///
/// # Errors
///
/// - [`DomainError::DegenerateSlope`] when `B == 0`, which happens exactly
///   at a base station height of 1 m (`log10(1) = 0`)
/// - [`DomainError::NonPositiveRadius`] when the inversion produces a
///   non-finite or non-positive distance
pub fn calculate_cell_radius(
    max_path_loss_db: f64,
    params: &PropagationParameters,
) -> Result<f64, DomainError> {
    let (intercept, slope) = loss_coefficients(params);
    if slope == 0.0 {
        return Err(DomainError::DegenerateSlope {
            base_station_height_m: params.base_station_height_m,
        });
    }
    let radius_km = 10.0_f64.powf((max_path_loss_db - intercept) / slope);
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(DomainError::NonPositiveRadius {
            radius_km,
            max_path_loss_db,
        });
    }
    Ok(radius_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ENVIRONMENTS: [Environment; 4] = [
        Environment::DenseUrban,
        Environment::Urban,
        Environment::Suburban,
        Environment::Rural,
    ];

    fn urban_1800() -> PropagationParameters {
        PropagationParameters {
            frequency_mhz: 1800.0,
            base_station_height_m: 30.0,
            mobile_height_m: 2.0,
            environment: Environment::Urban,
        }
    }

    #[test]
    fn forward_and_inverse_agree_in_every_environment() {
        for environment in ALL_ENVIRONMENTS {
            for distance_km in [0.2, 1.0, 2.5, 7.0] {
                let params = PropagationParameters {
                    environment,
                    ..urban_1800()
                };
                let loss = calculate_path_loss(distance_km, &params);
                let radius = calculate_cell_radius(loss, &params).unwrap();
                assert!(
                    ((radius - distance_km) / distance_km).abs() < 1e-6,
                    "round trip diverged for {environment:?} at {distance_km} km: {radius}"
                );
            }
        }
    }

    #[test]
    fn path_loss_grows_with_distance() {
        let params = urban_1800();
        let mut previous = calculate_path_loss(0.25, &params);
        for distance_km in [0.5, 1.0, 2.0, 4.0, 8.0] {
            let loss = calculate_path_loss(distance_km, &params);
            assert!(loss > previous, "loss not increasing at {distance_km} km");
            previous = loss;
        }
    }

    #[test]
    fn environment_corrections_shift_the_urban_baseline() {
        let distance_km = 5.0;
        let losses: Vec<f64> = ALL_ENVIRONMENTS
            .iter()
            .map(|&environment| {
                calculate_path_loss(
                    distance_km,
                    &PropagationParameters {
                        environment,
                        ..urban_1800()
                    },
                )
            })
            .collect();
        let (dense, urban, suburban, rural) = (losses[0], losses[1], losses[2], losses[3]);
        assert!((dense - urban - 3.0).abs() < 1e-9);
        assert!((urban - 159.37766537790117).abs() < 1e-9);
        assert!((suburban - 147.4391094774525).abs() < 1e-9);
        assert!((rural - 127.45411078218294).abs() < 1e-9);
    }

    #[test]
    fn reference_link_budget_yields_expected_radius() {
        let budget = LinkBudget {
            max_path_loss_db: 138.5,
            propagation: urban_1800(),
        };
        let radius = budget.cell_radius_km().unwrap();
        assert!((radius - 1.2772415314811847).abs() < 1e-9);
    }

    #[test]
    fn one_meter_mast_degenerates_the_inversion() {
        let params = PropagationParameters {
            base_station_height_m: 1.0,
            ..urban_1800()
        };
        let result = calculate_cell_radius(138.5, &params);
        assert!(matches!(
            result,
            Err(DomainError::DegenerateSlope {
                base_station_height_m
            }) if base_station_height_m == 1.0
        ));
    }

    #[test]
    fn validation_rejects_non_positive_parameters() {
        let mut params = urban_1800();
        params.frequency_mhz = 0.0;
        assert!(params.validate().is_err());

        let mut params = urban_1800();
        params.base_station_height_m = -30.0;
        assert!(params.validate().is_err());

        let mut params = urban_1800();
        params.mobile_height_m = 0.0;
        assert!(params.validate().is_err());

        assert!(urban_1800().validate().is_ok());
    }
}
