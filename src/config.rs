//! Pressure-gradient configuration and initialization.
//!
//! `PressureGradConfig` is the raw configuration surface as a driver would
//! supply it (scheme name string, physical constants, tracer indices).
//! `PressureGradParams::initialize` validates it once and produces the
//! immutable value consumed by every tendency call: the resolved scheme
//! variant plus the precomputed constants `1/ρ₀` and `g/ρ₀`.
//!
//! An unrecognized scheme name is fatal; there is no default scheme to
//! fall back to.

use thiserror::Error;

use crate::scheme::{self, PressureGradScheme};

/// Standard gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.80665;

/// Reference density for seawater (kg/m³).
///
/// Used for the Boussinesq approximation: ρ = ρ₀(1 + ρ'/ρ₀).
pub const RHO_SW_REF: f64 = 1026.0;

/// Error type for pressure-gradient configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured scheme name matches none of the known formulations
    #[error("unrecognized pressure-gradient scheme '{0}' (expected one of {names:?})", names = scheme::SCHEME_NAMES)]
    UnknownScheme(String),

    /// The Jacobian interpolation weight is outside [0, 1]
    #[error("Jacobian level weight {0} is outside [0, 1]")]
    LevelWeightOutOfRange(f64),

    /// The reference density is not positive
    #[error("reference density must be positive, got {0}")]
    NonPositiveDensity(f64),
}

/// Raw pressure-gradient configuration.
///
/// Defaults match a typical z-level global configuration:
/// pressure-and-zMid scheme, ρ₀ = 1026 kg/m³, g = 9.80665 m/s²,
/// split-explicit time integration.
#[derive(Clone, Debug)]
pub struct PressureGradConfig {
    /// Configured scheme name (see [`crate::scheme::SCHEME_NAMES`])
    pub scheme_name: String,
    /// Disable the pressure gradient entirely
    pub disabled: bool,
    /// Reference density ρ₀ (kg/m³)
    pub density0: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Jacobian interface-depth interpolation weight in [0, 1]; only
    /// meaningful for the two Jacobian schemes
    pub level_weight: f64,
    /// Configured time-integrator name; determines the LTS flag
    pub time_integrator: String,
    /// Index of temperature in the tracer stack
    pub temperature_index: usize,
    /// Index of salinity in the tracer stack
    pub salinity_index: usize,
    /// Zonal component of the constant forcing (constant_forced scheme)
    pub zonal_forcing: f64,
    /// Meridional component of the constant forcing (constant_forced scheme)
    pub meridional_forcing: f64,
}

impl Default for PressureGradConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PressureGradConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            scheme_name: scheme::NAME_PRESSURE_AND_ZMID.to_string(),
            disabled: false,
            density0: RHO_SW_REF,
            gravity: GRAVITY,
            level_weight: 0.0,
            time_integrator: "split_explicit".to_string(),
            temperature_index: 0,
            salinity_index: 1,
            zonal_forcing: 0.0,
            meridional_forcing: 0.0,
        }
    }

    /// Set the scheme name.
    pub fn with_scheme_name(mut self, name: &str) -> Self {
        self.scheme_name = name.to_string();
        self
    }

    /// Disable the pressure gradient.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the reference density (kg/m³).
    pub fn with_density0(mut self, density0: f64) -> Self {
        self.density0 = density0;
        self
    }

    /// Set the gravitational acceleration (m/s²).
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the Jacobian interface-depth interpolation weight.
    pub fn with_level_weight(mut self, weight: f64) -> Self {
        self.level_weight = weight;
        self
    }

    /// Set the time-integrator name.
    pub fn with_time_integrator(mut self, name: &str) -> Self {
        self.time_integrator = name.to_string();
        self
    }

    /// Set the tracer-stack indices of temperature and salinity.
    pub fn with_tracer_indices(mut self, temperature: usize, salinity: usize) -> Self {
        self.temperature_index = temperature;
        self.salinity_index = salinity;
        self
    }

    /// Set the constant forcing components.
    pub fn with_constant_forcing(mut self, zonal: f64, meridional: f64) -> Self {
        self.zonal_forcing = zonal;
        self.meridional_forcing = meridional;
        self
    }
}

/// Immutable, validated parameters for the tendency pass.
///
/// Produced once by [`PressureGradParams::initialize`]; treated as
/// read-only for the remainder of the run. Re-initialization produces a
/// fresh value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressureGradParams {
    /// Resolved formulation
    pub scheme: PressureGradScheme,
    /// Gravitational acceleration g (m/s²)
    pub gravity: f64,
    /// 1/ρ₀ (m³/kg)
    pub density0_inv: f64,
    /// g/ρ₀
    pub gdensity0_inv: f64,
}

impl PressureGradParams {
    /// Validate a configuration and precompute the derived constants.
    ///
    /// With the disable flag set this returns immediately with the
    /// `Disabled` scheme and does not inspect the scheme name. Otherwise
    /// an unrecognized scheme name is a fatal configuration error.
    pub fn initialize(config: &PressureGradConfig) -> Result<Self, ConfigError> {
        if config.density0 <= 0.0 {
            return Err(ConfigError::NonPositiveDensity(config.density0));
        }

        let density0_inv = 1.0 / config.density0;
        let gdensity0_inv = config.gravity / config.density0;

        if config.disabled {
            return Ok(Self {
                scheme: PressureGradScheme::Disabled,
                gravity: config.gravity,
                density0_inv,
                gdensity0_inv,
            });
        }

        let scheme = match config.scheme_name.as_str() {
            scheme::NAME_SSH_GRADIENT => PressureGradScheme::SshGradient {
                lts: scheme::is_lts_integrator(&config.time_integrator),
            },
            scheme::NAME_PRESSURE_AND_ZMID => PressureGradScheme::PressureAndZMid,
            scheme::NAME_MONTGOMERY_POTENTIAL => PressureGradScheme::MontgomeryPotential,
            scheme::NAME_MONTGOMERY_POTENTIAL_AND_DENSITY => {
                PressureGradScheme::MontgomeryPotentialAndDensity
            }
            scheme::NAME_JACOBIAN_FROM_DENSITY => {
                check_level_weight(config.level_weight)?;
                PressureGradScheme::JacobianFromDensity {
                    level_weight: config.level_weight,
                }
            }
            scheme::NAME_JACOBIAN_FROM_TS => {
                check_level_weight(config.level_weight)?;
                PressureGradScheme::JacobianFromTs {
                    level_weight: config.level_weight,
                    temperature_index: config.temperature_index,
                    salinity_index: config.salinity_index,
                }
            }
            scheme::NAME_CONSTANT_FORCED => PressureGradScheme::ConstantForced {
                zonal: config.zonal_forcing,
                meridional: config.meridional_forcing,
            },
            other => return Err(ConfigError::UnknownScheme(other.to_string())),
        };

        Ok(Self {
            scheme,
            gravity: config.gravity,
            density0_inv,
            gdensity0_inv,
        })
    }
}

fn check_level_weight(weight: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&weight) {
        Err(ConfigError::LevelWeightOutOfRange(weight))
    } else {
        Ok(())
    }
}
