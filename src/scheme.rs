//! Pressure-gradient formulation selection.
//!
//! The configured scheme name is resolved once at initialization into a
//! `PressureGradScheme` value; the tendency dispatcher matches on it
//! exhaustively, so an unrecognized scheme cannot reach the hot loop.

use std::fmt;

/// The selected pressure-gradient formulation.
///
/// Each variant carries only the configuration data its formulation
/// needs. `Disabled` represents the pressure-gradient-off configuration:
/// the tendency pass is a no-op and leaves the tendency array untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressureGradScheme {
    /// Pressure gradient disabled; the tendency pass does nothing
    Disabled,
    /// Barotropic gradient of sea-surface height and surface pressure.
    /// Under local time stepping, the ssh term is handled by the LTS
    /// forcing machinery and only the surface-pressure term applies.
    SshGradient {
        /// Local-time-stepping integrator active
        lts: bool,
    },
    /// Generalized-coordinate gradient of pressure and layer mid-depth
    PressureAndZMid,
    /// Gradient of the Montgomery potential (isopycnal coordinates)
    MontgomeryPotential,
    /// Montgomery potential plus a specific-volume correction term.
    /// Experimental; not supported for production runs.
    MontgomeryPotentialAndDensity,
    /// Finite-volume density Jacobian (Shchepetkin & McWilliams 2003)
    JacobianFromDensity {
        /// Blend weight between the z* and z̄ interface reference depths,
        /// in [0, 1]
        level_weight: f64,
    },
    /// Density Jacobian reconstructed from separate temperature and
    /// salinity Jacobians via locally averaged expansion coefficients
    JacobianFromTs {
        /// Blend weight between the z* and z̄ interface reference depths,
        /// in [0, 1]
        level_weight: f64,
        /// Index of temperature in the tracer stack
        temperature_index: usize,
        /// Index of salinity in the tracer stack
        salinity_index: usize,
    },
    /// Spatially uniform, time-constant forcing decomposed along the edge
    /// orientation; used by idealized test configurations
    ConstantForced {
        /// Zonal forcing component
        zonal: f64,
        /// Meridional forcing component
        meridional: f64,
    },
}

/// Configured name of the SSH-gradient scheme.
pub const NAME_SSH_GRADIENT: &str = "ssh_gradient";
/// Configured name of the pressure-and-zMid scheme.
pub const NAME_PRESSURE_AND_ZMID: &str = "pressure_and_zmid";
/// Configured name of the Montgomery-potential scheme.
pub const NAME_MONTGOMERY_POTENTIAL: &str = "MontgomeryPotential";
/// Configured name of the Montgomery-potential-and-density scheme.
pub const NAME_MONTGOMERY_POTENTIAL_AND_DENSITY: &str = "MontgomeryPotential_and_density";
/// Configured name of the density-Jacobian scheme.
pub const NAME_JACOBIAN_FROM_DENSITY: &str = "Jacobian_from_density";
/// Configured name of the temperature/salinity-Jacobian scheme.
pub const NAME_JACOBIAN_FROM_TS: &str = "Jacobian_from_TS";
/// Configured name of the constant-forcing scheme.
pub const NAME_CONSTANT_FORCED: &str = "constant_forced";

/// All recognized scheme names, for error reporting.
pub const SCHEME_NAMES: [&str; 7] = [
    NAME_SSH_GRADIENT,
    NAME_PRESSURE_AND_ZMID,
    NAME_MONTGOMERY_POTENTIAL,
    NAME_MONTGOMERY_POTENTIAL_AND_DENSITY,
    NAME_JACOBIAN_FROM_DENSITY,
    NAME_JACOBIAN_FROM_TS,
    NAME_CONSTANT_FORCED,
];

impl PressureGradScheme {
    /// The configured name of this scheme, or `"disabled"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::SshGradient { .. } => NAME_SSH_GRADIENT,
            Self::PressureAndZMid => NAME_PRESSURE_AND_ZMID,
            Self::MontgomeryPotential => NAME_MONTGOMERY_POTENTIAL,
            Self::MontgomeryPotentialAndDensity => NAME_MONTGOMERY_POTENTIAL_AND_DENSITY,
            Self::JacobianFromDensity { .. } => NAME_JACOBIAN_FROM_DENSITY,
            Self::JacobianFromTs { .. } => NAME_JACOBIAN_FROM_TS,
            Self::ConstantForced { .. } => NAME_CONSTANT_FORCED,
        }
    }
}

impl fmt::Display for PressureGradScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a configured time-integrator name is one of the two
/// local-time-stepping integrators.
pub fn is_lts_integrator(name: &str) -> bool {
    matches!(name, "LTS" | "FB_LTS")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_names_round_trip() {
        assert_eq!(
            PressureGradScheme::SshGradient { lts: false }.name(),
            NAME_SSH_GRADIENT
        );
        assert_eq!(
            PressureGradScheme::JacobianFromDensity { level_weight: 0.5 }.to_string(),
            "Jacobian_from_density"
        );
        assert_eq!(PressureGradScheme::Disabled.name(), "disabled");
    }

    #[test]
    fn test_lts_integrators() {
        assert!(is_lts_integrator("LTS"));
        assert!(is_lts_integrator("FB_LTS"));
        assert!(!is_lts_integrator("split_explicit"));
        assert!(!is_lts_integrator("RK4"));
        assert!(!is_lts_integrator("lts"));
    }
}
