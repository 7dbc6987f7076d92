//! Borrowed snapshot of the ocean state consumed by the tendency pass.

use crate::fields::{CellField, TracerFields};

/// Read-only view of the ocean state at one sub-step.
///
/// All fields are borrowed from the caller for the duration of a single
/// tendency pass; no formulation retains or aliases them beyond the call.
/// Cell-centered 3-D fields are (layer, cell); `ssh` and
/// `surface_pressure` are per cell.
///
/// Units: `ssh` in m, pressures in Pa, `montgomery_potential` in m²/s²,
/// `z_mid` in m (negative below the surface, magnitude increasing
/// downward), densities in kg/m³, `thermal_expansion` in 1/°C,
/// `saline_contraction` in 1/PSU.
#[derive(Clone, Copy)]
pub struct OceanState<'a> {
    /// Sea-surface height
    pub ssh: &'a [f64],
    /// Surface pressure (atmospheric + ice loading)
    pub surface_pressure: &'a [f64],
    /// Pressure at layer mid-depth
    pub pressure: &'a CellField,
    /// Montgomery potential
    pub montgomery_potential: &'a CellField,
    /// Depth of layer midpoints
    pub z_mid: &'a CellField,
    /// In-situ density
    pub density: &'a CellField,
    /// Potential density
    pub potential_density: &'a CellField,
    /// Thermal expansion coefficient α = -(1/ρ)(∂ρ/∂T)
    pub thermal_expansion: &'a CellField,
    /// Saline contraction coefficient β = (1/ρ)(∂ρ/∂S)
    pub saline_contraction: &'a CellField,
    /// Active tracer stack; temperature and salinity are selected by the
    /// configured tracer indices
    pub tracers: &'a TracerFields,
}
