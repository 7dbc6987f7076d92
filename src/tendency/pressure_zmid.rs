//! Generalized-coordinate pressure-and-zMid formulation.
//!
//! For each active layer k at an edge between cells 1 and 2:
//!
//! tend += mask · (1/dc) · [ −(1/ρ₀)·(p₂ − p₁)
//!                           − (g/ρ₀)·½(ρ₁ + ρ₂)·(zMid₂ − zMid₁) ]
//!
//! The second term corrects the constant-coordinate pressure difference
//! for the tilt of the coordinate surface, using the locally averaged
//! density. This is the standard pressure gradient for z-like vertical
//! coordinates and also serves as the top-layer base case of the Jacobian
//! schemes.

use crate::config::PressureGradParams;
use crate::mesh::EdgeMesh;
use crate::state::OceanState;

/// Pressure-gradient estimate for a single layer of one edge.
///
/// Shared with the Jacobian schemes, which use it at their shallowest
/// active layer before integrating density Jacobians downward.
#[inline(always)]
pub(crate) fn layer_gradient(
    state: &OceanState,
    params: &PressureGradParams,
    cell1: usize,
    cell2: usize,
    k: usize,
    inv_dc: f64,
) -> f64 {
    let dp = state.pressure.get(k, cell2) - state.pressure.get(k, cell1);
    let rho_mean = 0.5 * (state.density.get(k, cell1) + state.density.get(k, cell2));
    let dz = state.z_mid.get(k, cell2) - state.z_mid.get(k, cell1);

    (-params.density0_inv * dp - params.gdensity0_inv * rho_mean * dz) * inv_dc
}

/// Accumulate the pressure-and-zMid tendency into one edge column.
pub(crate) fn accumulate_edge(
    mesh: &EdgeMesh,
    state: &OceanState,
    params: &PressureGradParams,
    edge: usize,
    col: &mut [f64],
) {
    let [cell1, cell2] = mesh.cells_on_edge[edge];
    let inv_dc = 1.0 / mesh.dc_edge[edge];

    let (k_min, k_max) = mesh.active_range(edge);
    for k in k_min..=k_max {
        col[k] += mesh.edge_mask.get(k, edge) * layer_gradient(state, params, cell1, cell2, k, inv_dc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PressureGradConfig;
    use crate::fields::{CellField, TracerFields};

    const TOL: f64 = 1e-15;

    #[test]
    fn test_flat_coordinates_reduce_to_pressure_difference() {
        let n_levels = 2;
        let mesh = EdgeMesh::chain(2, n_levels, 500.0, 0.0).unwrap();
        let zeros = CellField::zeros(n_levels, 2);
        let tracers = TracerFields::zeros(2, n_levels, 2);

        // Flat zMid (no coordinate tilt), pressure differing by 100 Pa
        let z_mid = CellField::from_fn(n_levels, 2, |k, _| -(k as f64) - 0.5);
        let pressure = CellField::from_fn(n_levels, 2, |_, cell| 1000.0 + 100.0 * cell as f64);
        let density = CellField::constant(n_levels, 2, 1026.0);

        let state = OceanState {
            ssh: &[0.0, 0.0],
            surface_pressure: &[0.0, 0.0],
            pressure: &pressure,
            montgomery_potential: &zeros,
            z_mid: &z_mid,
            density: &density,
            potential_density: &zeros,
            thermal_expansion: &zeros,
            saline_contraction: &zeros,
            tracers: &tracers,
        };
        let params = PressureGradParams::initialize(&PressureGradConfig::new()).unwrap();

        let mut col = vec![0.0; n_levels];
        accumulate_edge(&mesh, &state, &params, 0, &mut col);

        let expected = -(1.0 / 1026.0) * 100.0 / 500.0;
        for &v in &col {
            assert!((v - expected).abs() < TOL);
        }
    }

    #[test]
    fn test_tilt_term_cancels_hydrostatic_pressure() {
        // Hydrostatically balanced state with uniform density: the
        // coordinate-tilt correction must cancel the pressure difference
        // caused by tilted layer midpoints, layer by layer.
        let n_levels = 3;
        let mesh = EdgeMesh::chain(2, n_levels, 800.0, 0.0).unwrap();
        let rho = 1027.5;
        let g = 9.80665;

        let zeros = CellField::zeros(n_levels, 2);
        let tracers = TracerFields::zeros(2, n_levels, 2);
        // Cell 2's coordinate surfaces are 0.4 m deeper
        let z_mid = CellField::from_fn(n_levels, 2, |k, cell| {
            -(k as f64 + 0.5) * 10.0 - 0.4 * cell as f64
        });
        // Hydrostatic pressure at the midpoints: p = -ρ g zMid
        let z_for_p = z_mid.clone();
        let pressure = CellField::from_fn(n_levels, 2, |k, cell| -rho * g * z_for_p.get(k, cell));
        let density = CellField::constant(n_levels, 2, rho);

        let state = OceanState {
            ssh: &[0.0, 0.0],
            surface_pressure: &[0.0, 0.0],
            pressure: &pressure,
            montgomery_potential: &zeros,
            z_mid: &z_mid,
            density: &density,
            potential_density: &zeros,
            thermal_expansion: &zeros,
            saline_contraction: &zeros,
            tracers: &tracers,
        };
        let params = PressureGradParams::initialize(&PressureGradConfig::new()).unwrap();

        let mut col = vec![0.0; n_levels];
        accumulate_edge(&mesh, &state, &params, 0, &mut col);
        for &v in &col {
            assert!(v.abs() < 1e-12, "residual tendency {v}");
        }
    }
}
