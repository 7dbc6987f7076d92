//! Montgomery-potential formulations for isopycnal coordinates.
//!
//! Plain form, per active layer k:
//!
//! tend += mask · (1/dc) · [ −(M₂ − M₁) ]
//!
//! where M is the Montgomery potential, whose horizontal gradient along an
//! isopycnal yields the pressure-gradient force directly.
//!
//! The `_and_density` variant adds a specific-volume correction:
//!
//! tend += mask · (1/dc) · [ −(M₂ − M₁) + ½(p₁ + p₂)·(1/ρpot₂ − 1/ρpot₁) ]
//!
//! It is experimental and not supported for production runs.

use crate::config::PressureGradParams;
use crate::mesh::EdgeMesh;
use crate::state::OceanState;

/// Accumulate the Montgomery-potential tendency into one edge column.
pub(crate) fn accumulate_edge(
    mesh: &EdgeMesh,
    state: &OceanState,
    _params: &PressureGradParams,
    edge: usize,
    col: &mut [f64],
) {
    let [cell1, cell2] = mesh.cells_on_edge[edge];
    let inv_dc = 1.0 / mesh.dc_edge[edge];

    let (k_min, k_max) = mesh.active_range(edge);
    for k in k_min..=k_max {
        let dm = state.montgomery_potential.get(k, cell2)
            - state.montgomery_potential.get(k, cell1);
        col[k] += mesh.edge_mask.get(k, edge) * (-dm * inv_dc);
    }
}

/// Accumulate the Montgomery-potential-and-density tendency into one edge
/// column.
pub(crate) fn accumulate_edge_with_density(
    mesh: &EdgeMesh,
    state: &OceanState,
    _params: &PressureGradParams,
    edge: usize,
    col: &mut [f64],
) {
    let [cell1, cell2] = mesh.cells_on_edge[edge];
    let inv_dc = 1.0 / mesh.dc_edge[edge];

    let (k_min, k_max) = mesh.active_range(edge);
    for k in k_min..=k_max {
        let dm = state.montgomery_potential.get(k, cell2)
            - state.montgomery_potential.get(k, cell1);
        let p_mean = 0.5 * (state.pressure.get(k, cell1) + state.pressure.get(k, cell2));
        let dalpha = 1.0 / state.potential_density.get(k, cell2)
            - 1.0 / state.potential_density.get(k, cell1);
        col[k] += mesh.edge_mask.get(k, edge) * (-dm + p_mean * dalpha) * inv_dc;
    }
}
