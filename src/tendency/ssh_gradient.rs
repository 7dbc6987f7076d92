//! Barotropic SSH-gradient formulation.
//!
//! For each active layer at an edge between cells 1 and 2:
//!
//! tend -= mask · (1/dc) · [ g·(ssh₂ − ssh₁) + (1/ρ₀)·(pₛ,₂ − pₛ,₁) ]
//!
//! The gradient is vertically uniform, so it is computed once per edge and
//! applied to every active layer.
//!
//! Under a local-time-stepping integrator the ssh term is omitted: LTS
//! applies the ssh forcing through its own sub-stepped machinery, and only
//! the surface-pressure term remains here.

use crate::config::PressureGradParams;
use crate::mesh::EdgeMesh;
use crate::state::OceanState;

/// Accumulate the SSH-gradient tendency into one edge column.
pub(crate) fn accumulate_edge(
    mesh: &EdgeMesh,
    state: &OceanState,
    params: &PressureGradParams,
    lts: bool,
    edge: usize,
    col: &mut [f64],
) {
    let [cell1, cell2] = mesh.cells_on_edge[edge];
    let inv_dc = 1.0 / mesh.dc_edge[edge];

    let surface_term =
        params.density0_inv * (state.surface_pressure[cell2] - state.surface_pressure[cell1]);
    let grad = if lts {
        surface_term * inv_dc
    } else {
        (params.gravity * (state.ssh[cell2] - state.ssh[cell1]) + surface_term) * inv_dc
    };

    let (k_min, k_max) = mesh.active_range(edge);
    for k in k_min..=k_max {
        col[k] -= mesh.edge_mask.get(k, edge) * grad;
    }
}
