//! Spatially uniform, time-constant forcing.
//!
//! Decomposes a prescribed (zonal, meridional) forcing pair along each
//! edge's orientation:
//!
//! tend -= g · mask · [ F_zonal·cos(angle) + F_meridional·sin(angle) ]
//!
//! Independent of every state field; used by idealized test
//! configurations such as the parabolic-bowl case.

use crate::config::PressureGradParams;
use crate::mesh::EdgeMesh;

/// Accumulate the constant forcing into one edge column.
pub(crate) fn accumulate_edge(
    mesh: &EdgeMesh,
    params: &PressureGradParams,
    zonal: f64,
    meridional: f64,
    edge: usize,
    col: &mut [f64],
) {
    let angle = mesh.angle_edge[edge];
    let forcing = params.gravity * (zonal * angle.cos() + meridional * angle.sin());

    let (k_min, k_max) = mesh.active_range(edge);
    for k in k_min..=k_max {
        col[k] -= mesh.edge_mask.get(k, edge) * forcing;
    }
}
