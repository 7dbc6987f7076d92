//! Pressure-gradient tendency computation.
//!
//! The dispatcher matches once on the resolved scheme and then sweeps the
//! owned edges, accumulating each formulation's contribution into the
//! caller-owned tendency field. `tend` is never zeroed here: the engine
//! adds onto whatever the caller has accumulated already.
//!
//! Every edge writes only its own tendency column and reads only the
//! shared state snapshot, so the edge loop is embarrassingly parallel.
//! The feature-gated parallel entry point hands disjoint per-edge columns
//! to rayon; the vertical loop inside the Jacobian formulations stays
//! sequential per edge because each layer depends on the running gradient
//! of the layer above.

mod constant_forced;
mod jacobian;
mod montgomery;
mod pressure_zmid;
mod ssh_gradient;

use crate::config::PressureGradParams;
use crate::fields::EdgeField;
use crate::mesh::EdgeMesh;
use crate::scheme::PressureGradScheme;
use crate::state::OceanState;

use jacobian::JacobianScratch;

/// Accumulate the pressure-gradient tendency over all owned edges.
///
/// Touches only layers in each edge's active range, scaled by the
/// edge/layer mask; with the `Disabled` scheme `tend` is left bit-for-bit
/// unchanged.
pub fn compute_velocity_tendency(
    mesh: &EdgeMesh,
    state: &OceanState,
    params: &PressureGradParams,
    tend: &mut EdgeField,
) {
    debug_assert_eq!(tend.n_levels, mesh.n_levels);
    debug_assert!(tend.n_edges >= mesh.n_edges_owned);

    let n_owned = mesh.n_edges_owned;
    match params.scheme {
        PressureGradScheme::Disabled => {}
        PressureGradScheme::SshGradient { lts } => {
            for (edge, col) in tend.columns_mut(n_owned) {
                ssh_gradient::accumulate_edge(mesh, state, params, lts, edge, col);
            }
        }
        PressureGradScheme::PressureAndZMid => {
            for (edge, col) in tend.columns_mut(n_owned) {
                pressure_zmid::accumulate_edge(mesh, state, params, edge, col);
            }
        }
        PressureGradScheme::MontgomeryPotential => {
            for (edge, col) in tend.columns_mut(n_owned) {
                montgomery::accumulate_edge(mesh, state, params, edge, col);
            }
        }
        PressureGradScheme::MontgomeryPotentialAndDensity => {
            for (edge, col) in tend.columns_mut(n_owned) {
                montgomery::accumulate_edge_with_density(mesh, state, params, edge, col);
            }
        }
        PressureGradScheme::JacobianFromDensity { level_weight } => {
            let mut scratch = JacobianScratch::new(mesh.n_levels);
            for (edge, col) in tend.columns_mut(n_owned) {
                jacobian::accumulate_edge_density(
                    mesh,
                    state,
                    params,
                    level_weight,
                    edge,
                    col,
                    &mut scratch,
                );
            }
        }
        PressureGradScheme::JacobianFromTs {
            level_weight,
            temperature_index,
            salinity_index,
        } => {
            let mut scratch = JacobianScratch::new(mesh.n_levels);
            for (edge, col) in tend.columns_mut(n_owned) {
                jacobian::accumulate_edge_ts(
                    mesh,
                    state,
                    params,
                    level_weight,
                    temperature_index,
                    salinity_index,
                    edge,
                    col,
                    &mut scratch,
                );
            }
        }
        PressureGradScheme::ConstantForced { zonal, meridional } => {
            for (edge, col) in tend.columns_mut(n_owned) {
                constant_forced::accumulate_edge(mesh, params, zonal, meridional, edge, col);
            }
        }
    }
}

/// Parallel version of the tendency pass using rayon.
///
/// Computes the same result as [`compute_velocity_tendency`]: owned-edge
/// columns are disjoint chunks of `tend`, so edges proceed in parallel
/// with no synchronization. Jacobian scratch buffers are allocated per
/// worker task and never shared.
#[cfg(feature = "parallel")]
pub fn compute_velocity_tendency_parallel(
    mesh: &EdgeMesh,
    state: &OceanState,
    params: &PressureGradParams,
    tend: &mut EdgeField,
) {
    use rayon::prelude::*;

    debug_assert_eq!(tend.n_levels, mesh.n_levels);
    debug_assert!(tend.n_edges >= mesh.n_edges_owned);

    let n_levels = tend.n_levels;
    let owned = &mut tend.data[..mesh.n_edges_owned * n_levels];

    match params.scheme {
        PressureGradScheme::Disabled => {}
        PressureGradScheme::SshGradient { lts } => {
            owned
                .par_chunks_mut(n_levels)
                .enumerate()
                .for_each(|(edge, col)| {
                    ssh_gradient::accumulate_edge(mesh, state, params, lts, edge, col)
                });
        }
        PressureGradScheme::PressureAndZMid => {
            owned
                .par_chunks_mut(n_levels)
                .enumerate()
                .for_each(|(edge, col)| {
                    pressure_zmid::accumulate_edge(mesh, state, params, edge, col)
                });
        }
        PressureGradScheme::MontgomeryPotential => {
            owned
                .par_chunks_mut(n_levels)
                .enumerate()
                .for_each(|(edge, col)| montgomery::accumulate_edge(mesh, state, params, edge, col));
        }
        PressureGradScheme::MontgomeryPotentialAndDensity => {
            owned
                .par_chunks_mut(n_levels)
                .enumerate()
                .for_each(|(edge, col)| {
                    montgomery::accumulate_edge_with_density(mesh, state, params, edge, col)
                });
        }
        PressureGradScheme::JacobianFromDensity { level_weight } => {
            owned
                .par_chunks_mut(n_levels)
                .enumerate()
                .for_each_init(
                    || JacobianScratch::new(n_levels),
                    |scratch, (edge, col)| {
                        jacobian::accumulate_edge_density(
                            mesh,
                            state,
                            params,
                            level_weight,
                            edge,
                            col,
                            scratch,
                        )
                    },
                );
        }
        PressureGradScheme::JacobianFromTs {
            level_weight,
            temperature_index,
            salinity_index,
        } => {
            owned
                .par_chunks_mut(n_levels)
                .enumerate()
                .for_each_init(
                    || JacobianScratch::new(n_levels),
                    |scratch, (edge, col)| {
                        jacobian::accumulate_edge_ts(
                            mesh,
                            state,
                            params,
                            level_weight,
                            temperature_index,
                            salinity_index,
                            edge,
                            col,
                            scratch,
                        )
                    },
                );
        }
        PressureGradScheme::ConstantForced { zonal, meridional } => {
            owned
                .par_chunks_mut(n_levels)
                .enumerate()
                .for_each(|(edge, col)| {
                    constant_forced::accumulate_edge(mesh, params, zonal, meridional, edge, col)
                });
        }
    }
}
