//! # pgrad-rs
//!
//! Pressure-gradient tendency engine for layered, horizontally-unstructured
//! ocean meshes.
//!
//! Given a snapshot of the ocean state (sea-surface height, pressure,
//! density, Montgomery potential, mid-layer depths, active tracers) on an
//! edge/cell mesh with per-column active-layer ranges, this crate computes
//! the pressure-gradient contribution to the velocity tendency at every
//! owned edge and active layer, using one of seven selectable
//! discretizations.
//!
//! This crate provides:
//! - Layered field storage for cell- and edge-centered quantities
//! - Edge/cell mesh connectivity with active-layer bookkeeping
//! - A validated, immutable pressure-gradient configuration
//! - Seven pressure-gradient formulations, including the density-Jacobian
//!   scheme of Shchepetkin & McWilliams (2003) that suppresses truncation
//!   error from sloping coordinate surfaces
//! - Serial and (feature `parallel`) rayon-parallel tendency passes
//!
//! # Example
//!
//! ```
//! use pgrad_rs::{
//!     CellField, EdgeField, EdgeMesh, OceanState, PressureGradConfig,
//!     PressureGradParams, TracerFields, compute_velocity_tendency,
//! };
//!
//! let n_levels = 4;
//! let mesh = EdgeMesh::chain(2, n_levels, 1000.0, 0.0).unwrap();
//!
//! let ssh = vec![0.0, 0.1];
//! let zeros_cell = CellField::zeros(n_levels, mesh.n_cells);
//! let tracers = TracerFields::zeros(2, n_levels, mesh.n_cells);
//! let state = OceanState {
//!     ssh: &ssh,
//!     surface_pressure: &[0.0, 0.0],
//!     pressure: &zeros_cell,
//!     montgomery_potential: &zeros_cell,
//!     z_mid: &zeros_cell,
//!     density: &zeros_cell,
//!     potential_density: &zeros_cell,
//!     thermal_expansion: &zeros_cell,
//!     saline_contraction: &zeros_cell,
//!     tracers: &tracers,
//! };
//!
//! let config = PressureGradConfig::new().with_scheme_name("ssh_gradient");
//! let params = PressureGradParams::initialize(&config).unwrap();
//!
//! let mut tend = EdgeField::zeros(n_levels, mesh.n_edges);
//! compute_velocity_tendency(&mesh, &state, &params, &mut tend);
//! ```

pub mod config;
pub mod fields;
pub mod mesh;
pub mod scheme;
pub mod state;
pub mod tendency;

// Re-export main types for convenience
pub use config::{ConfigError, PressureGradConfig, PressureGradParams, GRAVITY, RHO_SW_REF};
pub use fields::{CellField, EdgeField, TracerFields};
pub use mesh::{EdgeMesh, MeshError};
pub use scheme::PressureGradScheme;
pub use state::OceanState;
pub use tendency::compute_velocity_tendency;

#[cfg(feature = "parallel")]
pub use tendency::compute_velocity_tendency_parallel;
