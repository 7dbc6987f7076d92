//! Integration tests for the pressure-gradient tendency engine.
//!
//! These tests verify:
//! - The disabled engine leaves the tendency array untouched
//! - Zero tendency for uniform ssh / surface pressure
//! - The Jacobian schemes collapse to pressure-and-zMid for uniform fields
//! - T/S-Jacobian vs density-Jacobian consistency under a linear EOS
//! - Single-layer boundary behavior of the Jacobian schemes
//! - The worked ssh-gradient and constant-forcing examples

use pgrad_rs::{
    CellField, EdgeField, EdgeMesh, OceanState, PressureGradConfig, PressureGradParams,
    TracerFields, compute_velocity_tendency,
};

const G: f64 = 9.80665;

/// Everything a tendency call needs, with owned storage.
struct ModelState {
    mesh: EdgeMesh,
    ssh: Vec<f64>,
    surface_pressure: Vec<f64>,
    pressure: CellField,
    montgomery: CellField,
    z_mid: CellField,
    density: CellField,
    potential_density: CellField,
    thermal_expansion: CellField,
    saline_contraction: CellField,
    tracers: TracerFields,
}

impl ModelState {
    /// Quiescent two-cell setup with flat coordinates.
    fn quiescent(n_levels: usize, dc: f64) -> Self {
        let n_cells = 2;
        let mesh = EdgeMesh::chain(n_cells, n_levels, dc, 0.0).unwrap();
        Self {
            mesh,
            ssh: vec![0.0; n_cells],
            surface_pressure: vec![0.0; n_cells],
            pressure: CellField::from_fn(n_levels, n_cells, |k, _| {
                1026.0 * G * (k as f64 + 0.5) * 10.0
            }),
            montgomery: CellField::zeros(n_levels, n_cells),
            z_mid: CellField::from_fn(n_levels, n_cells, |k, _| -(k as f64 + 0.5) * 10.0),
            density: CellField::constant(n_levels, n_cells, 1026.0),
            potential_density: CellField::constant(n_levels, n_cells, 1025.5),
            thermal_expansion: CellField::constant(n_levels, n_cells, 1.7e-4),
            saline_contraction: CellField::constant(n_levels, n_cells, 7.6e-4),
            tracers: TracerFields::zeros(2, n_levels, n_cells),
        }
    }

    fn state(&self) -> OceanState<'_> {
        OceanState {
            ssh: &self.ssh,
            surface_pressure: &self.surface_pressure,
            pressure: &self.pressure,
            montgomery_potential: &self.montgomery,
            z_mid: &self.z_mid,
            density: &self.density,
            potential_density: &self.potential_density,
            thermal_expansion: &self.thermal_expansion,
            saline_contraction: &self.saline_contraction,
            tracers: &self.tracers,
        }
    }

    fn run(&self, config: &PressureGradConfig) -> EdgeField {
        let params = PressureGradParams::initialize(config).unwrap();
        let mut tend = EdgeField::zeros(self.mesh.n_levels, self.mesh.n_edges);
        compute_velocity_tendency(&self.mesh, &self.state(), &params, &mut tend);
        tend
    }
}

#[test]
fn test_disabled_engine_is_a_bitwise_noop_for_all_schemes() {
    let model = ModelState::quiescent(4, 1000.0);
    let params =
        PressureGradParams::initialize(&PressureGradConfig::new().with_disabled(true)).unwrap();

    let mut tend = EdgeField::from_fn(4, model.mesh.n_edges, |k, edge| {
        f64::from_bits(0x3ff0_0000_0000_0001 + (k + edge) as u64)
    });
    let before = tend.clone();
    compute_velocity_tendency(&model.mesh, &model.state(), &params, &mut tend);
    assert_eq!(tend, before);
}

#[test]
fn test_uniform_ssh_and_surface_pressure_give_zero_tendency() {
    let mut model = ModelState::quiescent(3, 1000.0);
    model.ssh = vec![0.42, 0.42];
    model.surface_pressure = vec![101_325.0, 101_325.0];

    let tend = model.run(&PressureGradConfig::new().with_scheme_name("ssh_gradient"));
    assert!(tend.data.iter().all(|&v| v == 0.0));
}

#[test]
fn test_ssh_gradient_worked_example() {
    // dc = 1000 m, ssh₁ = 0, ssh₂ = 0.1 m, no surface pressure:
    // tend = -9.80665 × 0.1 / 1000 at the single active layer.
    let mut model = ModelState::quiescent(1, 1000.0);
    model.ssh = vec![0.0, 0.1];

    let tend = model.run(&PressureGradConfig::new().with_scheme_name("ssh_gradient"));
    assert!((tend.get(0, 0) + 9.80665e-4).abs() < 1e-16);
}

#[test]
fn test_constant_forced_worked_example() {
    // Zonal forcing 1, meridional 0, edge angle 0: tend = -g everywhere.
    let model = ModelState::quiescent(3, 1000.0);
    let tend = model.run(
        &PressureGradConfig::new()
            .with_scheme_name("constant_forced")
            .with_constant_forcing(1.0, 0.0),
    );
    for k in 0..3 {
        assert!((tend.get(k, 0) + G).abs() < 1e-15);
    }
}

#[test]
fn test_jacobian_collapses_to_pressure_zmid_for_uniform_density() {
    // Uniform density with tilted coordinates: every Jacobian term is
    // zero, so the multi-layer result is the single pressure-and-zMid
    // gradient replicated at every layer. Compare against the
    // pressure_and_zmid scheme run on the same state.
    let n_levels = 6;
    let mut model = ModelState::quiescent(n_levels, 2000.0);
    model.z_mid = CellField::from_fn(n_levels, 2, |k, cell| {
        -(k as f64 + 0.5) * 12.0 - 0.9 * cell as f64
    });
    // Keep pressure horizontally varying so the base case is non-trivial
    model.pressure = CellField::from_fn(n_levels, 2, |k, cell| {
        1026.0 * G * (k as f64 + 0.5) * 12.0 + 40.0 * cell as f64
    });

    let jacobian = model.run(
        &PressureGradConfig::new()
            .with_scheme_name("Jacobian_from_density")
            .with_level_weight(0.5),
    );
    let reference = model.run(&PressureGradConfig::new().with_scheme_name("pressure_and_zmid"));

    // With uniform density and uniform tilt the reference is the same at
    // every layer; the collapsed Jacobian must replicate it.
    let base = reference.get(0, 0);
    for k in 0..n_levels {
        assert!(
            (jacobian.get(k, 0) - base).abs() < 1e-12,
            "layer {k}: {} vs base {base}",
            jacobian.get(k, 0)
        );
    }
}

#[test]
fn test_ts_jacobian_reduces_to_density_jacobian_for_linear_eos() {
    // ρ = ρref - A(T - T₀) + B(S - S₀), α = A/ρ, β = B/ρ: the combination
    // -ᾱ·J_T + β̄·J_S reproduces the density difference exactly, so the
    // two Jacobian schemes must agree.
    let n_levels = 5;
    let n_cells = 2;
    let (rho_ref, t0, s0, a, b) = (1026.0, 10.0, 34.0, 0.2, 0.78);

    let mut model = ModelState::quiescent(n_levels, 1800.0);
    model.z_mid = CellField::from_fn(n_levels, n_cells, |k, cell| {
        -(k as f64 + 0.5) * 18.0 - 1.1 * cell as f64 * (1.0 + 0.3 * k as f64)
    });
    let temperature = CellField::from_fn(n_levels, n_cells, |k, cell| {
        15.0 - 1.1 * k as f64 - 0.4 * cell as f64
    });
    let salinity = CellField::from_fn(n_levels, n_cells, |k, cell| {
        32.8 + 0.3 * k as f64 + 0.12 * cell as f64
    });
    model.density = CellField::from_fn(n_levels, n_cells, |k, cell| {
        rho_ref - a * (temperature.get(k, cell) - t0) + b * (salinity.get(k, cell) - s0)
    });
    let density = model.density.clone();
    model.thermal_expansion =
        CellField::from_fn(n_levels, n_cells, |k, cell| a / density.get(k, cell));
    model.saline_contraction =
        CellField::from_fn(n_levels, n_cells, |k, cell| b / density.get(k, cell));
    model.tracers = TracerFields::from_fn(2, n_levels, n_cells, |tracer, k, cell| {
        if tracer == 0 {
            temperature.get(k, cell)
        } else {
            salinity.get(k, cell)
        }
    });

    let from_density = model.run(
        &PressureGradConfig::new()
            .with_scheme_name("Jacobian_from_density")
            .with_level_weight(0.2),
    );
    let from_ts = model.run(
        &PressureGradConfig::new()
            .with_scheme_name("Jacobian_from_TS")
            .with_level_weight(0.2)
            .with_tracer_indices(0, 1),
    );

    for i in 0..from_density.data.len() {
        assert!(
            (from_density.data[i] - from_ts.data[i]).abs() < 1e-10,
            "index {i}: {} vs {}",
            from_density.data[i],
            from_ts.data[i]
        );
    }
}

#[test]
fn test_single_layer_edge_jacobian_is_base_case_only() {
    let mut model = ModelState::quiescent(1, 1000.0);
    model.density = CellField::from_fn(1, 2, |_, cell| 1026.0 + 0.4 * cell as f64);
    model.pressure = CellField::from_fn(1, 2, |_, cell| 1.0e5 + 200.0 * cell as f64);
    model.z_mid = CellField::from_fn(1, 2, |_, cell| -8.0 - 0.3 * cell as f64);

    let jacobian = model.run(
        &PressureGradConfig::new()
            .with_scheme_name("Jacobian_from_density")
            .with_level_weight(0.7),
    );
    let reference = model.run(&PressureGradConfig::new().with_scheme_name("pressure_and_zmid"));

    assert!((jacobian.get(0, 0) - reference.get(0, 0)).abs() < 1e-15);
}

#[test]
fn test_montgomery_uniform_potential_is_quiescent() {
    let mut model = ModelState::quiescent(3, 1000.0);
    model.montgomery = CellField::constant(3, 2, 123.4);

    let tend = model.run(&PressureGradConfig::new().with_scheme_name("MontgomeryPotential"));
    assert!(tend.data.iter().all(|&v| v == 0.0));
}

#[test]
fn test_unknown_scheme_fails_initialization() {
    let config = PressureGradConfig::new().with_scheme_name("finite_difference");
    assert!(PressureGradParams::initialize(&config).is_err());
}

#[test]
fn test_masked_layers_contribute_exactly_zero() {
    let mut model = ModelState::quiescent(3, 1000.0);
    model.ssh = vec![0.0, 0.2];
    // Deactivate the bottom layer of the only edge
    model.mesh.edge_mask.set(2, 0, 0.0);

    let tend = model.run(&PressureGradConfig::new().with_scheme_name("ssh_gradient"));
    assert!(tend.get(0, 0).abs() > 0.0);
    assert!(tend.get(1, 0).abs() > 0.0);
    assert_eq!(tend.get(2, 0), 0.0);
}
