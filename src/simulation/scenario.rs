//! Build fully-initialized simulation runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - run constants (`Parameters`)
//! - ensemble state (`System` with bulk position/mass/velocity arrays)
//!
//! The bundle is consumed by `run()`, which drives the leapfrog integrator
//! and hands back the final positions.

use nalgebra::{DVector, MatrixXx3};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::integrator::simulate_n_body;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// A fully-initialized simulation run: constants plus ensemble state.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    /// Map the YAML-facing config into runtime matrices.
    ///
    /// Body `x`/`v` entries shorter than 3 components panic here with an
    /// index error; anything past the third component is ignored.
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let n = cfg.bodies.len();

        let positions = MatrixXx3::from_fn(n, |i, j| cfg.bodies[i].x[j]);
        let velocity = MatrixXx3::from_fn(n, |i, j| cfg.bodies[i].v[j]);
        let mass = DVector::from_fn(n, |i, _| cfg.bodies[i].m);

        let parameters = Parameters {
            G: cfg.parameters.G,
            dt: cfg.parameters.dt,
            n_steps: cfg.parameters.n_steps,
        };

        Self {
            parameters,
            system: System::new(positions, mass, velocity),
        }
    }

    /// Run the scenario to completion and return the final positions.
    pub fn run(self) -> MatrixXx3<f64> {
        let System { positions, mass, velocity } = self.system;
        simulate_n_body(positions, &mass, &velocity, &self.parameters)
    }
}
