//! Configuration types for loading simulation scenarios from YAML.
//!
//! A thin, `serde`-deserializable representation of a scenario:
//!
//! - [`ParametersConfig`] – run constants (G, time step, step count)
//! - [`BodyConfig`]       – initial state for each particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 1.0            # gravitational constant
//!   dt: 0.01          # fixed time step
//!   n_steps: 1000     # number of leapfrog steps
//!
//! bodies:
//!   - x: [ -1.0, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     m: 1.0
//!   - x: [  1.0, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     m: 1.0
//! ```
//!
//! The softening length is a fixed engine constant
//! ([`crate::simulation::params::SOFTENING`]) and is deliberately not a
//! configuration field.

use serde::Deserialize;

/// Run constants for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub G: f64,         // gravitational constant
    pub dt: f64,        // fixed time step size
    pub n_steps: usize, // number of leapfrog steps for the run
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position [x, y, z]
    pub v: Vec<f64>, // initial velocity [vx, vy, vz]
    pub m: f64,      // mass, non-negative
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // run constants
    pub bodies: Vec<BodyConfig>,      // initial state of the ensemble
}
