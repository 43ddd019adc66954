//! Numerical and physical parameters for a simulation run
//!
//! `Parameters` holds the run constants:
//! - gravitational constant `G`,
//! - fixed time step `dt`,
//! - number of leapfrog steps `n_steps`
//!
//! These are passed explicitly into the integrator rather than living in a
//! global constants module, so a run is fully determined by its arguments.

/// Plummer softening length ε. Added in quadrature to every pairwise
/// squared separation so the 1/r² force stays finite at zero separation.
pub const SOFTENING: f64 = 0.01;

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub G: f64,         // gravitational constant
    pub dt: f64,        // fixed time step
    pub n_steps: usize, // number of leapfrog steps per run
}
