//! Fixed-step leapfrog time integration
//!
//! Kick-drift-kick velocity-Verlet: two half velocity updates bracketing a
//! full position update, with a force evaluation after the drift. Time
//! symmetric and symplectic, so energy is approximately conserved over long
//! integrations and total momentum is conserved exactly (up to round-off)
//! once the velocities start in the center-of-mass frame.

use nalgebra::{DVector, MatrixXx3};

use super::forces::pairwise_accelerations;
use super::params::Parameters;

/// Shift velocities into the frame where total momentum is zero:
/// `vel = v0 − mean(mass ⊙ v0, axis 0) / mean(mass)`
///
/// The mean-over-mean form matches the usual Σmᵢv₀ᵢ/Σmᵢ center-of-mass
/// velocity: both numerator and denominator carry a 1/N that cancels. It
/// holds for unequal masses too, not just the equal-mass case.
pub fn center_of_mass_frame(v0: &MatrixXx3<f64>, mass: &DVector<f64>) -> MatrixXx3<f64> {
    // Mass-weighted velocities, then the column mean over all particles
    let mut weighted = v0.clone();
    for (mut row, &m) in weighted.row_iter_mut().zip(mass.iter()) {
        row *= m;
    }
    let drift = weighted.row_mean() / mass.mean();

    let mut vel = v0.clone();
    for mut row in vel.row_iter_mut() {
        row -= &drift;
    }
    vel
}

/// Advance the ensemble through `params.n_steps` leapfrog steps and return
/// the final positions.
///
/// Takes ownership of the position buffer for the duration of the run, so
/// nothing else can alias the state while it is being advanced; the buffer
/// comes back as the return value. `v0` is read once for the frame shift
/// and never mutated.
///
/// Each step costs one kernel evaluation (the seed acceleration is computed
/// once up front):
/// 1. half-kick  v += a · dt/2
/// 2. drift      x += v · dt
/// 3. recompute  a at the drifted positions
/// 4. half-kick  v += a · dt/2
///
/// There are no stability guards: a step size too large for the closest
/// encounter in the system will silently produce diverging orbits (and
/// eventually NaN). Choosing physical parameters is the caller's problem.
pub fn simulate_n_body(
    mut positions: MatrixXx3<f64>,
    mass: &DVector<f64>,
    v0: &MatrixXx3<f64>,
    params: &Parameters,
) -> MatrixXx3<f64> {
    // Convert to the center-of-mass frame so the whole system's centroid
    // does not drift across the integration
    let mut vel = center_of_mass_frame(v0, mass);

    // Seed acceleration at the initial positions
    let mut acc = pairwise_accelerations(&positions, mass, params.G);

    let half_dt = 0.5 * params.dt;

    for _ in 0..params.n_steps {
        // Kick: v_n+1/2 = v_n + (dt/2) a_n
        vel += &acc * half_dt;

        // Drift: x_n+1 = x_n + dt v_n+1/2
        positions += &vel * params.dt;

        // a_n+1 from the drifted positions x_n+1
        acc = pairwise_accelerations(&positions, mass, params.G);

        // Second kick: v_n+1 = v_n+1/2 + (dt/2) a_n+1
        vel += &acc * half_dt;
    }

    positions
}
