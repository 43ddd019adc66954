//! Wall-clock benchmarks for the kernel and the integrator
//!
//! The kernel and `simulate_n_body` are pure functions of their arguments,
//! so these drivers only build deterministic synthetic ensembles and time
//! repeated calls. No RNG: positions come from sin/cos of the particle
//! index, which is reproducible and spreads the particles out enough to
//! avoid pathological close encounters.

use std::time::Instant;

use nalgebra::{DVector, MatrixXx3};

use crate::simulation::forces::pairwise_accelerations;
use crate::simulation::integrator::simulate_n_body;
use crate::simulation::params::Parameters;

/// Deterministic ensemble of size `n`: scattered positions, zero
/// velocities, unit masses.
fn make_arrays(n: usize) -> (MatrixXx3<f64>, DVector<f64>, MatrixXx3<f64>) {
    let positions = MatrixXx3::from_fn(n, |i, j| {
        let i_f = i as f64;
        match j {
            0 => (i_f * 0.37).sin() * 5.0,
            1 => (i_f * 0.13).cos() * 5.0,
            _ => (i_f * 0.07).sin() * 5.0,
        }
    });
    let mass = DVector::from_element(n, 1.0);
    let v0 = MatrixXx3::zeros(n);
    (positions, mass, v0)
}

fn bench_params(n_steps: usize) -> Parameters {
    Parameters {
        G: 0.1,
        dt: 0.001,
        n_steps,
    }
}

/// Time a single kernel evaluation for a range of system sizes.
pub fn bench_kernel() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let (positions, mass, _v0) = make_arrays(n);
        let params = bench_params(0);

        // Warm up
        let _ = pairwise_accelerations(&positions, &mass, params.G);

        let t0 = Instant::now();
        let _ = pairwise_accelerations(&positions, &mass, params.G);
        let dt_kernel = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, kernel = {:8.6} s", dt_kernel);
    }
}

/// Time full leapfrog runs (a few steps each) for a range of system sizes
/// and report the per-step cost.
pub fn bench_simulate() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 4; // steps per run (tune as needed)

    for n in ns {
        let (positions, mass, v0) = make_arrays(n);
        let params = bench_params(steps);

        // Warm up with a single-step run
        let warm = bench_params(1);
        let _ = simulate_n_body(positions.clone(), &mass, &v0, &warm);

        let t0 = Instant::now();
        let _ = simulate_n_body(positions, &mass, &v0, &params);
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, leapfrog step = {:8.6} s", per_step);
    }
}
