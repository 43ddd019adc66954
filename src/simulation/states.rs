//! Particle ensemble state for the N-body simulation
//!
//! The ensemble is stored as coupled bulk arrays, all indexed by particle
//! id `i` in `[0, N)`:
//! - `positions` – N×3 matrix, one row per particle (length units)
//! - `mass`      – N×1 column of non-negative masses
//! - `velocity`  – N×3 matrix, same shape and indexing as `positions`
//!
//! N is fixed for the lifetime of a run; there is no particle creation or
//! destruction. The matrix layout (rather than a `Vec` of body structs) is
//! what lets the force kernel work on whole pairwise matrices at once.

use nalgebra::{DVector, MatrixXx3, RowVector3};

use super::params::SOFTENING;

#[derive(Debug, Clone)]
pub struct System {
    pub positions: MatrixXx3<f64>, // N×3 positions
    pub mass: DVector<f64>,        // N×1 masses
    pub velocity: MatrixXx3<f64>,  // N×3 velocities
}

impl System {
    /// Bundle the three state arrays. The leading dimensions must agree;
    /// a mismatch is a caller bug and panics immediately rather than
    /// surfacing later as a dimension error inside the kernel.
    pub fn new(positions: MatrixXx3<f64>, mass: DVector<f64>, velocity: MatrixXx3<f64>) -> Self {
        assert_eq!(positions.nrows(), mass.len(), "positions/mass length mismatch");
        assert_eq!(positions.nrows(), velocity.nrows(), "positions/velocity length mismatch");
        Self { positions, mass, velocity }
    }

    /// Number of particles N
    pub fn len(&self) -> usize {
        self.mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass.len() == 0
    }

    /// Total momentum Σ mᵢ vᵢ. Zero (up to round-off) once velocities have
    /// been shifted into the center-of-mass frame, and leapfrog keeps it so.
    pub fn total_momentum(&self) -> RowVector3<f64> {
        let mut p = RowVector3::zeros();
        for (row, &m) in self.velocity.row_iter().zip(self.mass.iter()) {
            p += m * row;
        }
        p
    }

    /// Mass-weighted mean position Σ mᵢ xᵢ / Σ mᵢ
    pub fn center_of_mass(&self) -> RowVector3<f64> {
        let mut com = RowVector3::zeros();
        for (row, &m) in self.positions.row_iter().zip(self.mass.iter()) {
            com += m * row;
        }
        com / self.mass.sum()
    }

    /// Kinetic energy ½ Σ mᵢ |vᵢ|²
    pub fn kinetic_energy(&self) -> f64 {
        self.velocity
            .row_iter()
            .zip(self.mass.iter())
            .map(|(row, &m)| 0.5 * m * row.norm_squared())
            .sum()
    }

    /// Softened gravitational potential energy, each pair counted once:
    /// −G Σ_{i<j} mᵢ mⱼ / √(rᵢⱼ² + ε²)
    ///
    /// Uses the same softening as the force kernel, so kinetic + potential
    /// is the quantity the leapfrog integrator approximately conserves.
    pub fn potential_energy(&self, g: f64) -> f64 {
        let n = self.len();
        let eps2 = SOFTENING * SOFTENING;
        let mut pe = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let dr = self.positions.row(j) - self.positions.row(i);
                let r = (dr.norm_squared() + eps2).sqrt();
                pe -= g * self.mass[i] * self.mass[j] / r;
            }
        }
        pe
    }
}
