//! Gravitational acceleration kernel for the n-body engine
//!
//! Dense direct summation: every pairwise interaction is computed through
//! whole N×N separation matrices and a matrix-vector contraction against
//! the mass column, rather than an explicit loop over pairs. O(N²) work
//! and O(N²) scratch per call, by design — there is no tree or grid
//! acceleration structure here.

use nalgebra::{DMatrix, DVector, MatrixXx3};

use super::params::SOFTENING;

/// Gravitational acceleration on every particle from every other particle,
/// with Plummer softening.
///
/// Pure function: `positions` is N×3, `mass` is N×1, the result is the N×3
/// acceleration matrix. Deterministic given its inputs, so repeated calls
/// can be timed or replayed without side effects. A length mismatch between
/// `positions` and `mass` panics inside the matrix-vector product with
/// nalgebra's own dimension error.
pub fn pairwise_accelerations(
    positions: &MatrixXx3<f64>,
    mass: &DVector<f64>,
    g: f64,
) -> MatrixXx3<f64> {
    let n = positions.nrows();

    // Per-axis coordinate columns
    let x = positions.column(0);
    let y = positions.column(1);
    let z = positions.column(2);

    // Pairwise separation matrices: entry (i, j) is the component of
    // r_j - r_i, pointing from particle i toward particle j. Antisymmetric,
    // zero on the diagonal.
    let dx = DMatrix::from_fn(n, n, |i, j| x[j] - x[i]);
    let dy = DMatrix::from_fn(n, n, |i, j| y[j] - y[i]);
    let dz = DMatrix::from_fn(n, n, |i, j| z[j] - z[i]);

    // Softened squared separation |r_ij|² + ε² for every pair, then raised
    // to the power -1.5 in place where strictly positive, turning it into
    // the inverse-cube weight 1/|r_soft|³.
    //
    // With ε > 0 every entry, diagonal included, is at least ε² > 0, so the
    // positivity guard always fires. It is still load-bearing: with a zero
    // softening the diagonal would be 0^(-1.5) = inf instead of being left
    // alone, and the self-interaction rows would be poisoned. Keep the
    // guard even though it looks redundant at ε = 0.01.
    let mut inv_r3 =
        dx.component_mul(&dx) + dy.component_mul(&dy) + dz.component_mul(&dz);
    inv_r3.add_scalar_mut(SOFTENING * SOFTENING);
    inv_r3.apply(|r2| {
        if *r2 > 0.0 {
            *r2 = r2.powf(-1.5);
        }
    });

    // Per axis: a_x[i] = G Σ_j dx[i][j] · inv_r3[i][j] · m[j]
    // (Hadamard product, then contraction against the mass column).
    // The diagonal contributes exactly zero regardless of inv_r3's diagonal
    // value, because the separation there is zero: self-force never enters.
    let ax = g * (dx.component_mul(&inv_r3) * mass);
    let ay = g * (dy.component_mul(&inv_r3) * mass);
    let az = g * (dz.component_mul(&inv_r3) * mass);

    // Pack the three axis columns back into an N×3 acceleration matrix
    let mut acc = MatrixXx3::zeros(n);
    acc.set_column(0, &ax);
    acc.set_column(1, &ay);
    acc.set_column(2, &az);
    acc
}
