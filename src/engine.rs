//! Eigen-decomposition engines for dense symmetric matrices
//!
//! The façade in [`crate::diagonalize`] is written against the [`EigenEngine`]
//! trait so the numeric back end can be swapped without touching call sites.
//! [`JacobiEngine`] is the default back end: cyclic Jacobi rotation sweeps,
//! numerically stable and dependency-free, well suited to the small
//! covariance matrices geometric processing produces.

use num_traits::Float;

use crate::error::{Result, SymdiagError};

/// Maximum number of Jacobi sweeps before reporting non-convergence
/// Each sweep rotates all dim*(dim-1)/2 off-diagonal pairs once;
/// well-conditioned matrices typically converge in 5-10 sweeps
const MAX_SWEEPS: usize = 50;

/// Result of a successful symmetric eigen-decomposition
///
/// Eigenvalues are sorted in ascending order. Eigenvectors are the columns
/// of a row-major `dim × dim` matrix, column `i` pairing with
/// `eigenvalues[i]`; the column set is orthonormal.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition<T> {
    /// Eigenvalues in ascending order
    pub eigenvalues: Vec<T>,
    /// Row-major `dim × dim` matrix whose column `i` is the unit eigenvector
    /// for `eigenvalues[i]`
    pub eigenvectors: Vec<T>,
}

/// A symmetric eigen-decomposition back end
///
/// Implementations must return eigenvalues in ascending order with
/// column-major-paired orthonormal eigenvectors, or
/// [`SymdiagError::NonConvergence`] when the numerical method fails. The
/// input is guaranteed numerically symmetric by the caller. Implementations
/// must be stateless per call so concurrent use is safe.
pub trait EigenEngine<T: Float> {
    /// Decomposes a dense row-major symmetric `dim × dim` matrix
    ///
    /// # Panics
    ///
    /// May panic if `dense.len() != dim * dim`; the dense layout is a caller
    /// contract.
    fn decompose(&self, dense: &[T], dim: usize) -> Result<Decomposition<T>>;
}

/// Cyclic Jacobi eigensolver for symmetric matrices
///
/// Iteratively applies Givens rotations to annihilate off-diagonal elements
/// until the matrix is diagonal to within a tolerance scaled by the
/// Frobenius norm and the scalar type's epsilon. Computation runs end-to-end
/// in the caller's scalar type; there is no internal precision narrowing.
///
/// # Example
///
/// ```
/// use symdiag::{EigenEngine, JacobiEngine};
///
/// // [[2, 1], [1, 2]] has eigenvalues 1 and 3
/// let dense = [2.0, 1.0, 1.0, 2.0];
/// let eig = JacobiEngine::default().decompose(&dense, 2).unwrap();
///
/// assert!((eig.eigenvalues[0] - 1.0f64).abs() < 1e-12);
/// assert!((eig.eigenvalues[1] - 3.0f64).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JacobiEngine {
    max_sweeps: usize,
}

impl Default for JacobiEngine {
    fn default() -> Self {
        JacobiEngine {
            max_sweeps: MAX_SWEEPS,
        }
    }
}

impl JacobiEngine {
    /// Creates an engine with a custom sweep cap
    ///
    /// Lowering the cap trades robustness on ill-conditioned input for a
    /// bounded worst-case cost.
    pub fn with_max_sweeps(max_sweeps: usize) -> Self {
        JacobiEngine { max_sweeps }
    }

    /// Annihilates `a[p][q]` / `a[q][p]` with a Givens rotation, accumulating
    /// the rotation into the eigenvector matrix `v`
    ///
    /// Rotation parameters use the cancellation-free formulation from
    /// Golub & Van Loan, "Matrix Computations".
    fn rotate<T: Float>(a: &mut [T], v: &mut [T], dim: usize, p: usize, q: usize) {
        let app = a[p * dim + p];
        let aqq = a[q * dim + q];
        let apq = a[p * dim + q];

        if apq == T::zero() {
            return;
        }

        let one = T::one();
        let two = one + one;

        // tau = (aqq - app) / (2 apq); t = sign(tau) / (|tau| + sqrt(1 + tau²))
        let tau = (aqq - app) / (two * apq);
        let t = if tau >= T::zero() {
            one / (tau + (one + tau * tau).sqrt())
        } else {
            -one / (-tau + (one + tau * tau).sqrt())
        };
        let c = one / (one + t * t).sqrt();
        let s = t * c;

        a[p * dim + p] = app - t * apq;
        a[q * dim + q] = aqq + t * apq;
        a[p * dim + q] = T::zero();
        a[q * dim + p] = T::zero();

        for k in 0..dim {
            if k != p && k != q {
                let akp = a[k * dim + p];
                let akq = a[k * dim + q];
                a[k * dim + p] = c * akp - s * akq;
                a[p * dim + k] = a[k * dim + p];
                a[k * dim + q] = s * akp + c * akq;
                a[q * dim + k] = a[k * dim + q];
            }
        }

        for k in 0..dim {
            let vkp = v[k * dim + p];
            let vkq = v[k * dim + q];
            v[k * dim + p] = c * vkp - s * vkq;
            v[k * dim + q] = s * vkp + c * vkq;
        }
    }

    /// Reorders a diagonalized system into ascending eigenvalue order
    fn sort_ascending<T: Float>(a: &[T], v: &[T], dim: usize) -> Decomposition<T> {
        let raw: Vec<T> = (0..dim).map(|i| a[i * dim + i]).collect();

        let mut order: Vec<usize> = (0..dim).collect();
        order.sort_by(|&i, &j| {
            raw[i]
                .partial_cmp(&raw[j])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let eigenvalues: Vec<T> = order.iter().map(|&i| raw[i]).collect();

        let mut eigenvectors = vec![T::zero(); dim * dim];
        for (new_col, &old_col) in order.iter().enumerate() {
            for row in 0..dim {
                eigenvectors[row * dim + new_col] = v[row * dim + old_col];
            }
        }

        Decomposition {
            eigenvalues,
            eigenvectors,
        }
    }
}

impl<T: Float> EigenEngine<T> for JacobiEngine {
    fn decompose(&self, dense: &[T], dim: usize) -> Result<Decomposition<T>> {
        assert_eq!(
            dense.len(),
            dim * dim,
            "dense symmetric matrix of dimension {} must hold {} scalars, got {}",
            dim,
            dim * dim,
            dense.len()
        );

        let mut a = dense.to_vec();

        // Convergence threshold relative to the Frobenius norm, scaled to the
        // scalar type's resolution so f32 and f64 both terminate
        let frobenius = a
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
            .max(T::one());
        let scale = T::from(dim * dim).unwrap_or_else(T::one);
        let tolerance = frobenius * T::epsilon() * scale;

        let mut v = vec![T::zero(); dim * dim];
        for i in 0..dim {
            v[i * dim + i] = T::one();
        }

        for _sweep in 0..self.max_sweeps {
            let mut rotated = false;

            for p in 0..dim {
                for q in (p + 1)..dim {
                    if a[p * dim + q].abs() > tolerance {
                        Self::rotate(&mut a, &mut v, dim, p, q);
                        rotated = true;
                    }
                }
            }

            if !rotated {
                return Ok(Self::sort_ascending(&a, &v, dim));
            }
        }

        Err(SymdiagError::NonConvergence {
            sweeps: self.max_sweeps,
        })
    }
}
