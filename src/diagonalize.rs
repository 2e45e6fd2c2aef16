//! Diagonalization façade over packed covariance matrices
//!
//! [`Diagonalizer`] is the surface geometric algorithms call: it expands the
//! caller's packed covariance into a dense symmetric matrix, hands it to the
//! configured [`EigenEngine`], and repacks the result into the layout the
//! caller contract promises (ascending eigenvalues, row-per-eigenvector
//! matrix). Engine non-convergence surfaces as an `Err`; outputs only exist
//! on `Ok`, so there is no partially written state to misread.
//!
//! # Example
//!
//! ```
//! use symdiag::Diagonalizer;
//!
//! // Packed upper triangle of diag(2, 1, 1)
//! let cov = [2.0f64, 0.0, 0.0, 1.0, 0.0, 1.0];
//!
//! let diag = Diagonalizer::<f64>::new();
//! let values = diag.eigenvalues(&cov).unwrap();
//!
//! assert!((values[0] - 1.0).abs() < 1e-12);
//! assert!((values[1] - 1.0).abs() < 1e-12);
//! assert!((values[2] - 2.0).abs() < 1e-12);
//! ```

use std::marker::PhantomData;

use num_traits::Float;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::engine::{EigenEngine, JacobiEngine};
use crate::error::Result;
use crate::packed::{expand, packed_len};

/// Stateless diagonalization adapter for packed symmetric matrices
///
/// Parameterized by the scalar field type `T`, the eigen engine `E`
/// (defaulting to [`JacobiEngine`]) and the compile-time dimension `DIM`
/// (defaulting to 3, the covariance size of point-set geometry). Holds no
/// per-call state, so one instance may be shared freely across threads.
///
/// All operations take the packed upper triangle described in
/// [`crate::packed`] and require exactly `DIM * (DIM + 1) / 2` scalars;
/// shorter or longer input is a contract violation and panics.
#[derive(Debug, Clone, Copy)]
pub struct Diagonalizer<T, E = JacobiEngine, const DIM: usize = 3> {
    engine: E,
    _scalar: PhantomData<T>,
}

impl<T: Float, const DIM: usize> Diagonalizer<T, JacobiEngine, DIM> {
    /// Creates a diagonalizer backed by the default Jacobi engine
    pub fn new() -> Self {
        Self::with_engine(JacobiEngine::default())
    }
}

impl<T: Float, const DIM: usize> Default for Diagonalizer<T, JacobiEngine, DIM> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float, E: EigenEngine<T>, const DIM: usize> Diagonalizer<T, E, DIM> {
    /// Creates a diagonalizer backed by a caller-supplied engine
    ///
    /// Alternate numeric back ends plug in here without changing any call
    /// site that uses the three operations below.
    pub fn with_engine(engine: E) -> Self {
        Diagonalizer {
            engine,
            _scalar: PhantomData,
        }
    }

    /// Computes the eigenvalues of a packed symmetric matrix
    ///
    /// Returned in ascending order. Cheaper than [`Self::eigen_pairs`] for
    /// callers that never look at directions.
    ///
    /// # Errors
    ///
    /// [`crate::SymdiagError::NonConvergence`] if the engine fails.
    #[cfg_attr(feature = "tracing", instrument(skip_all, fields(dim = DIM)))]
    pub fn eigenvalues(&self, packed: &[T]) -> Result<[T; DIM]> {
        let eig = self.decompose(packed)?;

        let mut values = [T::zero(); DIM];
        for (out, &lambda) in values.iter_mut().zip(&eig.eigenvalues) {
            *out = lambda;
        }
        Ok(values)
    }

    /// Computes eigenvalues and eigenvectors of a packed symmetric matrix
    ///
    /// Eigenvalues come back ascending. The eigenvector matrix is row-major
    /// with **row** `i` holding the unit eigenvector for `eigenvalues[i]` —
    /// the transpose of the engine's column convention, applied here so
    /// callers can index eigenvectors as contiguous rows.
    ///
    /// # Errors
    ///
    /// [`crate::SymdiagError::NonConvergence`] if the engine fails.
    #[cfg_attr(feature = "tracing", instrument(skip_all, fields(dim = DIM)))]
    pub fn eigen_pairs(&self, packed: &[T]) -> Result<([T; DIM], [[T; DIM]; DIM])> {
        let eig = self.decompose(packed)?;

        let mut values = [T::zero(); DIM];
        let mut vectors = [[T::zero(); DIM]; DIM];
        for i in 0..DIM {
            values[i] = eig.eigenvalues[i];
            for j in 0..DIM {
                // Engine column i becomes output row i
                vectors[i][j] = eig.eigenvectors[j * DIM + i];
            }
        }
        Ok((values, vectors))
    }

    /// Extracts the eigenvector paired with the smallest eigenvalue
    ///
    /// Performs a full decomposition internally but copies out only the
    /// least-variance direction, which is the surface-normal estimate for a
    /// local point-neighborhood covariance. Column 0 of the engine output,
    /// given ascending eigenvalue order.
    ///
    /// # Errors
    ///
    /// [`crate::SymdiagError::NonConvergence`] if the engine fails.
    #[cfg_attr(feature = "tracing", instrument(skip_all, fields(dim = DIM)))]
    pub fn smallest_eigenvector(&self, packed: &[T]) -> Result<[T; DIM]> {
        let eig = self.decompose(packed)?;

        let mut normal = [T::zero(); DIM];
        for (row, out) in normal.iter_mut().enumerate() {
            *out = eig.eigenvectors[row * DIM];
        }
        Ok(normal)
    }

    fn decompose(&self, packed: &[T]) -> Result<crate::engine::Decomposition<T>> {
        assert_eq!(
            packed.len(),
            packed_len(DIM),
            "packed symmetric matrix of dimension {} must hold {} scalars, got {}",
            DIM,
            packed_len(DIM),
            packed.len()
        );

        let dense = expand(packed, DIM);
        self.engine.decompose(&dense, DIM)
    }
}
