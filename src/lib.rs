//! Symdiag: Symmetric-Matrix Diagonalization Adapter
//!
//! **Symdiag** gives geometric-processing algorithms (normal estimation, PCA
//! fitting, moment analysis) a stable eigen-decomposition contract over
//! covariance-like matrices, decoupled from the numeric back end that
//! actually solves them:
//!
//! 1. **Packed codec** - upper-triangle packed layout ↔ dense symmetric matrix
//! 2. **Engine trait** - pluggable symmetric eigensolvers behind [`EigenEngine`]
//! 3. **Façade** - [`Diagonalizer`] orchestrates codec → engine → repacking
//!
//! # Design Principles
//!
//! - **Stable contract**: ascending eigenvalues, row-per-eigenvector output,
//!   all-or-nothing failure semantics callers can rely on across back ends
//! - **Swappable engines**: the bundled Jacobi solver is a default, not a
//!   commitment; anything implementing [`EigenEngine`] slots in
//! - **Stateless and reentrant**: no shared mutable state, safe to call
//!   concurrently from any number of threads
//! - **Full precision**: computation stays in the caller's scalar type
//!   end-to-end, never demoted internally
//!
//! # Quick Start
//!
//! ```rust
//! use symdiag::Diagonalizer;
//!
//! // Packed upper triangle of a 3x3 covariance matrix, row-major with
//! // column >= row: here the identity
//! let cov = [1.0f64, 0.0, 0.0, 1.0, 0.0, 1.0];
//!
//! let diag = Diagonalizer::<f64>::new();
//! let values = diag.eigenvalues(&cov).unwrap();
//! assert!(values.iter().all(|&v| (v - 1.0).abs() < 1e-12));
//!
//! // Least-variance direction, the normal-estimation primitive
//! let normal = diag.smallest_eigenvector(&cov).unwrap();
//! let len: f64 = normal.iter().map(|x| x * x).sum();
//! assert!((len - 1.0).abs() < 1e-12);
//! ```

pub mod diagonalize;
pub mod engine;
pub mod error;
pub mod packed;

pub use diagonalize::Diagonalizer;
pub use engine::{Decomposition, EigenEngine, JacobiEngine};
pub use error::{Result, SymdiagError};
