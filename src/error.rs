//! Error types for symdiag operations

use thiserror::Error;

/// Result type for symdiag operations
pub type Result<T> = std::result::Result<T, SymdiagError>;

/// Errors that can occur during diagonalization
///
/// Dimension and layout violations (wrong packed length, non-square dense
/// input) are caller contract violations and panic instead of surfacing
/// here; the only runtime failure mode is the engine not converging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymdiagError {
    /// The iterative eigensolver did not reach its convergence threshold
    #[error("eigensolver failed to converge after {sweeps} sweeps")]
    NonConvergence {
        /// Number of sweeps performed before giving up
        sweeps: usize,
    },
}
