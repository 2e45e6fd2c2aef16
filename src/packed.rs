//! Packed symmetric-matrix codec
//!
//! A `dim × dim` symmetric matrix is stored as the `dim * (dim + 1) / 2`
//! scalars of its upper triangle (diagonal included), visited row-major with
//! column ≥ row. This is the wire-level layout callers build their covariance
//! accumulators in, so the index mapping here is a hard contract.
//!
//! # Storage Layout
//!
//! For dim = 3:
//! ```text
//! [[a, b, c],          packed: [a, b, c, d, e, f]
//!  [b, d, e],
//!  [c, e, f]]
//! ```
//!
//! # Example
//!
//! ```
//! use symdiag::packed::{expand, packed_index, packed_len};
//!
//! assert_eq!(packed_len(3), 6);
//! assert_eq!(packed_index(3, 1, 2), 4);
//!
//! // diag(2, 1, 1)
//! let dense = expand(&[2.0, 0.0, 0.0, 1.0, 0.0, 1.0], 3);
//! assert_eq!(dense[0], 2.0);
//! assert_eq!(dense[4], 1.0);
//! ```

/// Number of scalars in the packed form of a `dim × dim` symmetric matrix
#[inline]
pub const fn packed_len(dim: usize) -> usize {
    dim * (dim + 1) / 2
}

/// Position of element `(i, j)` within the packed sequence
///
/// Requires `i <= j < dim`. The mapping `dim*i + j - i*(i+1)/2` walks the
/// upper triangle row by row, so `(0, 0)` is first and `(dim-1, dim-1)` last.
#[inline]
pub const fn packed_index(dim: usize, i: usize, j: usize) -> usize {
    dim * i + j - i * (i + 1) / 2
}

/// Expands a packed upper triangle into a dense row-major symmetric matrix
///
/// Symmetry is enforced by construction: both `(i, j)` and `(j, i)` are
/// written from the same packed scalar.
///
/// # Panics
///
/// Panics if `packed.len() != packed_len(dim)`; the packed length is a
/// caller contract, not a recoverable condition.
pub fn expand<T: Copy>(packed: &[T], dim: usize) -> Vec<T> {
    assert_eq!(
        packed.len(),
        packed_len(dim),
        "packed symmetric matrix of dimension {} must hold {} scalars, got {}",
        dim,
        packed_len(dim),
        packed.len()
    );

    let mut dense = Vec::with_capacity(dim * dim);
    for i in 0..dim {
        for j in 0..dim {
            let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
            dense.push(packed[packed_index(dim, lo, hi)]);
        }
    }
    dense
}

/// Compresses a dense row-major symmetric matrix into packed form
///
/// Only the upper triangle is read; the lower triangle is assumed to mirror
/// it and is ignored.
///
/// # Panics
///
/// Panics if `dense.len() != dim * dim`.
pub fn compress<T: Copy>(dense: &[T], dim: usize) -> Vec<T> {
    assert_eq!(
        dense.len(),
        dim * dim,
        "dense matrix of dimension {} must hold {} scalars, got {}",
        dim,
        dim * dim,
        dense.len()
    );

    let mut packed = Vec::with_capacity(packed_len(dim));
    for i in 0..dim {
        for j in i..dim {
            packed.push(dense[i * dim + j]);
        }
    }
    packed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(1), 1);
        assert_eq!(packed_len(2), 3);
        assert_eq!(packed_len(3), 6);
        assert_eq!(packed_len(4), 10);
    }

    #[test]
    fn test_packed_index_dim3() {
        // Upper triangle of a 3x3, row-major with column >= row
        assert_eq!(packed_index(3, 0, 0), 0);
        assert_eq!(packed_index(3, 0, 1), 1);
        assert_eq!(packed_index(3, 0, 2), 2);
        assert_eq!(packed_index(3, 1, 1), 3);
        assert_eq!(packed_index(3, 1, 2), 4);
        assert_eq!(packed_index(3, 2, 2), 5);
    }

    #[test]
    fn test_packed_index_covers_triangle() {
        // Every (i, j) with i <= j maps to a distinct slot in 0..packed_len
        for dim in 1..6 {
            let mut seen = vec![false; packed_len(dim)];
            for i in 0..dim {
                for j in i..dim {
                    let idx = packed_index(dim, i, j);
                    assert!(!seen[idx], "index collision at ({}, {})", i, j);
                    seen[idx] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_expand_is_symmetric() {
        let dense = expand(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3);
        assert_eq!(dense.len(), 9);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(dense[i * 3 + j], dense[j * 3 + i]);
            }
        }
    }

    #[test]
    fn test_expand_dim3_layout() {
        let dense = expand(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3);
        #[rustfmt::skip]
        let expected = vec![
            1.0, 2.0, 3.0,
            2.0, 4.0, 5.0,
            3.0, 5.0, 6.0,
        ];
        assert_eq!(dense, expected);
    }

    #[test]
    fn test_compress_inverts_expand() {
        let packed = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let dense = expand(&packed, 3);
        assert_eq!(compress(&dense, 3), packed);
    }

    #[test]
    fn test_expand_dim1() {
        assert_eq!(expand(&[7.0], 1), vec![7.0]);
    }

    #[test]
    #[should_panic(expected = "must hold 6 scalars")]
    fn test_expand_rejects_wrong_length() {
        expand(&[1.0, 2.0, 3.0], 3);
    }

    #[test]
    #[should_panic(expected = "must hold 9 scalars")]
    fn test_compress_rejects_wrong_length() {
        compress(&[1.0; 4], 3);
    }
}
